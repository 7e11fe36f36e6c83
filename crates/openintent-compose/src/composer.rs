//! The composition pipeline.
//!
//! ```text
//! instruction + address
//!   -> IntentClassifier + ToneAnalyzer
//!   -> PayloadExtractor -> display name -> SentenceSynthesizer
//!   -> TemplateLibrary assembly
//!   -> ComposedMessage
//! ```
//!
//! Any stage error short-circuits to [`fallback_composition`].

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::classifier::IntentClassifier;
use crate::config::ComposerConfig;
use crate::error::{ComposeError, Result};
use crate::extractor::PayloadExtractor;
use crate::fallback::fallback_composition;
use crate::names::resolve_display_name;
use crate::synthesizer::SentenceSynthesizer;
use crate::templates::{TemplateLibrary, URGENT_PARAGRAPH_PREFIX};
use crate::tone::ToneAnalyzer;
use crate::types::{ComposeContext, ComposedMessage, IntentAnalysis, UrgencyLevel};

/// Where template variant choices come from.
#[derive(Debug)]
enum VariantSource {
    /// Every call starts from the same seed, so output depends only on input.
    Fixed(u64),
    /// One generator shared across calls.
    Shared(Mutex<StdRng>),
}

/// Intent-driven message composer.
///
/// Holds only immutable pattern tables and template banks, plus the variant
/// source.  `compose_message` takes `&self` and can be shared across threads.
#[derive(Debug)]
pub struct Composer {
    classifier: IntentClassifier,
    tone: ToneAnalyzer,
    extractor: PayloadExtractor,
    synthesizer: SentenceSynthesizer,
    library: TemplateLibrary,
    config: ComposerConfig,
    variants: VariantSource,
}

impl Composer {
    /// Build a composer.  Uses `config.seed` when set, entropy otherwise.
    pub fn new(config: ComposerConfig) -> Result<Self> {
        let variants = match config.seed {
            Some(seed) => VariantSource::Fixed(seed),
            None => VariantSource::Shared(Mutex::new(StdRng::from_entropy())),
        };
        Self::build(config, variants)
    }

    /// Build a composer whose output is fully determined by its input.
    pub fn with_seed(config: ComposerConfig, seed: u64) -> Result<Self> {
        Self::build(config, VariantSource::Fixed(seed))
    }

    /// Build a composer drawing variants from a caller-supplied generator.
    pub fn with_rng(config: ComposerConfig, rng: StdRng) -> Result<Self> {
        Self::build(config, VariantSource::Shared(Mutex::new(rng)))
    }

    fn build(config: ComposerConfig, variants: VariantSource) -> Result<Self> {
        let composer = Self {
            classifier: IntentClassifier::new()?,
            tone: ToneAnalyzer::new()?,
            extractor: PayloadExtractor::new()?,
            synthesizer: SentenceSynthesizer::new()?,
            library: TemplateLibrary::builtin(&config),
            config,
            variants,
        };
        debug!(sender = %composer.config.sender_name, "composer ready");
        Ok(composer)
    }

    /// Replace the template library.
    pub fn with_library(mut self, library: TemplateLibrary) -> Self {
        self.library = library;
        self
    }

    /// The configuration this composer was built with.
    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// The template banks variants are drawn from.
    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    /// Classify intent and tone without composing anything.
    pub fn analyze(&self, instruction: &str) -> IntentAnalysis {
        let classification = self.classifier.classify(instruction);
        let reading = self.tone.analyze(instruction);

        IntentAnalysis {
            intent: classification.intent,
            confidence: classification.confidence,
            tone: reading.tone,
            urgency: reading.urgency,
            formality: reading.formality,
            signals: reading.signals,
        }
    }

    /// Compose a message for `address` from a free-text instruction.
    ///
    /// Never fails: on any internal error the result comes from the fallback
    /// path and carries the error text in [`ComposedMessage::error`].
    pub fn compose_message(
        &self,
        instruction: &str,
        address: &str,
        context: Option<&ComposeContext>,
    ) -> ComposedMessage {
        let display_name = context.and_then(|c| c.recipient_display_name.as_deref());

        match self.try_compose(instruction, address, display_name) {
            Ok(message) => {
                info!(
                    intent = %message.intent,
                    tone = %message.tone,
                    urgency = %message.urgency,
                    formality = %message.formality,
                    "message composed"
                );
                message
            }
            Err(e) => {
                warn!(error = %e, "composition failed, using fallback");
                fallback_composition(
                    instruction,
                    address,
                    display_name,
                    &self.config.fallback_subject,
                    &e.to_string(),
                )
            }
        }
    }

    fn try_compose(
        &self,
        instruction: &str,
        address: &str,
        display_name: Option<&str>,
    ) -> Result<ComposedMessage> {
        let analysis = self.analyze(instruction);
        let payload = self.extractor.extract(instruction, address)?;
        let name = resolve_display_name(address, display_name);

        let subject = self.library.subject(analysis.intent, analysis.urgency);
        let greeting = self
            .library
            .greeting(analysis.formality, analysis.tone, &name);
        let main = self.main_content(&payload, &analysis)?;
        let closing = self.library.closing(
            analysis.urgency,
            analysis.signals.action_required,
            analysis.tone,
            analysis.formality,
        );
        let signature = self.library.signature(analysis.formality, analysis.tone);

        let body = [greeting.as_str(), main.as_str(), closing, signature].join("\n\n");

        Ok(ComposedMessage {
            subject,
            body,
            intent: analysis.intent,
            tone: analysis.tone,
            recipient_display_name: name,
            urgency: analysis.urgency,
            formality: analysis.formality,
            payload,
            error: None,
        })
    }

    /// Synthesized clause plus elaboration, or a long-form paragraph when the
    /// payload is empty or only digits.
    fn main_content(&self, payload: &str, analysis: &IntentAnalysis) -> Result<String> {
        let meaningful = !payload.is_empty() && !payload.chars().all(|c| c.is_ascii_digit());

        if meaningful {
            let sentence = self
                .synthesizer
                .synthesize(payload, analysis.intent, analysis.tone)?;
            let elaboration = self.pick(
                self.library.elaborations(analysis.intent),
                &format!("elaborations.{}", analysis.intent),
            )?;
            return Ok(format!("{sentence}{elaboration}"));
        }

        let paragraph = self.pick(
            self.library.paragraphs(analysis.intent),
            &format!("paragraphs.{}", analysis.intent),
        )?;

        Ok(match analysis.urgency {
            UrgencyLevel::Urgent => format!("{URGENT_PARAGRAPH_PREFIX}{paragraph}"),
            UrgencyLevel::Normal => paragraph.to_string(),
        })
    }

    fn pick<'a>(&self, bank: &'a [String], name: &str) -> Result<&'a str> {
        let choice = match &self.variants {
            VariantSource::Fixed(seed) => bank.choose(&mut StdRng::seed_from_u64(*seed)),
            VariantSource::Shared(rng) => {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                bank.choose(&mut *rng)
            }
        };

        choice
            .map(String::as_str)
            .ok_or_else(|| ComposeError::EmptyTemplateBank {
                bank: name.to_string(),
            })
    }
}
