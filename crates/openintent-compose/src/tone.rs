//! Tone, urgency, formality, and secondary-signal analysis.
//!
//! Tone uses the same ordered first-match scan as intent classification over
//! its own bank.  Urgency, formality, and every [`SecondarySignals`] flag are
//! separate keyword membership tests on the same text; none of them consult
//! the tone or intent result.

use openintent_kernel::{KeywordSet, PatternTable};
use tracing::debug;

use crate::error::Result;
use crate::types::{FormalityLevel, SecondarySignals, ToneCategory, UrgencyLevel};

/// Ordered tone pattern banks.  Earlier entries shadow later ones.
pub const TONE_BANKS: &[(ToneCategory, &[&str])] = &[
    (
        ToneCategory::Friendly,
        &[r"friendly", r"casual", r"informal", r"relaxed", r"warm"],
    ),
    (
        ToneCategory::Formal,
        &[r"formal", r"professional", r"business", r"official", r"corporate"],
    ),
    (
        ToneCategory::Urgent,
        &[r"urgent", r"asap", r"emergency", r"critical", r"immediate"],
    ),
    (
        ToneCategory::Grateful,
        &[r"thank", r"thanks", r"appreciate", r"grateful", r"blessed"],
    ),
    (
        ToneCategory::Apologetic,
        &[r"sorry", r"apologize", r"regret", r"unfortunately", r"apology"],
    ),
    (
        ToneCategory::Enthusiastic,
        &[r"excited", r"thrilled", r"delighted", r"pleased", r"happy"],
    ),
    (
        ToneCategory::Concerned,
        &[r"concerned", r"worried", r"anxious", r"troubled", r"bothered"],
    ),
];

const URGENCY_KEYWORDS: &[&str] = &["urgent", "asap", "emergency", "critical", "immediate"];
const FORMALITY_KEYWORDS: &[&str] = &["business", "professional", "formal", "corporate", "official"];
const ACTION_KEYWORDS: &[&str] = &["call", "meet", "discuss", "review", "schedule", "arrange"];
const QUESTION_KEYWORDS: &[&str] = &["question", "ask", "inquiry", "wonder", "curious"];
const FOLLOWUP_KEYWORDS: &[&str] = &["follow up", "followup", "checking in", "touch base"];
const INTRODUCTION_KEYWORDS: &[&str] = &["introduce", "meet", "new", "first time"];
const COLLABORATION_KEYWORDS: &[&str] = &["collaborate", "partnership", "work together", "team up"];
const FEEDBACK_KEYWORDS: &[&str] = &["feedback", "review", "opinion", "thoughts"];
const PROPOSAL_KEYWORDS: &[&str] = &["proposal", "offer", "suggestion", "idea"];
const CONFIRMATION_KEYWORDS: &[&str] = &["confirm", "verify", "check", "validate"];

/// What the tone analyzer read from an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneReading {
    pub tone: ToneCategory,
    pub urgency: UrgencyLevel,
    pub formality: FormalityLevel,
    pub signals: SecondarySignals,
}

/// Tone, urgency, formality, and secondary-signal reader over immutable
/// pattern and keyword tables.
#[derive(Debug, Clone)]
pub struct ToneAnalyzer {
    table: PatternTable<ToneCategory>,
    urgency: KeywordSet,
    formality: KeywordSet,
    action: KeywordSet,
    questions: KeywordSet,
    followup: KeywordSet,
    introduction: KeywordSet,
    collaboration: KeywordSet,
    feedback: KeywordSet,
    proposal: KeywordSet,
    confirmation: KeywordSet,
}

impl ToneAnalyzer {
    /// Compile the built-in tone bank and keyword sets.
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: PatternTable::new(
                TONE_BANKS
                    .iter()
                    .map(|(tone, patterns)| (*tone, patterns.iter().copied())),
            )?,
            urgency: KeywordSet::new(URGENCY_KEYWORDS)?,
            formality: KeywordSet::new(FORMALITY_KEYWORDS)?,
            action: KeywordSet::new(ACTION_KEYWORDS)?,
            questions: KeywordSet::new(QUESTION_KEYWORDS)?,
            followup: KeywordSet::new(FOLLOWUP_KEYWORDS)?,
            introduction: KeywordSet::new(INTRODUCTION_KEYWORDS)?,
            collaboration: KeywordSet::new(COLLABORATION_KEYWORDS)?,
            feedback: KeywordSet::new(FEEDBACK_KEYWORDS)?,
            proposal: KeywordSet::new(PROPOSAL_KEYWORDS)?,
            confirmation: KeywordSet::new(CONFIRMATION_KEYWORDS)?,
        })
    }

    /// Analyze an instruction.  Unmatched tone is `professional`.
    pub fn analyze(&self, text: &str) -> ToneReading {
        let lowered = text.to_lowercase();

        let tone = self
            .table
            .first_match(&lowered)
            .map_or(ToneCategory::Professional, |hit| hit.label);

        let urgency = if self.urgency.contains_any(&lowered) {
            UrgencyLevel::Urgent
        } else {
            UrgencyLevel::Normal
        };

        let formality = if self.formality.contains_any(&lowered) {
            FormalityLevel::Formal
        } else {
            FormalityLevel::Casual
        };

        let signals = SecondarySignals {
            action_required: self.action.contains_any(&lowered),
            has_questions: self.questions.contains_any(&lowered),
            is_followup: self.followup.contains_any(&lowered),
            is_introduction: self.introduction.contains_any(&lowered),
            is_collaboration: self.collaboration.contains_any(&lowered),
            is_feedback: self.feedback.contains_any(&lowered),
            is_proposal: self.proposal.contains_any(&lowered),
            is_confirmation: self.confirmation.contains_any(&lowered),
        };

        debug!(%tone, %urgency, %formality, ?signals, "tone analyzed");

        ToneReading {
            tone,
            urgency,
            formality,
            signals,
        }
    }

    /// Tone categories in priority order.
    pub fn priority_order(&self) -> Vec<ToneCategory> {
        self.table.labels().copied().collect()
    }
}
