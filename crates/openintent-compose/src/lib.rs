//! Intent-driven message composition for OpenIntentOS.
//!
//! Turns a free-text instruction such as "schedule a meeting for 1pm with
//! john@x.com" into a subject and a four-section body (greeting, main
//! content, closing, signature).  The [`Composer`] never fails: internal
//! errors degrade to a fallback composition.
//!
//! Delivery is a separate concern behind [`OutboundTransport`].

pub mod classifier;
pub mod composer;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fallback;
pub mod names;
pub mod synthesizer;
pub mod templates;
pub mod tone;
pub mod transport;
pub mod types;

pub use classifier::{Classification, IntentClassifier};
pub use composer::Composer;
pub use config::ComposerConfig;
pub use error::{ComposeError, Result};
pub use extractor::{PayloadExtractor, find_recipient_address};
pub use fallback::fallback_composition;
pub use names::resolve_display_name;
pub use synthesizer::SentenceSynthesizer;
pub use templates::TemplateLibrary;
pub use tone::{ToneAnalyzer, ToneReading};
pub use transport::{DeliveryReceipt, DryRunTransport, OutboundTransport, OutgoingEmail};
pub use types::{
    ComposeContext, ComposedMessage, FormalityLevel, IntentAnalysis, IntentCategory,
    SecondarySignals, ToneCategory, UrgencyLevel,
};
