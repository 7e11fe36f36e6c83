//! Data model shared by every composition stage.
//!
//! All values here are transient: they are created and discarded within a
//! single [`Composer::compose_message`](crate::Composer::compose_message) call.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::transport::OutgoingEmail;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// The single classified purpose of a message request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    MeetingRequest,
    ThankYou,
    Inquiry,
    Update,
    Greeting,
    Urgent,
    Followup,
    Introduction,
    Collaboration,
    Feedback,
    Proposal,
    Confirmation,
    /// No intent pattern matched.
    #[default]
    General,
}

impl IntentCategory {
    /// The snake_case wire name of this intent.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MeetingRequest => "meeting_request",
            Self::ThankYou => "thank_you",
            Self::Inquiry => "inquiry",
            Self::Update => "update",
            Self::Greeting => "greeting",
            Self::Urgent => "urgent",
            Self::Followup => "followup",
            Self::Introduction => "introduction",
            Self::Collaboration => "collaboration",
            Self::Feedback => "feedback",
            Self::Proposal => "proposal",
            Self::Confirmation => "confirmation",
            Self::General => "general",
        }
    }
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The emotional register of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneCategory {
    Friendly,
    Formal,
    Urgent,
    Grateful,
    Apologetic,
    Enthusiastic,
    Concerned,
    /// No tone pattern matched.
    #[default]
    Professional,
}

impl ToneCategory {
    /// The snake_case wire name of this tone.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Friendly => "friendly",
            Self::Formal => "formal",
            Self::Urgent => "urgent",
            Self::Grateful => "grateful",
            Self::Apologetic => "apologetic",
            Self::Enthusiastic => "enthusiastic",
            Self::Concerned => "concerned",
            Self::Professional => "professional",
        }
    }
}

impl fmt::Display for ToneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Casual vs. formal register, independent of tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormalityLevel {
    Formal,
    #[default]
    Casual,
}

impl fmt::Display for FormalityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formal => write!(f, "formal"),
            Self::Casual => write!(f, "casual"),
        }
    }
}

/// Whether the request carries an urgency keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Urgent,
    #[default]
    Normal,
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Urgent => write!(f, "urgent"),
            Self::Normal => write!(f, "normal"),
        }
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Independent keyword signals computed alongside tone.
///
/// Each flag is its own membership test against the instruction text.  They
/// are not reconciled with each other or with the classified intent: an
/// instruction may be `is_followup` and `is_proposal` while its intent is
/// `meeting_request`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SecondarySignals {
    pub action_required: bool,
    pub has_questions: bool,
    pub is_followup: bool,
    pub is_introduction: bool,
    pub is_collaboration: bool,
    pub is_feedback: bool,
    pub is_proposal: bool,
    pub is_confirmation: bool,
}

/// Everything the classifier and tone analyzer learned about an instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentAnalysis {
    pub intent: IntentCategory,
    /// `0.8` when an intent pattern matched, `0.0` otherwise.
    pub confidence: f64,
    pub tone: ToneCategory,
    pub urgency: UrgencyLevel,
    pub formality: FormalityLevel,
    #[serde(flatten)]
    pub signals: SecondarySignals,
}

// ---------------------------------------------------------------------------
// Composition input / output
// ---------------------------------------------------------------------------

/// Optional caller-supplied context for a composition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComposeContext {
    /// Overrides the display name derived from the recipient address.
    pub recipient_display_name: Option<String>,
}

impl ComposeContext {
    /// Context carrying only a display-name override.
    pub fn with_display_name(name: impl Into<String>) -> Self {
        Self {
            recipient_display_name: Some(name.into()),
        }
    }
}

/// A fully composed message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedMessage {
    pub subject: String,
    /// Greeting, main content, closing, and signature joined by blank lines.
    pub body: String,
    pub intent: IntentCategory,
    pub tone: ToneCategory,
    pub recipient_display_name: String,
    pub urgency: UrgencyLevel,
    pub formality: FormalityLevel,
    /// Residual "what to say", or empty when nothing meaningful was left.
    pub payload: String,
    /// Set when the primary pipeline failed and the fallback was used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComposedMessage {
    /// Whether this message came from the fallback path.
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }

    /// Build the transport envelope for this message.
    pub fn to_outgoing(&self, to: impl Into<String>) -> OutgoingEmail {
        OutgoingEmail {
            to: to.into(),
            subject: self.subject.clone(),
            body: self.body.clone(),
        }
    }

    /// Pretty-printed JSON representation.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
