//! Intent classification.
//!
//! Priority dispatch over [`INTENT_BANKS`]: categories are scanned in
//! declaration order, patterns inside a category in declaration order, and
//! the first pattern found anywhere in the lowercased instruction decides the
//! intent.  Nothing after the first hit is considered, so the order of the
//! banks is part of the behavior.

use openintent_kernel::PatternTable;
use tracing::debug;

use crate::error::Result;
use crate::types::IntentCategory;

/// Confidence reported for any pattern hit.
pub const MATCH_CONFIDENCE: f64 = 0.8;

/// Ordered intent pattern banks.  Earlier entries shadow later ones.
pub const INTENT_BANKS: &[(IntentCategory, &[&str])] = &[
    (
        IntentCategory::MeetingRequest,
        &[
            r"schedule.*meeting",
            r"set up.*meeting",
            r"arrange.*meeting",
            r"book.*meeting",
            r"plan.*meeting",
            r"organize.*meeting",
            r"meeting.*request",
            r"meeting.*scheduling",
            r"about.*scheduling.*meeting",
            r"scheduling.*meeting",
            r"meeting.*for",
            r"meeting.*at",
        ],
    ),
    (
        IntentCategory::ThankYou,
        &[
            r"thank.*you",
            r"thanks",
            r"appreciate",
            r"grateful",
            r"thank.*for.*help",
            r"thank.*for.*support",
            r"thank.*for.*assistance",
            r"appreciation.*email",
            r"thank.*email",
        ],
    ),
    (
        IntentCategory::Inquiry,
        &[
            r"question",
            r"ask",
            r"inquiry",
            r"wonder",
            r"curious",
            r"information",
            r"details",
            r"clarification",
            r"enquiry",
        ],
    ),
    (
        IntentCategory::Update,
        &[
            r"update",
            r"status",
            r"progress",
            r"report",
            r"latest",
            r"current.*status",
            r"how.*going",
            r"what.*happening",
        ],
    ),
    (
        IntentCategory::Greeting,
        &[
            r"hello",
            r"hi",
            r"greeting",
            r"introduce",
            r"meet",
            r"connect",
            r"reach out",
            r"touch base",
        ],
    ),
    (
        IntentCategory::Urgent,
        &[
            r"urgent",
            r"asap",
            r"emergency",
            r"immediate",
            r"critical",
            r"time.*sensitive",
            r"rush",
            r"priority",
        ],
    ),
    (
        IntentCategory::Followup,
        &[
            r"follow.*up",
            r"followup",
            r"checking.*in",
            r"touch.*base",
            r"circling.*back",
            r"reaching.*out",
            r"checking.*status",
            r"followup.*email",
            r"follow.*up.*email",
        ],
    ),
    (
        IntentCategory::Introduction,
        &[
            r"introduce",
            r"introduction",
            r"new",
            r"first.*time",
            r"meeting.*for.*first",
            r"getting.*to.*know",
        ],
    ),
    (
        IntentCategory::Collaboration,
        &[
            r"collaborate",
            r"partnership",
            r"work.*together",
            r"join.*forces",
            r"team.*up",
            r"cooperation",
            r"alliance",
            r"collaboration.*proposal",
            r"partnership.*opportunity",
            r"propose.*collaboration",
            r"partnership.*offer",
        ],
    ),
    (
        IntentCategory::Feedback,
        &[
            r"feedback",
            r"review",
            r"opinion",
            r"thoughts",
            r"suggestions",
            r"input",
            r"advice",
            r"recommendations",
            r"feedback.*request",
            r"ask.*for.*feedback",
            r"request.*opinion",
        ],
    ),
    (
        IntentCategory::Proposal,
        &[
            r"proposal",
            r"offer",
            r"suggestion",
            r"idea",
            r"concept",
            r"proposition",
            r"recommendation",
        ],
    ),
    (
        IntentCategory::Confirmation,
        &[
            r"confirm",
            r"confirmation",
            r"verify",
            r"check",
            r"validate",
            r"ensure",
            r"double.*check",
        ],
    ),
];

/// Result of classifying one instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub intent: IntentCategory,
    pub confidence: f64,
}

/// First-match intent classifier over an immutable pattern table.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    table: PatternTable<IntentCategory>,
}

impl IntentClassifier {
    /// Compile the built-in intent banks.
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: PatternTable::new(INTENT_BANKS.iter().map(|(intent, patterns)| {
                (*intent, patterns.iter().copied())
            }))?,
        })
    }

    /// Classify an instruction.  Unmatched text is `general` with `0.0`.
    pub fn classify(&self, text: &str) -> Classification {
        let lowered = text.to_lowercase();

        match self.table.first_match(&lowered) {
            Some(hit) => {
                debug!(intent = %hit.label, pattern = hit.pattern, "intent matched");
                Classification {
                    intent: hit.label,
                    confidence: MATCH_CONFIDENCE,
                }
            }
            None => {
                debug!("no intent pattern matched, using general");
                Classification {
                    intent: IntentCategory::General,
                    confidence: 0.0,
                }
            }
        }
    }

    /// Intent categories in priority order.
    pub fn priority_order(&self) -> Vec<IntentCategory> {
        self.table.labels().copied().collect()
    }
}
