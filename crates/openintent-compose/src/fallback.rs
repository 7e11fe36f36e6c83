//! Degraded composition used when the primary pipeline fails.

use crate::names::resolve_display_name;
use crate::types::{ComposedMessage, FormalityLevel, IntentCategory, ToneCategory, UrgencyLevel};

/// First lines shorter than this (in characters) can serve as a subject.
pub const MAX_SUBJECT_CHARS: usize = 50;

/// Body used when the instruction was a single line that became the subject.
pub const SUBJECT_ONLY_BODY: &str = "Please see the subject line for details.";

/// Build a best-effort message straight from the raw instruction.
///
/// A short first line without an `@` becomes the subject and the remaining
/// lines the body.  Anything else keeps `default_subject` and the whole
/// instruction as body.  Never fails.
pub fn fallback_composition(
    raw: &str,
    address: &str,
    display_name: Option<&str>,
    default_subject: &str,
    error: &str,
) -> ComposedMessage {
    let mut lines = raw.split('\n');
    let first = lines.next().unwrap_or_default().trim();

    let (subject, body) =
        if !first.is_empty() && first.chars().count() < MAX_SUBJECT_CHARS && !first.contains('@') {
            let rest = lines.collect::<Vec<_>>().join("\n");
            let rest = rest.trim();
            let body = if rest.is_empty() { SUBJECT_ONLY_BODY } else { rest };
            (first.to_string(), body.to_string())
        } else {
            (default_subject.to_string(), raw.to_string())
        };

    ComposedMessage {
        subject,
        body,
        intent: IntentCategory::General,
        tone: ToneCategory::Professional,
        recipient_display_name: resolve_display_name(address, display_name),
        urgency: UrgencyLevel::Normal,
        formality: FormalityLevel::Casual,
        payload: String::new(),
        error: Some(error.to_string()),
    }
}
