//! Payload extraction: isolate what the user actually wants said.
//!
//! Removal happens on the lowercased instruction in a fixed order:
//!
//! 1. every email-address token (the recipient's, and any other),
//! 2. name fragments from the recipient's local-part, as whole words,
//! 3. the boilerplate words in [`BOILERPLATE_WORDS`], as whole words,
//! 4. whitespace collapse and trimming of leading/trailing `.`, `,` and
//!    whitespace.
//!
//! A result of two characters or fewer is reported as the empty payload.

use regex::Regex;
use tracing::debug;

use crate::error::{ComposeError, Result};

/// Addressing and action words that never carry meaning on their own.
pub const BOILERPLATE_WORDS: &[&str] = &[
    "send", "email", "mail", "to", "at", "message", "that", "says", "saying", "with", "an",
];

/// Payloads must be longer than this many characters to be meaningful.
pub const MIN_PAYLOAD_CHARS: usize = 2;

const ADDRESS_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Strips addressing noise from an instruction, leaving what should be said.
#[derive(Debug, Clone)]
pub struct PayloadExtractor {
    address: Regex,
    boilerplate: Regex,
    whitespace: Regex,
}

impl PayloadExtractor {
    /// Compile the address, boilerplate, and whitespace patterns.
    pub fn new() -> Result<Self> {
        let boilerplate = format!(r"\b(?:{})\b", BOILERPLATE_WORDS.join("|"));
        Ok(Self {
            address: compile(ADDRESS_PATTERN)?,
            boilerplate: compile(&boilerplate)?,
            whitespace: compile(r"\s+")?,
        })
    }

    /// Extract the payload from `instruction` addressed to `recipient`.
    ///
    /// Returns the empty string when nothing meaningful remains.
    pub fn extract(&self, instruction: &str, recipient: &str) -> Result<String> {
        let mut text = instruction.to_lowercase();

        // 1. Address tokens, whole tokens only.
        if text.contains('@') {
            text = self.address.replace_all(&text, "").into_owned();
        }

        // 2. Recipient name fragments.
        for fragment in name_fragments(recipient) {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(fragment));
            text = compile(&pattern)?.replace_all(&text, "").into_owned();
        }

        // 3. Boilerplate.
        text = self.boilerplate.replace_all(&text, "").into_owned();

        // 4. Whitespace and edge punctuation.
        let collapsed = self.whitespace.replace_all(&text, " ");
        let cleaned = collapsed
            .trim_matches(|c: char| c == '.' || c == ',' || c.is_whitespace())
            .to_string();

        debug!(instruction, payload = %cleaned, "payload extracted");

        if cleaned.chars().count() > MIN_PAYLOAD_CHARS {
            Ok(cleaned)
        } else {
            Ok(String::new())
        }
    }
}

/// Tokens of the recipient's local-part that could leak a name.
///
/// Splits on `.` first, then `_`, else the whole local-part.  Addresses with
/// no `@` yield nothing.
pub fn name_fragments(recipient: &str) -> Vec<&str> {
    let Some((local, _)) = recipient.trim().split_once('@') else {
        return Vec::new();
    };

    let parts: Vec<&str> = if local.contains('.') {
        local.split('.').collect()
    } else if local.contains('_') {
        local.split('_').collect()
    } else {
        vec![local]
    };

    parts.into_iter().filter(|p| !p.is_empty()).collect()
}

/// Find the first email address mentioned in an instruction.
pub fn find_recipient_address(instruction: &str) -> Option<String> {
    let regex = Regex::new(ADDRESS_PATTERN).ok()?;
    regex.find(instruction).map(|m| m.as_str().to_string())
}

/// Compile a regex, reporting failures as [`ComposeError::InvalidPattern`].
pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| ComposeError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(instruction: &str, recipient: &str) -> String {
        PayloadExtractor::new()
            .unwrap()
            .extract(instruction, recipient)
            .unwrap()
    }

    #[test]
    fn strips_address_and_boilerplate() {
        assert_eq!(
            extract("send an email to john@x.com about the meeting", "john@x.com"),
            "about the meeting"
        );
    }

    #[test]
    fn keeps_non_boilerplate_words() {
        assert_eq!(
            extract("schedule a meeting for 1pm with john@x.com", "john@x.com"),
            "schedule a meeting for 1pm"
        );
    }

    #[test]
    fn removes_name_fragments_case_insensitively() {
        assert_eq!(
            extract(
                "Email John.Doe@corp.io and tell John Doe the launch moved",
                "john.doe@corp.io"
            ),
            "and tell the launch moved"
        );
        assert_eq!(
            extract(
                "mail jane_roe@corp.io saying jane, the report is ready",
                "jane_roe@corp.io"
            ),
            "the report is ready"
        );
    }

    #[test]
    fn name_fragments_are_whole_words_only() {
        // "al" must not be cut out of "final".
        assert_eq!(
            extract("send al@x.com the final draft", "al@x.com"),
            "the final draft"
        );
    }

    #[test]
    fn removes_other_addresses_too() {
        assert_eq!(
            extract("email bob@x.com and cc carol@y.org the agenda", "bob@x.com"),
            "and cc the agenda"
        );
    }

    #[test]
    fn recipient_prefix_of_longer_address_leaves_no_fragment() {
        assert_eq!(
            extract("email john@x.com about lunch", "john@x.co"),
            "about lunch"
        );
        assert_eq!(
            extract("send jo@x.io and joan@x.io the plan", "jo@x.io"),
            "and the plan"
        );
    }

    #[test]
    fn short_residue_is_empty() {
        assert_eq!(extract("send an email to john@x.com", "john@x.com"), "");
        assert_eq!(extract("email john@x.com ok", "john@x.com"), "");
        assert_eq!(extract("email john@x.com okay", "john@x.com"), "okay");
    }

    #[test]
    fn trims_edge_punctuation_and_whitespace() {
        assert_eq!(
            extract("send to john@x.com,   lunch   is on friday.", "john@x.com"),
            "lunch is on friday"
        );
    }

    #[test]
    fn regex_metacharacters_in_local_part_are_literal() {
        assert_eq!(
            extract("send a+b@x.com the numbers", "a+b@x.com"),
            "the numbers"
        );
    }

    #[test]
    fn fragments_split_rules() {
        assert_eq!(name_fragments("john.doe@x.com"), vec!["john", "doe"]);
        assert_eq!(name_fragments("john_doe@x.com"), vec!["john", "doe"]);
        assert_eq!(name_fragments("johndoe@x.com"), vec!["johndoe"]);
        assert!(name_fragments("not-an-address").is_empty());
    }

    #[test]
    fn finds_first_address() {
        assert_eq!(
            find_recipient_address("email sarah@gmail.com about the meeting tomorrow").as_deref(),
            Some("sarah@gmail.com")
        );
        assert!(find_recipient_address("call mom").is_none());
    }
}
