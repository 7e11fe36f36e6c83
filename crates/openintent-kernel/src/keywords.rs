//! Keyword membership sets.
//!
//! A [`KeywordSet`] answers "does this text contain any of these keywords?"
//! with plain substring semantics, using a single [`aho_corasick`] automaton
//! instead of one scan per keyword.

use aho_corasick::AhoCorasick;

use crate::error::{KernelError, Result};

/// Immutable set of keywords matched as case-sensitive substrings.
///
/// Callers lowercase their input; keywords are lowercased at construction.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
    automaton: AhoCorasick,
}

impl KeywordSet {
    /// Build a keyword set.  Keywords are lowercased.
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();

        let automaton = AhoCorasick::new(&keywords).map_err(|e| KernelError::AutomatonBuild {
            reason: e.to_string(),
        })?;

        Ok(Self {
            keywords,
            automaton,
        })
    }

    /// Whether any keyword occurs anywhere in `text`.
    pub fn contains_any(&self, text: &str) -> bool {
        self.automaton.is_match(text)
    }

    /// The first keyword found in `text`, if any.
    pub fn first_found(&self, text: &str) -> Option<&str> {
        self.automaton
            .find(text)
            .map(|m| self.keywords[m.pattern().as_usize()].as_str())
    }

    /// The keywords in this set.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_membership() {
        let set = KeywordSet::new(["urgent", "asap"]).unwrap();
        assert!(set.contains_any("reply asap please"));
        // Substring semantics: "urgently" contains "urgent".
        assert!(set.contains_any("needed urgently"));
        assert!(!set.contains_any("whenever you can"));
    }

    #[test]
    fn multi_word_keywords() {
        let set = KeywordSet::new(["follow up", "touch base"]).unwrap();
        assert!(set.contains_any("just wanted to touch base"));
        assert!(!set.contains_any("follow the base"));
    }

    #[test]
    fn keywords_are_lowercased() {
        let set = KeywordSet::new(["Formal"]).unwrap();
        assert_eq!(set.keywords(), &["formal".to_string()]);
        assert!(set.contains_any("a formal note"));
    }

    #[test]
    fn first_found_reports_keyword() {
        let set = KeywordSet::new(["call", "meet"]).unwrap();
        assert_eq!(set.first_found("let's meet and call"), Some("meet"));
        assert_eq!(set.first_found("nothing"), None);
    }

    #[test]
    fn empty_set_never_matches() {
        let set = KeywordSet::new(Vec::<String>::new()).unwrap();
        assert!(!set.contains_any("anything"));
    }
}
