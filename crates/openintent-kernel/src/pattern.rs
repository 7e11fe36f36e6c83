//! Ordered first-match pattern tables.
//!
//! A [`PatternTable`] is a prioritized list of `(label, [patterns])` rules.
//! Matching walks the rules in declaration order and, inside each rule, the
//! patterns in declaration order.  The first pattern that is *found* anywhere
//! in the text (a search, not a full match) decides the label and scanning
//! stops immediately:
//!
//! | Step | Action |
//! |------|--------|
//! | 1 | Take the next rule in declaration order |
//! | 2 | Search each of its patterns in declaration order |
//! | 3 | First hit: return that rule's label, stop |
//! | 4 | No rule hit: return `None` |
//!
//! Earlier rules therefore shadow later ones whenever a text satisfies more
//! than one.  Reordering rules changes classification outcomes.
//!
//! # Example
//!
//! ```rust
//! # use openintent_kernel::pattern::PatternTable;
//! let table = PatternTable::new([
//!     ("meeting", vec![r"schedule.*meeting"]),
//!     ("thanks", vec![r"thank.*you", r"thanks"]),
//! ])
//! .unwrap();
//!
//! let hit = table.first_match("thanks for scheduling the meeting").unwrap();
//! assert_eq!(hit.label, "thanks");
//! ```

use std::fmt;

use regex::Regex;

use crate::error::{KernelError, Result};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// The outcome of a successful [`PatternTable::first_match`] scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch<'a, L> {
    /// The label of the rule that matched.
    pub label: L,
    /// The source text of the pattern that matched.
    pub pattern: &'a str,
    /// Position of the matching rule in declaration order.
    pub rule_index: usize,
    /// Position of the matching pattern inside its rule.
    pub pattern_index: usize,
}

/// One labelled rule: a list of compiled patterns evaluated in order.
#[derive(Debug, Clone)]
struct PatternRule<L> {
    label: L,
    /// Compiled regexes, index-aligned with `sources`.
    compiled: Vec<Regex>,
    sources: Vec<String>,
}

// ---------------------------------------------------------------------------
// PatternTable
// ---------------------------------------------------------------------------

/// Immutable, ordered rule table with short-circuit first-match scanning.
#[derive(Debug, Clone)]
pub struct PatternTable<L> {
    rules: Vec<PatternRule<L>>,
}

impl<L> PatternTable<L>
where
    L: Clone + fmt::Debug,
{
    /// Compile a table from `(label, patterns)` banks, preserving order.
    ///
    /// Returns an error if any pattern fails to compile or a rule is empty.
    pub fn new<I, P, S>(banks: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, P)>,
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = Vec::new();

        for (label, patterns) in banks {
            let mut compiled = Vec::new();
            let mut sources = Vec::new();

            for pattern in patterns {
                let pattern = pattern.as_ref();
                let regex = Regex::new(pattern).map_err(|e| KernelError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })?;
                compiled.push(regex);
                sources.push(pattern.to_string());
            }

            if compiled.is_empty() {
                return Err(KernelError::EmptyRule {
                    label: format!("{label:?}"),
                });
            }

            rules.push(PatternRule {
                label,
                compiled,
                sources,
            });
        }

        tracing::trace!(rules = rules.len(), "pattern table compiled");
        Ok(Self { rules })
    }

    /// Scan `text` and return the first rule/pattern that is found in it.
    pub fn first_match(&self, text: &str) -> Option<PatternMatch<'_, L>> {
        for (rule_index, rule) in self.rules.iter().enumerate() {
            for (pattern_index, regex) in rule.compiled.iter().enumerate() {
                if regex.is_match(text) {
                    return Some(PatternMatch {
                        label: rule.label.clone(),
                        pattern: &rule.sources[pattern_index],
                        rule_index,
                        pattern_index,
                    });
                }
            }
        }
        None
    }

    /// Rule labels in declaration (priority) order.
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.rules.iter().map(|rule| &rule.label)
    }

    /// Pattern sources of the rule with the given label, in order.
    pub fn patterns_for(&self, label: &L) -> Option<&[String]>
    where
        L: PartialEq,
    {
        self.rules
            .iter()
            .find(|rule| &rule.label == label)
            .map(|rule| rule.sources.as_slice())
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
