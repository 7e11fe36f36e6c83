//! OpenIntentOS pattern kernel.
//!
//! Immutable matching primitives shared by the message composition pipeline:
//!
//! - **[`pattern`]** -- Ordered, first-match-wins rule tables over compiled
//!   [`regex`] patterns.  Declaration order is the tie-break rule.
//! - **[`keywords`]** -- Substring membership tests backed by an
//!   [`aho_corasick`] automaton.
//! - **[`error`]** -- Kernel error types via [`thiserror`].
//!
//! Both primitives are built once and are read-only afterwards, so they are
//! `Send + Sync` and can be shared freely.

pub mod error;
pub mod keywords;
pub mod pattern;

pub use error::{KernelError, Result};
pub use keywords::KeywordSet;
pub use pattern::{PatternMatch, PatternTable};
