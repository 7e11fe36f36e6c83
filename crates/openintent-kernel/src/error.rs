//! Kernel error types.
//!
//! Pattern tables and keyword sets are compiled once at construction, so the
//! only failures this crate can surface are build failures.  They are reported
//! through [`KernelError`].

/// Unified error type for the pattern kernel.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    // -- Pattern table errors -----------------------------------------------
    /// A regex pattern supplied to a pattern table is invalid.
    #[error("invalid regex pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A rule was registered without any pattern and could never match.
    #[error("rule `{label}` has no patterns")]
    EmptyRule { label: String },

    // -- Keyword set errors -------------------------------------------------
    /// Building the Aho-Corasick automaton failed.
    #[error("keyword automaton build error: {reason}")]
    AutomatonBuild { reason: String },
}

/// Convenience alias used throughout the kernel crate.
pub type Result<T> = std::result::Result<T, KernelError>;
