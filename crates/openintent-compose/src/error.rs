//! Composition error types.
//!
//! [`ComposeError`] is what the pipeline stages return internally.  The public
//! [`Composer::compose_message`](crate::Composer::compose_message) entry point
//! never surfaces it: any error becomes a fallback composition with the error
//! text attached.  Construction, configuration loading, and delivery do return
//! it directly.

/// Unified error type for the composition crate.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    // -- Construction errors -------------------------------------------------
    /// A pattern bank failed to compile.
    #[error("pattern kernel error: {0}")]
    Kernel(#[from] openintent_kernel::KernelError),

    /// A regex built during extraction failed to compile.
    #[error("invalid regex pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // -- Pipeline errors -----------------------------------------------------
    /// A template bank that a stage needed to pick from is empty.
    #[error("template bank `{bank}` is empty")]
    EmptyTemplateBank { bank: String },

    /// A sentence could not be synthesized from the payload.
    #[error("sentence synthesis failed: {reason}")]
    Synthesis { reason: String },

    // -- Configuration -------------------------------------------------------
    /// The configuration file could not be read.
    #[error("failed to load config `{path}`: {reason}")]
    Config { path: String, reason: String },

    /// The configuration file is not valid TOML for the expected schema.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    // -- Delivery ------------------------------------------------------------
    /// An outbound transport rejected the message.
    #[error("transport error: {reason}")]
    Transport { reason: String },

    /// JSON serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the composition crate.
pub type Result<T> = std::result::Result<T, ComposeError>;
