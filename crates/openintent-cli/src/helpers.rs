//! Shared helper functions for the composer CLI.

use openintent_compose::ComposedMessage;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Tracing
// ---------------------------------------------------------------------------

/// Initialize the tracing subscriber with the given default log level.
///
/// Logs go to stderr so stdout stays clean for the composed message.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Human-readable rendering: subject line, blank line, body.
pub fn render_plain(message: &ComposedMessage) -> String {
    let mut out = format!("Subject: {}\n\n{}\n", message.subject, message.body);
    if let Some(error) = &message.error {
        out.push_str(&format!("\n(fallback: {error})\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use openintent_compose::{Composer, ComposerConfig};

    #[test]
    fn plain_rendering_has_subject_then_body() {
        let composer = Composer::with_seed(ComposerConfig::default(), 1).unwrap();
        let message = composer.compose_message(
            "schedule a meeting for 1pm with john@x.com",
            "john@x.com",
            None,
        );
        let text = render_plain(&message);
        assert!(text.starts_with("Subject: Meeting Request\n\nHello John,\n"));
        assert!(!text.contains("fallback"));
    }
}
