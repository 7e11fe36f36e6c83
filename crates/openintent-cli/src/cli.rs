//! CLI argument definitions for the message composer.
//!
//! All `clap` structures live here so that `main.rs` stays focused on
//! running the composition.

use std::path::PathBuf;

use clap::Parser;

/// Compose an email from a plain-language instruction.
#[derive(Debug, Parser)]
#[command(
    name = "openintent-compose",
    version,
    about = "Compose an email from a plain-language instruction",
    long_about = "Classifies the intent and tone of an instruction such as \
                  \"schedule a meeting for 1pm with john@x.com\" and prints a \
                  complete subject and body."
)]
pub struct Cli {
    /// The instruction, e.g. `thank ann@x.com for the review`.
    #[arg(required = true, num_args = 1..)]
    pub instruction: Vec<String>,

    /// Recipient address.  Defaults to the first address in the instruction.
    #[arg(long)]
    pub to: Option<String>,

    /// Name to greet instead of one derived from the address.
    #[arg(long)]
    pub name: Option<String>,

    /// Seed for template variant selection.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file with a `[composer]` table.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the full composition as JSON.
    #[arg(long)]
    pub json: bool,

    /// Hand the message to the dry-run transport and print the receipt.
    #[arg(long)]
    pub send: bool,

    /// Default log level when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn instruction_text(&self) -> String {
        self.instruction.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_joined() {
        let cli = Cli::try_parse_from([
            "openintent-compose",
            "schedule",
            "a",
            "meeting",
            "--to",
            "john@x.com",
        ])
        .unwrap();
        assert_eq!(cli.instruction_text(), "schedule a meeting");
        assert_eq!(cli.to.as_deref(), Some("john@x.com"));
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.json);
        assert!(!cli.send);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "openintent-compose",
            "--seed",
            "7",
            "--name",
            "Dr. Lee",
            "--config",
            "composer.toml",
            "--json",
            "--send",
            "--log-level",
            "debug",
            "hello there",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.name.as_deref(), Some("Dr. Lee"));
        assert_eq!(cli.config, Some(PathBuf::from("composer.toml")));
        assert!(cli.json && cli.send);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.instruction_text(), "hello there");
    }

    #[test]
    fn instruction_is_required() {
        assert!(Cli::try_parse_from(["openintent-compose", "--json"]).is_err());
    }
}
