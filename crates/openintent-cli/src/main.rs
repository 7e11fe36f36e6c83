//! CLI entry point for the OpenIntentOS message composer.
//!
//! This binary provides the `openintent-compose` command: it turns one
//! instruction into a composed email and optionally hands it to the dry-run
//! transport.

mod cli;
mod helpers;

use anyhow::{Context, Result};
use clap::Parser;
use openintent_compose::{
    ComposeContext, Composer, ComposerConfig, DryRunTransport, OutboundTransport,
    find_recipient_address,
};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::helpers::{init_tracing, render_plain};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => ComposerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ComposerConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let instruction = cli.instruction_text();
    let address = cli
        .to
        .clone()
        .or_else(|| find_recipient_address(&instruction))
        .unwrap_or_default();
    debug!(%address, "recipient resolved");

    let context = cli.name.clone().map(ComposeContext::with_display_name);

    let composer = Composer::new(config).context("failed to build composer")?;
    let message = composer.compose_message(&instruction, &address, context.as_ref());

    if cli.json {
        println!(
            "{}",
            message
                .to_json_pretty()
                .context("failed to serialize message")?
        );
    } else {
        print!("{}", render_plain(&message));
    }

    if cli.send {
        let transport = DryRunTransport::new("dry-run", composer.config().contact_email.clone());
        let receipt = transport
            .deliver(&message.to_outgoing(address))
            .await
            .context("delivery failed")?;
        info!(id = %receipt.id, "dry-run delivery complete");
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    }

    Ok(())
}
