//! Tic-Tac-Toe - terminal front end
//!
//! Single-player tic-tac-toe against a random opponent with a score tally
//! that survives restarts.

#![warn(missing_docs)]

mod app;
mod cli;
mod input;
mod tui;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_core::GameConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so output does not interfere with the TUI.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file '{}'", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let config = GameConfig::from_file_or_default(&cli.config)
        .with_context(|| format!("Failed to load config '{}'", cli.config.display()))?;
    let config = cli.apply(config);
    info!(?config, "Configuration resolved");

    tui::run_tui(config).await
}
