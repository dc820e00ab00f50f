//! Marquee CLI - Command-line interface
//!
//! Provides one-shot searches, an interactive debounced session and the web
//! server.

mod commands;

use std::path::PathBuf;

use clap::Parser;
use marquee_core::MarqueeConfig;
use marquee_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Debounced movie search")]
struct Cli {
    /// Console log level; the run log always records everything
    #[arg(long, value_enum, default_value_t = CliLogLevel::Warn, global = true)]
    log_level: CliLogLevel,
    /// Search the built-in catalog instead of OMDb
    #[arg(long, global = true)]
    demo: bool,
    /// JSON file overriding user-facing messages
    #[arg(long, global = true)]
    locale_file: Option<PathBuf>,
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), None)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let mut config = MarqueeConfig::from_env();
    if cli.demo {
        config.search.development_catalog = true;
    }
    if let Some(path) = cli.locale_file {
        config.locale_file = Some(path);
    }

    commands::handle_command(cli.command, config).await
}
