// Main entry point - Logging setup and subcommand dispatch
mod domain;
mod application;
mod infrastructure;
mod presentation;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::presentation::cli::{Cli, Commands};
use crate::presentation::commands::{run_alerts, run_index};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr; stdout carries the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Index(args) => run_index(args).await?,
        Commands::Alerts(args) => run_alerts(args).await?,
    }

    Ok(())
}
