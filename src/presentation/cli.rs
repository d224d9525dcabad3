// Command-line interface
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Generate Markdown documentation for Grafana dashboards and alerts
#[derive(Parser, Debug)]
#[command(name = "grafana-docs")]
#[command(author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Index exported dashboard files into a Markdown document
    Index(IndexArgs),

    /// Print a Markdown report of every configured alert
    Alerts(AlertsArgs),
}

#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Directory holding exported dashboard JSON files
    #[arg(long, default_value = "dashboards")]
    pub dir: PathBuf,

    /// Markdown file to (over)write
    #[arg(long, default_value = "dashboards.md")]
    pub output: PathBuf,

    /// File name of the home dashboard, left out of the index
    #[arg(long, default_value = "Home.json")]
    pub home: String,

    /// Skip unreadable or malformed dashboard files instead of failing
    #[arg(long)]
    pub skip_invalid: bool,
}

#[derive(Args, Debug)]
pub struct AlertsArgs {
    /// Settings file; `GRAFANA_*` environment variables take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
}
