//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pairbench")]
#[command(author, version, about = "Batch backtesting of volume-ranked currency pairs")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load data, run every strategy, and write all reports
    Run(RunArgs),
    /// Populate the bar cache without backtesting
    Download(DownloadArgs),
    /// List available strategies
    Strategies,
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Number of pairs to select by volume (overrides config)
    #[arg(short, long)]
    pub num_symbols: Option<usize>,

    /// Select the lowest-volume pairs instead of the highest
    #[arg(long)]
    pub reverse: bool,

    /// Run a single strategy instead of the whole set
    #[arg(short, long)]
    pub strategy: Option<String>,
}

#[derive(clap::Args)]
pub struct DownloadArgs {
    /// Number of pairs to select by volume (overrides config)
    #[arg(short, long)]
    pub num_symbols: Option<usize>,

    /// Select the lowest-volume pairs instead of the highest
    #[arg(long)]
    pub reverse: bool,
}
