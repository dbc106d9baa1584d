//! CLI command definitions and argument parsing.

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use coterm_domain::Partition;
use std::path::PathBuf;

/// coterm - Co-occurring term statistics from annotation data.
#[derive(Debug, Parser)]
#[command(name = "coterm")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "COTERM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Manual source, overriding the configuration
    #[arg(long, global = true)]
    pub manual: Option<PathBuf>,

    /// All source, overriding the configuration
    #[arg(long, global = true)]
    pub all: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (term ids only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the terms that co-occur most with a term
    Top(TopArgs),

    /// Show what the last load read
    Summary,
}

/// Arguments for the top command.
#[derive(Debug, Parser)]
pub struct TopArgs {
    /// Target term id (e.g. GO:0003824)
    pub term: String,

    /// Which annotation source to use
    #[arg(short, long, value_enum, default_value = "all")]
    pub source: SourceArg,

    /// Number of results, or ALL
    #[arg(short, long)]
    pub limit: Option<String>,

    /// Minimum similarity percent (0-100)
    #[arg(short = 't', long)]
    pub similarity_threshold: Option<f64>,
}

/// Source argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SourceArg {
    /// Manually curated annotations only
    Manual,
    /// All annotations
    All,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

impl From<SourceArg> for Partition {
    fn from(source: SourceArg) -> Self {
        match source {
            SourceArg::Manual => Partition::Manual,
            SourceArg::All => Partition::All,
        }
    }
}
