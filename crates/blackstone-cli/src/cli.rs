//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Blackstone - analyze a legislative PDF into a structured JSON report.
#[derive(Debug, Parser)]
#[command(name = "blackstone")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path (default: ~/.blackstone/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract the source PDF into a plain-text transcript
    Extract(ExtractArgs),

    /// Analyze a transcript into a JSON compliance report
    Analyze(AnalyzeArgs),

    /// Run both stages in sequence
    Run(RunArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Source PDF path
    #[arg(short, long)]
    pub pdf: Option<PathBuf>,

    /// Transcript output path
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Transcript input path
    #[arg(short, long)]
    pub transcript: Option<PathBuf>,

    /// Report output path
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Model identifier (e.g. anthropic/claude-3-haiku)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Persist the response without validating the report shape
    #[arg(long)]
    pub permissive: bool,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Source PDF path
    #[arg(short, long)]
    pub pdf: Option<PathBuf>,

    /// Intermediate transcript path
    #[arg(short, long)]
    pub transcript: Option<PathBuf>,

    /// Report output path
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Model identifier
    #[arg(short, long)]
    pub model: Option<String>,

    /// Persist the response without validating the report shape
    #[arg(long)]
    pub permissive: bool,
}
