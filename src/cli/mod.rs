//! CLI argument parsing for revisor
//!
//! Uses clap for argument parsing.
//! Supports global flags: --root, --config, --format, --quiet, --verbose

pub mod args;
pub mod output;
pub mod parse;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{EvaluateArgs, RubricArgs, SeedArgs};
pub use output::OutputFormat;

/// Revisor - deterministic rubric-based review scoring
#[derive(Parser, Debug)]
#[command(name = "revisor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base directory for resolving configuration and relative paths
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Explicit configuration file (default: revisor.toml in the root)
    #[arg(long, global = true, env = "REVISOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a batch of documents against the rubric
    Evaluate(EvaluateArgs),

    /// Show the rubric used for scoring
    Rubric(RubricArgs),

    /// Show the seed derived from document identifiers
    Seed(SeedArgs),
}
