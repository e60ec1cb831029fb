//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for jsonveil using clap.
//!
//! The input file flag is modeled as optional and checked by hand in
//! [`crate::config::RunConfig::from_cli`] so that a missing `--file` exits
//! with status 1 rather than clap's usage-error status.

use clap::Parser;
use std::path::PathBuf;

/// jsonveil - JSON anonymization tool
#[derive(Parser, Debug)]
#[command(name = "jsonveil")]
#[command(version, about, long_about = None)]
#[command(author = "Jsonveil Contributors")]
pub struct Cli {
    /// JSON file to anonymize
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Convert object keys from snake_case to camelCase
    #[arg(short, long)]
    pub camelcase: bool,

    /// Directory the anonymized file is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Maximum nesting depth accepted before the run is aborted
    #[arg(long, default_value_t = 128)]
    pub max_depth: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "JSONVEIL_LOG_LEVEL")]
    pub log_level: Option<String>,
}
