//! Configuration management for jsonveil
//!
//! The tool is configured entirely from the command line; this module turns
//! parsed CLI arguments into a validated, type-safe [`RunConfig`] that is
//! threaded through the pipeline and the anonymization engine. Nothing reads
//! ambient global state.

use crate::cli::Cli;
use crate::domain::{Result, VeilError};
use std::path::PathBuf;

/// Prefix prepended to the input's base name to derive the output filename
pub const OUTPUT_PREFIX: &str = "anonymized_";

/// Settings for one anonymization run
///
/// Fixed for the duration of the run; constructed once from CLI input.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path of the JSON document to anonymize
    pub source_path: PathBuf,

    /// Rename object keys from snake_case to camelCase
    pub rename_keys: bool,

    /// Directory the output file is placed in
    pub output_dir: PathBuf,

    /// Maximum container nesting depth accepted before aborting
    pub max_depth: usize,
}

impl RunConfig {
    /// Build a run configuration from parsed CLI arguments
    ///
    /// # Errors
    ///
    /// Returns [`VeilError::MissingArgument`] if no input file was given.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let source_path = cli.file.clone().ok_or(VeilError::MissingArgument)?;

        let config = Self {
            source_path,
            rename_keys: cli.camelcase,
            output_dir: cli.output_dir.clone(),
            max_depth: cli.max_depth,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.source_path.as_os_str().is_empty() {
            return Err(VeilError::MissingArgument);
        }
        Ok(())
    }

    /// Derive the output path: `anonymized_` prefixed to the input's base
    /// name, inside the configured output directory
    pub fn output_path(&self) -> PathBuf {
        let base = self
            .source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "input.json".to_string());

        self.output_dir.join(format!("{OUTPUT_PREFIX}{base}"))
    }
}
