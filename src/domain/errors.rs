//! Domain error types
//!
//! Every failure the tool can hit is terminal: the error is reported on
//! stderr and the process exits non-zero. No variant exposes third-party
//! error types.

use std::path::PathBuf;
use thiserror::Error;

/// Main jsonveil error type
#[derive(Debug, Error)]
pub enum VeilError {
    /// No input file was supplied on the command line
    #[error("missing required argument: provide a JSON file to anonymize with -f/--file")]
    MissingArgument,

    /// The input file could not be read
    #[error("failed to read {path}: {message}")]
    FileRead { path: PathBuf, message: String },

    /// The input file is not valid JSON
    #[error("failed to parse input as JSON: {message}")]
    JsonParse { message: String },

    /// The document nests deeper than the configured recursion bound
    #[error("document exceeds maximum nesting depth of {limit}")]
    DepthExceeded { limit: usize },

    /// The output file could not be written
    #[error("failed to write {path}: {message}")]
    FileWrite { path: PathBuf, message: String },
}
