//! Logging and observability
//!
//! Structured console logging via `tracing`, with the level taken from the
//! CLI (or the `RUST_LOG` environment variable when set).
//!
//! # Example
//!
//! ```no_run
//! use jsonveil::logging::init_logging;
//!
//! init_logging("info").expect("Failed to initialize logging");
//! tracing::info!("ready");
//! ```

use anyhow::{anyhow, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system
///
/// Sets up a console `fmt` subscriber filtered to the given level. `RUST_LOG`
/// takes precedence when present.
///
/// # Errors
///
/// Returns an error if the level string is not one of trace, debug, info,
/// warn, error, or if a global subscriber is already installed.
pub fn init_logging(log_level_str: &str) -> Result<()> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("jsonveil={log_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}

/// Parse a log level from its string representation
fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(anyhow!("invalid log level: {other}")),
    }
}
