//! One-shot anonymization pipeline
//!
//! Reads the input document, transforms it, and writes the anonymized copy:
//! read → parse → transform → serialize → write, strictly sequential. The
//! whole document is serialized before the single write call, so a failed
//! run never leaves a half-written output file behind.

use crate::anonymization::AnonymizationEngine;
use crate::config::RunConfig;
use crate::domain::VeilError;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::PathBuf;
use std::time::Instant;
use tokio::fs;

/// Run the anonymization pipeline for one input file
///
/// Returns the path of the file that was written.
///
/// # Errors
///
/// Any failure is terminal: unreadable input, malformed JSON, a document
/// nested deeper than the configured bound, or an unwritable output path.
pub async fn run(config: &RunConfig) -> Result<PathBuf> {
    let started = Instant::now();
    tracing::info!(
        source = %config.source_path.display(),
        rename_keys = config.rename_keys,
        "Starting anonymization"
    );

    let raw = fs::read_to_string(&config.source_path)
        .await
        .map_err(|e| VeilError::FileRead {
            path: config.source_path.clone(),
            message: e.to_string(),
        })?;

    let document: Value = serde_json::from_str(&raw).map_err(|e| VeilError::JsonParse {
        message: e.to_string(),
    })?;

    let engine = AnonymizationEngine::new(config)?;
    let anonymized = engine.anonymize(&document)?;

    let rendered = serde_json::to_string_pretty(&anonymized)
        .context("Failed to serialize anonymized document")?;

    let output_path = config.output_path();
    fs::write(&output_path, rendered)
        .await
        .map_err(|e| VeilError::FileWrite {
            path: output_path.clone(),
            message: e.to_string(),
        })?;

    tracing::info!(
        output = %output_path.display(),
        duration_ms = started.elapsed().as_millis() as u64,
        "Anonymization completed"
    );

    Ok(output_path)
}
