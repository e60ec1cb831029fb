//! Anonymizing tree transform
//!
//! The [`AnonymizationEngine`] walks a parsed JSON value and produces a
//! structurally isomorphic copy with every string leaf replaced according to
//! the classifier rules:
//!
//! - UUID-shaped strings become their lowercase hex SHA-256 digest, so
//!   repeated identifiers keep their referential integrity
//! - millisecond-precision UTC instants become their epoch-millisecond value
//! - every other string becomes one freshly generated lorem word
//!
//! Non-string leaves pass through unchanged. The input is never mutated.
//!
//! # Examples
//!
//! ```
//! use jsonveil::anonymization::AnonymizationEngine;
//! use jsonveil::cli::Cli;
//! use jsonveil::config::RunConfig;
//! use clap::Parser;
//! use serde_json::json;
//!
//! # fn example() -> anyhow::Result<()> {
//! let cli = Cli::parse_from(["jsonveil", "-f", "data.json", "-c"]);
//! let config = RunConfig::from_cli(&cli)?;
//! let engine = AnonymizationEngine::new(&config)?;
//!
//! let document = json!({"user_id": "550e8400-e29b-41d4-a716-446655440000"});
//! let anonymized = engine.anonymize(&document)?;
//! assert!(anonymized.get("userId").is_some());
//! # Ok(())
//! # }
//! ```

use crate::anonymization::casing::to_camel_case;
use crate::anonymization::classifier::{LeafClass, LeafClassifier};
use crate::config::RunConfig;
use crate::domain::VeilError;
use anyhow::{Context, Result};
use fake::faker::lorem::en::Word;
use fake::Fake;
use serde_json::{Map, Number, Value};
use sha2::{Digest, Sha256};

/// Anonymizing tree transform over parsed JSON
///
/// Holds the compiled classifier and the run settings; the configuration is
/// captured at construction rather than read from global state inside the
/// recursion.
pub struct AnonymizationEngine {
    classifier: LeafClassifier,
    rename_keys: bool,
    max_depth: usize,
}

impl AnonymizationEngine {
    /// Create a new engine for the given run configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the classifier patterns fail to compile.
    pub fn new(config: &RunConfig) -> Result<Self> {
        let classifier = LeafClassifier::new().context("Failed to build leaf classifier")?;

        Ok(Self {
            classifier,
            rename_keys: config.rename_keys,
            max_depth: config.max_depth,
        })
    }

    /// Anonymize a JSON value, returning a fresh isomorphic value
    ///
    /// # Errors
    ///
    /// Returns [`VeilError::DepthExceeded`] if the document nests deeper
    /// than the configured bound.
    pub fn anonymize(&self, value: &Value) -> Result<Value> {
        self.anonymize_at(value, 0)
    }

    fn anonymize_at(&self, value: &Value, depth: usize) -> Result<Value> {
        if depth > self.max_depth {
            return Err(VeilError::DepthExceeded {
                limit: self.max_depth,
            }
            .into());
        }

        match value {
            Value::String(text) => Ok(self.anonymize_string(text)),
            Value::Array(items) => {
                let transformed = items
                    .iter()
                    .map(|item| self.anonymize_at(item, depth + 1))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Value::Array(transformed))
            }
            Value::Object(fields) => {
                let mut result = Map::with_capacity(fields.len());
                for (key, field_value) in fields {
                    let output_key = if self.rename_keys {
                        to_camel_case(key).into_owned()
                    } else {
                        key.clone()
                    };
                    let transformed = self.anonymize_at(field_value, depth + 1)?;
                    if result.contains_key(&output_key) {
                        // Later key silently wins; surface it in the logs
                        tracing::warn!(
                            original_key = %key,
                            renamed_key = %output_key,
                            "Key rename collision, keeping the later value"
                        );
                    }
                    result.insert(output_key, transformed);
                }
                Ok(Value::Object(result))
            }
            // null, boolean, number pass through unchanged
            other => Ok(other.clone()),
        }
    }

    fn anonymize_string(&self, text: &str) -> Value {
        match self.classifier.classify(text) {
            LeafClass::UuidShaped => Value::String(hash_identifier(text)),
            LeafClass::IsoInstantMillis(millis) => Value::Number(Number::from(millis)),
            LeafClass::FreeText => Value::String(fake_word()),
        }
    }
}

/// Lowercase hex SHA-256 digest of an identifier
///
/// Deterministic: the same input always maps to the same digest, so repeated
/// identifiers stay correlated across the anonymized document.
fn hash_identifier(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}

/// One freshly generated pseudo-random lorem word
fn fake_word() -> String {
    Word().fake()
}
