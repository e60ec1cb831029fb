//! Regex-based leaf string classifier
//!
//! Decides, for each string leaf, which replacement rule applies. Detection
//! is a heuristic over the string's shape, not a schema: a non-identifier
//! that happens to look like a UUID is treated as one.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use regex::Regex;

/// Canonical hyphenated UUID with version nibble 1-5 and RFC 4122 variant
const UUID_PATTERN: &str =
    "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$";

/// ISO-8601 instant with exactly millisecond precision and the UTC designator
const INSTANT_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z$";

/// Format string matching [`INSTANT_PATTERN`] for calendar validation
const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Classification of a string leaf, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafClass {
    /// Looks like a canonical UUID; replaced with a deterministic digest
    UuidShaped,
    /// A real UTC instant; replaced with its epoch-millisecond value
    IsoInstantMillis(i64),
    /// Everything else; replaced with a generated word
    FreeText,
}

/// Compiled classification patterns
///
/// Built once per engine so the regexes are never recompiled per leaf.
pub struct LeafClassifier {
    uuid_pattern: Regex,
    instant_pattern: Regex,
}

impl LeafClassifier {
    /// Compile the classifier patterns
    pub fn new() -> Result<Self> {
        let uuid_pattern = Regex::new(UUID_PATTERN).context("Invalid UUID pattern")?;
        let instant_pattern = Regex::new(INSTANT_PATTERN).context("Invalid instant pattern")?;

        Ok(Self {
            uuid_pattern,
            instant_pattern,
        })
    }

    /// Classify a string leaf
    ///
    /// Rules are tested in priority order; the first match wins. A string
    /// that matches the instant shape but denotes no real calendar date
    /// (such as month 13) falls through to [`LeafClass::FreeText`].
    pub fn classify(&self, value: &str) -> LeafClass {
        if self.uuid_pattern.is_match(value) {
            return LeafClass::UuidShaped;
        }

        if self.instant_pattern.is_match(value) {
            if let Ok(instant) = NaiveDateTime::parse_from_str(value, INSTANT_FORMAT) {
                return LeafClass::IsoInstantMillis(instant.and_utc().timestamp_millis());
            }
        }

        LeafClass::FreeText
    }
}
