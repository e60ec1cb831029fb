//! Anonymization module
//!
//! Implements the anonymizing tree transform over parsed JSON:
//!
//! - **Classification**: regex-based detection of UUID-shaped strings and
//!   millisecond-precision UTC instants
//! - **Replacement**: deterministic SHA-256 digests for identifiers, epoch
//!   milliseconds for instants, generated lorem words for everything else
//! - **Key renaming**: optional snake_case to camelCase conversion of
//!   object keys

pub mod casing;
pub mod classifier;
pub mod engine;

pub use classifier::{LeafClass, LeafClassifier};
pub use engine::AnonymizationEngine;
