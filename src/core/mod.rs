//! Business logic
//!
//! Holds the one-shot pipeline that ties reading, transforming, and writing
//! together.

pub mod pipeline;
