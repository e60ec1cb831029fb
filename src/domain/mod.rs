//! Core domain types
//!
//! Defines the error taxonomy and result alias used throughout jsonveil.

pub mod errors;
pub mod result;

pub use errors::VeilError;
pub use result::Result;
