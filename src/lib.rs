// jsonveil - JSON Anonymization Tool
// Copyright (c) 2026 Jsonveil Contributors
// Licensed under the MIT License

//! # jsonveil - JSON anonymization tool
//!
//! jsonveil reads a JSON document and produces a structurally identical copy
//! in which sensitive leaf values are replaced with non-identifying
//! substitutes, optionally renaming object keys from snake_case to
//! camelCase.
//!
//! ## Overview
//!
//! Three replacement rules apply to string leaves, in priority order:
//!
//! - **UUID-shaped strings** become their lowercase hex SHA-256 digest, so
//!   repeated identifiers keep their referential integrity
//! - **Millisecond-precision UTC instants** (`YYYY-MM-DDTHH:MM:SS.sssZ`)
//!   become their epoch-millisecond integer value
//! - **Every other string** becomes one freshly generated lorem word
//!
//! Non-string leaves and container shape pass through unchanged.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Run configuration derived from CLI arguments
//! - [`core`] - The read → transform → write pipeline
//! - [`anonymization`] - Leaf classification, key casing, and the transform
//! - [`domain`] - Error taxonomy and result alias
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clap::Parser;
//! use jsonveil::cli::Cli;
//! use jsonveil::config::RunConfig;
//! use jsonveil::core::pipeline;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let cli = Cli::parse_from(["jsonveil", "-f", "patients.json", "-c"]);
//!     let config = RunConfig::from_cli(&cli)?;
//!     let output = pipeline::run(&config).await?;
//!     println!("Anonymized JSON saved to {}", output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All failures are terminal and map to the [`domain::VeilError`] taxonomy;
//! the process exits with status 1 after printing a diagnostic. No partial
//! output is ever written.

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
