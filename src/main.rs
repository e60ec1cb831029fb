// jsonveil - JSON Anonymization Tool
// Copyright (c) 2026 Jsonveil Contributors
// Licensed under the MIT License

use clap::Parser;
use jsonveil::cli::Cli;
use jsonveil::config::RunConfig;
use jsonveil::core::pipeline;
use jsonveil::logging::init_logging;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Optional .env file; silently ignored when absent
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = cli.log_level.as_deref().unwrap_or("info");
    if let Err(e) = init_logging(log_level) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(1);
    }

    let config = match RunConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match pipeline::run(&config).await {
        Ok(output_path) => {
            println!("Anonymized JSON saved to {}", output_path.display());
        }
        Err(e) => {
            tracing::error!(error = %e, "Anonymization failed");
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
