//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `whoisjson_explorer` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use whoisjson_explorer::config::Cli;
use whoisjson_explorer::initialization::init_logger_with;
use whoisjson_explorer::run;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), so
    // WHOISJSON_API_KEY can live in .env without exporting it manually.
    // Try the current directory first, then the executable's directory.
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let (config, command) = Cli::parse().into_parts();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(config, command).await {
        Ok(report) => {
            log::debug!(
                "Finished {} lookup{} ({} succeeded, {} failed) in {:.1}s",
                report.total,
                if report.total == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            if report.exit_code != 0 {
                process::exit(report.exit_code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ whoisjson_explorer error: {:#}", e);
            process::exit(1);
        }
    }
}
