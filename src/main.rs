//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `course_link_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use course_link_check::config::STATUS_SUCCEEDED;
use course_link_check::initialization::init_logger_with;
use course_link_check::{run_check, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the poll using the library
    match run_check(config).await {
        Ok(outcome) => {
            if outcome.status == STATUS_SUCCEEDED {
                println!(
                    "✅ Link check succeeded: {} broken link{} in report{}",
                    outcome.broken_links,
                    if outcome.broken_links == 1 { "" } else { "s" },
                    match &outcome.output_path {
                        Some(path) => format!(" - written to {}", path.display()),
                        None => String::new(),
                    }
                );
                if outcome.skipped_entries > 0 {
                    println!(
                        "⚠️ {} artifact entr{} skipped (unresolvable blocks)",
                        outcome.skipped_entries,
                        if outcome.skipped_entries == 1 { "y" } else { "ies" }
                    );
                }
            } else {
                println!("Link check status: {}", outcome.status);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("course_link_check error: {:#}", e);
            process::exit(1);
        }
    }
}
