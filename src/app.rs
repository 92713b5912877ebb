//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use ipbot::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0) - only reachable via the init subcommand.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Startup failure (exit code 1) - missing webhook URL, invalid
    /// configuration, or a failed startup fetch.
    pub const STARTUP_FAILURE: ExitCode = ExitCode::FAILURE;
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::WEBHOOK_URL => {
            eprintln!(
                "\nPlease provide a Discord webhook URL through the DISCORD_WEBHOOK_URL \
                 environment variable."
            );
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'ipbot init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
