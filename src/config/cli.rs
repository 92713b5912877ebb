//! CLI argument parsing using clap.
//!
//! Each monitoring option carries an environment variable fallback, so the
//! daemon can be configured entirely through the environment (the usual
//! deployment mode) or overridden per-invocation on the command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ipbot: Public IP Change Monitor
///
/// Polls an IP-reporting service and posts a Discord webhook
/// notification whenever the public address changes.
#[derive(Debug, Parser)]
#[command(name = "ipbot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Discord webhook URL receiving change notifications (required for run mode)
    #[arg(long = "webhook-url", env = "DISCORD_WEBHOOK_URL", hide_env_values = true)]
    pub webhook_url: Option<String>,

    /// URL of the service that reports the caller's public IP as plain text
    #[arg(long = "ip-service", env = "IP_SERVICE")]
    pub ip_service: Option<String>,

    /// Poll interval in seconds
    #[arg(long = "check-interval", env = "CHECK_INTERVAL")]
    pub check_interval: Option<u64>,

    /// Deployment version identifier, printed once at startup
    #[arg(long = "image-version", env = "IMAGE_VERSION", hide = true)]
    pub image_version: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Test mode - log changes without sending webhooks
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for ipbot
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "ipbot.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
