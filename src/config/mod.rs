//! Configuration layer for ipbot.
//!
//! This module provides:
//! - CLI argument parsing with environment fallback ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority
//! (highest to lowest):
//!
//! 1. **CLI arguments** - Values explicitly passed via command line
//! 2. **Environment variables** - `DISCORD_WEBHOOK_URL`, `IP_SERVICE`,
//!    `CHECK_INTERVAL`, `IMAGE_VERSION` (resolved by clap as flag fallback)
//! 3. **TOML config file** - Values from the optional `--config` file
//! 4. **Built-in defaults** - Hardcoded default values
//!
//! The webhook URL is the only required value; it has no default and an
//! empty string counts as missing.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};

pub use error::field;
