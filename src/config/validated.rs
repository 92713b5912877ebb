//! Validated configuration after merging CLI, environment, and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// How many leading characters of the webhook URL are shown in diagnostics.
const WEBHOOK_URL_VISIBLE_CHARS: usize = 32;

/// Fully validated configuration ready for use by the application.
///
/// All required fields are present and all values have been validated.
/// Loaded once at startup and immutable thereafter.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] to resolve from CLI arguments (which carry
/// the environment fallbacks) and the optional TOML config file.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook URL (required)
    pub webhook_url: Url,

    /// URL of the IP-reporting service
    pub ip_service: Url,

    /// Poll interval (positive)
    pub check_interval: Duration,

    /// Deployment version identifier, for diagnostics only
    pub version: Option<String>,

    /// Dry-run mode (log changes without sending webhooks)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ ip_service: {}, check_interval: {}s, webhook_url: {}, dry_run: {} }}",
            self.ip_service,
            self.check_interval.as_secs(),
            redact_webhook_url(&self.webhook_url),
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional
    /// TOML config.
    ///
    /// CLI and environment values take precedence over TOML values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The webhook URL is missing or empty in every source
    /// - Any URL fails to parse
    /// - The check interval is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let webhook_url = Self::resolve_webhook_url(cli, toml)?;
        let ip_service = Self::resolve_ip_service(cli, toml)?;
        let check_interval = Self::resolve_check_interval(cli, toml)?;

        Ok(Self {
            webhook_url,
            ip_service,
            check_interval,
            version: cli.image_version.clone(),
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_webhook_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // CLI/environment takes precedence; empty values count as missing.
        let url_str = non_empty(cli.webhook_url.as_deref())
            .or_else(|| non_empty(toml.and_then(|t| t.webhook.url.as_deref())))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::WEBHOOK_URL,
                    "Provide a Discord webhook URL through the DISCORD_WEBHOOK_URL \
                     environment variable, --webhook-url, or webhook.url in the config file",
                )
            })?;

        parse_url(url_str)
    }

    fn resolve_ip_service(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = non_empty(cli.ip_service.as_deref())
            .or_else(|| non_empty(toml.and_then(|t| t.monitor.ip_service.as_deref())))
            .unwrap_or(defaults::IP_SERVICE);

        parse_url(url_str)
    }

    fn resolve_check_interval(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Duration, ConfigError> {
        let seconds = cli
            .check_interval
            .or_else(|| toml.and_then(|t| t.monitor.check_interval))
            .unwrap_or(defaults::CHECK_INTERVAL_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "check_interval",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Renders the webhook URL for diagnostics without leaking the full secret.
///
/// Only the first [`WEBHOOK_URL_VISIBLE_CHARS`] characters are shown,
/// followed by an ellipsis.
#[must_use]
pub fn redact_webhook_url(url: &Url) -> String {
    let head: String = url.as_str().chars().take(WEBHOOK_URL_VISIBLE_CHARS).collect();
    format!("{head}...")
}

// Helper functions

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn parse_url(s: &str) -> Result<Url, ConfigError> {
    Url::parse(s).map_err(|e| ConfigError::InvalidUrl {
        url: s.to_string(),
        reason: e.to_string(),
    })
}
