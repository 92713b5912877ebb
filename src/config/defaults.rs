//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default service that reports the caller's public IP as plain text.
pub const IP_SERVICE: &str = "https://ifconfig.me/ip";

/// Default poll interval in seconds.
pub const CHECK_INTERVAL_SECS: u64 = 900;

/// Default poll interval as Duration.
#[must_use]
pub const fn check_interval() -> Duration {
    Duration::from_secs(CHECK_INTERVAL_SECS)
}
