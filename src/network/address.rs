//! The public IP address type and its validation rule.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Acceptance pattern for a dotted-quad address.
///
/// Octets are 1-3 digit runs and are not range-checked against 0-255;
/// any trailing content (including a newline) is rejected.
static DOTTED_QUAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").expect("pattern is valid")
});

/// Error returned when text does not match the dotted-quad pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not a dotted-quad IPv4 address")]
pub struct InvalidAddress;

/// A syntactically valid dotted-quad IPv4 address.
///
/// The value is held as the exact text returned by the IP service. It can
/// only be constructed from text matching [`DOTTED_QUAD`], so holding a
/// `PublicIp` guarantees the address is well-formed.
///
/// This is deliberately not [`std::net::Ipv4Addr`]: the acceptance rule
/// does not range-check octets, and the service's exact text is what gets
/// compared and reported downstream.
///
/// # Example
///
/// ```
/// use ipbot::network::PublicIp;
///
/// let ip: PublicIp = "203.0.113.7".parse().unwrap();
/// assert_eq!(ip.as_str(), "203.0.113.7");
/// assert!("203.0.113.7\n".parse::<PublicIp>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicIp(String);

impl PublicIp {
    /// Returns the address text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PublicIp {
    type Err = InvalidAddress;

    /// Validates `s` against the dotted-quad pattern.
    ///
    /// No whitespace is stripped; the input must match exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if DOTTED_QUAD.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidAddress)
        }
    }
}

impl fmt::Display for PublicIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
