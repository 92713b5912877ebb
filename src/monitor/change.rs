//! IP change event type.

use std::time::SystemTime;

use crate::network::PublicIp;

/// A confirmed change of the public IP address.
///
/// Both sides are valid dotted-quad addresses and are guaranteed to differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpChange {
    /// The previously known address.
    pub previous: PublicIp,
    /// The newly observed address.
    pub current: PublicIp,
    /// When the change was detected.
    pub observed_at: SystemTime,
}

impl IpChange {
    /// Creates a new change event.
    #[must_use]
    pub const fn new(previous: PublicIp, current: PublicIp, observed_at: SystemTime) -> Self {
        Self {
            previous,
            current,
            observed_at,
        }
    }
}
