//! Change detection for the public IP address.
//!
//! This module provides:
//! - The change event type ([`IpChange`])
//! - The polling loop that owns the current known address ([`PollingMonitor`])

mod change;
mod poller;

pub use change::IpChange;
pub use poller::PollingMonitor;
