//! Polling loop over the address fetcher.
//!
//! This module provides [`PollingMonitor`], which owns the current known
//! address and yields the next confirmed change.

use std::time::Duration;

use tokio::time::sleep;

use super::IpChange;
use crate::network::{IpFetcher, PublicIp};
use crate::time::{Clock, SystemClock};

/// Polling monitor for public IP changes.
///
/// The monitor holds the last successfully validated address. Each cycle
/// sleeps for the configured interval, fetches once, and compares. Fetch
/// failures are logged and skipped; the stored address only moves at the
/// single point where a differing valid address is observed.
///
/// # Type Parameters
///
/// * `F` - The [`IpFetcher`] implementation used each cycle
/// * `C` - The [`Clock`] for change timestamps (defaults to [`SystemClock`])
pub struct PollingMonitor<F, C = SystemClock> {
    fetcher: F,
    clock: C,
    interval: Duration,
    current: PublicIp,
}

impl<F> PollingMonitor<F, SystemClock>
where
    F: IpFetcher,
{
    /// Creates a monitor with the system clock.
    ///
    /// # Arguments
    ///
    /// * `fetcher` - The address fetcher polled each cycle
    /// * `initial` - The address obtained by the startup fetch
    /// * `interval` - Time to sleep between polls
    #[must_use]
    pub const fn new(fetcher: F, initial: PublicIp, interval: Duration) -> Self {
        Self::with_clock(fetcher, SystemClock, initial, interval)
    }
}

impl<F, C> PollingMonitor<F, C>
where
    F: IpFetcher,
    C: Clock,
{
    /// Creates a monitor with a custom clock.
    ///
    /// This constructor allows injecting a mock clock for testing.
    #[must_use]
    pub const fn with_clock(fetcher: F, clock: C, initial: PublicIp, interval: Duration) -> Self {
        Self {
            fetcher,
            clock,
            interval,
            current: initial,
        }
    }

    /// Returns the current known address.
    #[must_use]
    pub const fn current(&self) -> &PublicIp {
        &self.current
    }

    /// Returns the configured polling interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits for the next confirmed address change.
    ///
    /// Sleeps for the interval, fetches, and repeats until a valid address
    /// differing from the current one is observed. The stored address is
    /// updated before the change is returned, with no await point in
    /// between, so cancelling this future never loses a state update.
    ///
    /// This future never resolves while the address stays stable; callers
    /// race it against a shutdown signal.
    pub async fn next_change(&mut self) -> IpChange {
        loop {
            sleep(self.interval).await;

            match self.fetcher.fetch().await {
                Err(e) => {
                    tracing::warn!("Error fetching IP address: {e}");
                }
                Ok(ip) if ip == self.current => {
                    tracing::debug!("IP address unchanged: {ip}");
                }
                Ok(ip) => {
                    let change =
                        IpChange::new(self.current.clone(), ip.clone(), self.clock.now());
                    self.current = ip;
                    return change;
                }
            }
        }
    }
}
