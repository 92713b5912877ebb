//! Application execution logic.
//!
//! This module contains the main async execution loop that polls for the
//! public IP address and sends webhook notifications on changes.

use thiserror::Error;
use tokio::signal;

use ipbot::config::ValidatedConfig;
use ipbot::monitor::{IpChange, PollingMonitor};
use ipbot::network::{FetchError, HttpIpFetcher, IpFetcher};
use ipbot::notify::{ChangeNotifier, DiscordWebhook};
use ipbot::transport::ReqwestClient;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
///
/// Past startup the loop never fails; every steady-state error is logged
/// and absorbed.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to obtain a valid IP address at startup.
    #[error("Couldn't fetch IP address at startup: {0}")]
    StartupFetch(#[source] FetchError),
}

/// Executes the main application loop.
///
/// This function:
/// 1. Creates the fetcher and the webhook notifier
/// 2. Performs the startup fetch (fatal on failure)
/// 3. Polls for changes and notifies until shutdown signal (Ctrl+C)
///
/// # Errors
///
/// Returns an error only if the startup fetch fails. The steady-state
/// loop has no terminal state of its own.
///
/// # Coverage Note
///
/// Excluded from coverage because it requires a real async runtime with
/// signal handling and live network endpoints.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let client = ReqwestClient::new();
    let fetcher = HttpIpFetcher::new(client.clone(), config.ip_service.clone());
    let webhook = DiscordWebhook::new(client, config.webhook_url.clone());

    if config.dry_run {
        tracing::info!("Dry-run mode enabled - webhook requests will be logged but not sent");
    }

    // Startup fetch establishes the current known address; failure here
    // is fatal.
    let initial = fetcher.fetch().await.map_err(RunError::StartupFetch)?;
    tracing::info!("First IP address fetch: {initial}");

    let mut monitor = PollingMonitor::new(fetcher, initial, config.check_interval);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                tracing::info!("Shutdown signal received, stopping...");
                return Ok(());
            }

            change = monitor.next_change() => {
                handle_change(&change, &webhook, config.dry_run).await;
            }
        }
    }
}

/// Handles a confirmed IP change.
///
/// The monitor has already adopted the new address; delivery failures are
/// logged and otherwise ignored.
async fn handle_change<N: ChangeNotifier>(change: &IpChange, notifier: &N, dry_run: bool) {
    tracing::info!(
        "IP address changed from {} to {}",
        change.previous,
        change.current,
    );

    if dry_run {
        tracing::debug!("Dry-run: skipping webhook for {}", change.current);
        return;
    }

    match notifier.notify(change).await {
        Ok(()) => {
            tracing::debug!("Webhook notification sent for {}", change.current);
        }
        Err(e) => {
            tracing::error!("Webhook failed: {e}");
        }
    }
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
