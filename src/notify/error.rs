//! Error types for webhook notification.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for notification delivery.
///
/// Delivery is fire-and-forget: callers log these and move on.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The webhook request could not be completed.
    #[error("Webhook request failed: {0}")]
    Http(#[from] HttpError),

    /// The webhook endpoint answered with a non-success status.
    #[error("Webhook returned status {0}")]
    UnexpectedStatus(http::StatusCode),

    /// The notification payload could not be encoded as JSON.
    #[error("Failed to encode webhook payload: {0}")]
    Encode(#[from] serde_json::Error),
}
