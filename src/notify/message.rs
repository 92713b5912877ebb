//! Notification message format.

use serde::Serialize;

use crate::network::PublicIp;

/// JSON body posted to the webhook endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    /// The message text shown in the channel.
    pub content: String,
}

/// Renders the change announcement for a newly observed address.
///
/// The address is rendered in an inline code span.
#[must_use]
pub fn change_content(new_ip: &PublicIp) -> String {
    format!(":repeat: Detected an IP address change! New IP address: `{new_ip}`")
}
