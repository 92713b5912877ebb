//! Notifier trait and the Discord webhook implementation.

use http::header::CONTENT_TYPE;
use url::Url;

use crate::monitor::IpChange;
use crate::transport::{HttpClient, HttpRequest};

use super::message::{WebhookPayload, change_content};
use super::NotifyError;

/// Trait for announcing a confirmed IP change to an external service.
///
/// Implementations send exactly one notification per call; there is no
/// retry and the caller does not depend on the outcome.
pub trait ChangeNotifier: Send + Sync {
    /// Sends a notification for the given change.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the notification could not be delivered.
    /// The error is informational; callers log it and continue.
    fn notify(
        &self,
        change: &IpChange,
    ) -> impl std::future::Future<Output = Result<(), NotifyError>> + Send;
}

/// Notifier that posts a JSON message to a Discord-compatible webhook.
///
/// # Example
///
/// ```
/// use ipbot::notify::DiscordWebhook;
/// use ipbot::transport::ReqwestClient;
/// use url::Url;
///
/// let webhook = DiscordWebhook::new(
///     ReqwestClient::new(),
///     Url::parse("https://discord.com/api/webhooks/1/token").unwrap(),
/// );
/// assert_eq!(webhook.url().domain(), Some("discord.com"));
/// ```
#[derive(Debug)]
pub struct DiscordWebhook<H> {
    client: H,
    url: Url,
}

impl<H> DiscordWebhook<H> {
    /// Creates a notifier for the given webhook URL.
    #[must_use]
    pub const fn new(client: H, url: Url) -> Self {
        Self { client, url }
    }

    /// Returns the configured webhook URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl<H: HttpClient> ChangeNotifier for DiscordWebhook<H> {
    async fn notify(&self, change: &IpChange) -> Result<(), NotifyError> {
        let payload = WebhookPayload {
            content: change_content(&change.current),
        };
        let body = serde_json::to_vec(&payload)?;

        let request = HttpRequest::post(self.url.clone())
            .with_header(CONTENT_TYPE, http::HeaderValue::from_static("application/json"))
            .with_body(body);

        let response = self.client.request(request).await?;

        if response.is_success() {
            Ok(())
        } else {
            Err(NotifyError::UnexpectedStatus(response.status))
        }
    }
}
