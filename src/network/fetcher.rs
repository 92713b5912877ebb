//! Address fetching trait and the HTTP implementation.

use thiserror::Error;
use url::Url;

use crate::transport::{HttpClient, HttpError, HttpRequest};

use super::PublicIp;

/// Longest body excerpt carried in a [`FetchError::MalformedBody`].
const EXCERPT_LEN: usize = 64;

/// Error type for address fetching operations.
///
/// The variants exist for diagnostics only; callers treat every failure
/// identically ("no result this cycle").
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP request could not be completed.
    #[error("Request to IP service failed: {0}")]
    Http(#[from] HttpError),

    /// The IP service answered with a status other than 200.
    #[error("IP service returned status {0}")]
    UnexpectedStatus(http::StatusCode),

    /// The response body is not a dotted-quad address.
    #[error("IP service returned a malformed body: {excerpt:?}")]
    MalformedBody {
        /// Leading portion of the offending body, truncated for display.
        excerpt: String,
    },
}

/// Trait for fetching the caller's current public IP address.
///
/// # Design
///
/// - One request in, one result out, no internal retry
/// - Enables dependency injection for testing with mock implementations
pub trait IpFetcher: Send + Sync {
    /// Fetches the current public IP address.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, on any non-200 status,
    /// or when the body does not match the dotted-quad pattern.
    fn fetch(&self) -> impl std::future::Future<Output = Result<PublicIp, FetchError>> + Send;
}

/// Production fetcher that asks an HTTP service for the caller's address.
///
/// Performs a single `GET` against the configured service URL and expects
/// a 200 response whose body is exactly a dotted-quad address.
///
/// # Example
///
/// ```
/// use ipbot::network::HttpIpFetcher;
/// use ipbot::transport::ReqwestClient;
/// use url::Url;
///
/// let fetcher = HttpIpFetcher::new(
///     ReqwestClient::new(),
///     Url::parse("https://ifconfig.me/ip").unwrap(),
/// );
/// assert_eq!(fetcher.service().as_str(), "https://ifconfig.me/ip");
/// ```
#[derive(Debug)]
pub struct HttpIpFetcher<H> {
    client: H,
    service: Url,
}

impl<H> HttpIpFetcher<H> {
    /// Creates a fetcher for the given service URL.
    #[must_use]
    pub const fn new(client: H, service: Url) -> Self {
        Self { client, service }
    }

    /// Returns the configured service URL.
    #[must_use]
    pub const fn service(&self) -> &Url {
        &self.service
    }
}

impl<H: HttpClient> IpFetcher for HttpIpFetcher<H> {
    async fn fetch(&self) -> Result<PublicIp, FetchError> {
        let request = HttpRequest::get(self.service.clone());
        let response = self.client.request(request).await?;

        // Exactly 200, not the whole 2xx range.
        if response.status != http::StatusCode::OK {
            return Err(FetchError::UnexpectedStatus(response.status));
        }

        let body = String::from_utf8_lossy(&response.body);
        body.parse().map_err(|_| FetchError::MalformedBody {
            excerpt: excerpt(&body),
        })
    }
}

/// Truncates a response body for inclusion in an error message.
fn excerpt(body: &str) -> String {
    if body.chars().count() > EXCERPT_LEN {
        let head: String = body.chars().take(EXCERPT_LEN).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpResponse;
    use std::sync::{Arc, Mutex};

    /// Mock HTTP client returning a single predefined result and
    /// capturing the request it received.
    struct MockClient {
        response: Mutex<Option<Result<HttpResponse, HttpError>>>,
        captured: Mutex<Option<HttpRequest>>,
    }

    impl MockClient {
        fn new(response: Result<HttpResponse, HttpError>) -> Self {
            Self {
                response: Mutex::new(Some(response)),
                captured: Mutex::new(None),
            }
        }

        fn with_body(status: http::StatusCode, body: &[u8]) -> Self {
            Self::new(Ok(HttpResponse::new(status, body.to_vec())))
        }

        fn captured_request(&self) -> HttpRequest {
            self.captured.lock().unwrap().clone().expect("no request captured")
        }
    }

    impl HttpClient for MockClient {
        async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
            *self.captured.lock().unwrap() = Some(req);
            self.response.lock().unwrap().take().expect("single-shot mock")
        }
    }

    impl HttpClient for Arc<MockClient> {
        async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
            (**self).request(req).await
        }
    }

    fn service_url() -> Url {
        Url::parse("https://ip.example.com/plain").unwrap()
    }

    fn fetcher(client: MockClient) -> HttpIpFetcher<MockClient> {
        HttpIpFetcher::new(client, service_url())
    }

    #[tokio::test]
    async fn returns_address_on_200_with_well_formed_body() {
        let fetcher = fetcher(MockClient::with_body(http::StatusCode::OK, b"1.2.3.4"));

        let ip = fetcher.fetch().await.unwrap();

        assert_eq!(ip.as_str(), "1.2.3.4");
    }

    #[tokio::test]
    async fn sends_a_get_to_the_service_url() {
        let client = Arc::new(MockClient::with_body(http::StatusCode::OK, b"1.2.3.4"));
        let fetcher = HttpIpFetcher::new(Arc::clone(&client), service_url());

        fetcher.fetch().await.unwrap();

        let req = client.captured_request();
        assert_eq!(req.method, http::Method::GET);
        assert_eq!(req.url, service_url());
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn rejects_body_with_trailing_newline() {
        let fetcher = fetcher(MockClient::with_body(http::StatusCode::OK, b"1.2.3.4\n"));

        let err = fetcher.fetch().await.unwrap_err();

        assert!(matches!(err, FetchError::MalformedBody { .. }));
    }

    #[tokio::test]
    async fn rejects_empty_body() {
        let fetcher = fetcher(MockClient::with_body(http::StatusCode::OK, b""));

        let err = fetcher.fetch().await.unwrap_err();

        assert!(matches!(err, FetchError::MalformedBody { .. }));
    }

    #[tokio::test]
    async fn rejects_html_body() {
        let fetcher = fetcher(MockClient::with_body(
            http::StatusCode::OK,
            b"<html><body>blocked</body></html>",
        ));

        let err = fetcher.fetch().await.unwrap_err();

        assert!(matches!(err, FetchError::MalformedBody { .. }));
    }

    #[tokio::test]
    async fn rejects_non_utf8_body() {
        let fetcher = fetcher(MockClient::with_body(http::StatusCode::OK, &[0xff, 0xfe]));

        let err = fetcher.fetch().await.unwrap_err();

        assert!(matches!(err, FetchError::MalformedBody { .. }));
    }

    #[tokio::test]
    async fn rejects_non_200_status_regardless_of_body() {
        for status in [
            http::StatusCode::NO_CONTENT,
            http::StatusCode::MOVED_PERMANENTLY,
            http::StatusCode::NOT_FOUND,
            http::StatusCode::TOO_MANY_REQUESTS,
            http::StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let fetcher = fetcher(MockClient::with_body(status, b"1.2.3.4"));

            let err = fetcher.fetch().await.unwrap_err();

            match err {
                FetchError::UnexpectedStatus(s) => assert_eq!(s, status),
                other => panic!("expected UnexpectedStatus, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn propagates_transport_errors_as_fetch_errors() {
        let fetcher = fetcher(MockClient::new(Err(HttpError::Timeout)));

        let err = fetcher.fetch().await.unwrap_err();

        assert!(matches!(err, FetchError::Http(HttpError::Timeout)));
    }

    #[test]
    fn excerpt_truncates_long_bodies() {
        let long = "x".repeat(500);
        let short = excerpt(&long);

        assert!(short.len() < 80);
        assert!(short.ends_with("..."));
    }

    #[test]
    fn excerpt_keeps_short_bodies_intact() {
        assert_eq!(excerpt("not an ip"), "not an ip");
    }
}
