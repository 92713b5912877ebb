//! HTTP request/response types and client trait.

use super::HttpError;

/// An HTTP request to be sent.
///
/// A value type that can be constructed and passed to any [`HttpClient`]
/// implementation. It uses standard `http` crate types for method and
/// headers, ensuring compatibility with the broader ecosystem.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET or POST for this application)
    pub method: http::Method,
    /// Target URL
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Optional request body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a new HTTP request with the given method and URL.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a GET request to the given URL.
    #[must_use]
    pub fn get(url: url::Url) -> Self {
        Self::new(http::Method::GET, url)
    }

    /// Creates a POST request to the given URL.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Sets the request body.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

/// An HTTP response received from a server.
///
/// The body is fully buffered into memory; the responses this application
/// handles are a short plain-text address or an empty webhook acknowledgment.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Trait for making HTTP requests.
///
/// # Design
///
/// This trait abstracts the HTTP client implementation, enabling:
/// - Dependency injection for testing with mock clients
/// - Swapping HTTP libraries without changing calling code
pub trait HttpClient: Send + Sync {
    /// Sends an HTTP request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the network connection fails
    /// ([`HttpError::Connection`]) or the request times out
    /// ([`HttpError::Timeout`]).
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_url() -> url::Url {
        url::Url::parse("https://example.com/").unwrap()
    }

    #[test]
    fn get_constructor_sets_method() {
        let req = HttpRequest::get(test_url());
        assert_eq!(req.method, http::Method::GET);
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn post_constructor_sets_method() {
        let req = HttpRequest::post(test_url());
        assert_eq!(req.method, http::Method::POST);
    }

    #[test]
    fn with_body_sets_body() {
        let req = HttpRequest::post(test_url()).with_body(b"payload".to_vec());
        assert_eq!(req.body.as_deref(), Some(b"payload".as_slice()));
    }

    #[test]
    fn with_header_appends_header() {
        let req = HttpRequest::post(test_url()).with_header(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn response_is_success_for_2xx_only() {
        assert!(HttpResponse::new(http::StatusCode::OK, vec![]).is_success());
        assert!(HttpResponse::new(http::StatusCode::NO_CONTENT, vec![]).is_success());
        assert!(!HttpResponse::new(http::StatusCode::NOT_FOUND, vec![]).is_success());
        assert!(!HttpResponse::new(http::StatusCode::INTERNAL_SERVER_ERROR, vec![]).is_success());
    }
}
