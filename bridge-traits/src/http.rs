//! HTTP Client Abstraction
//!
//! Provides the single async HTTP operation the providers need. Hosts inject
//! their own implementation; desktop builds use `bridge-desktop`.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

use crate::error::Result;

/// A `GET` request with headers
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: HashMap<String, String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// HTTP response
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    /// Get response body as UTF-8 string, replacing invalid sequences
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Check if response status is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async HTTP client trait
///
/// Implementations perform exactly one attempt per call. A response with a
/// non-success status is still `Ok`; only transport failures (DNS, TLS,
/// connection reset, timeout) are reported as errors.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::http::{HttpClient, HttpRequest};
///
/// async fn fetch_data(client: &dyn HttpClient) -> Result<String> {
///     let request = HttpRequest::get("https://api.example.com/data")
///         .header("Accept", "application/json");
///
///     let response = client.execute(request).await?;
///     Ok(response.text_lossy())
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Execute an HTTP request
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network connection fails
    /// - TLS validation fails
    /// - Request times out
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_request_builder() {
        let request = HttpRequest::get("https://example.com")
            .header("User-Agent", "test")
            .header("Authorization", "Discogs token=secret");

        assert_eq!(request.url, "https://example.com");
        assert_eq!(request.headers.get("User-Agent"), Some(&"test".to_string()));
        assert!(request.headers.contains_key("Authorization"));
    }

    #[test]
    fn test_http_response_status_and_body() {
        let response = HttpResponse {
            status: 204,
            body: Bytes::from("ok"),
        };
        assert!(response.is_success());
        assert_eq!(response.text_lossy(), "ok");

        let response = HttpResponse {
            status: 503,
            body: Bytes::from_static(b"down \xff"),
        };
        assert!(!response.is_success());
        assert_eq!(response.text_lossy(), "down \u{FFFD}");

        let redirect = HttpResponse {
            status: 301,
            body: Bytes::new(),
        };
        assert!(!redirect.is_success());
    }
}
