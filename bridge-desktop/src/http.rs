//! HTTP Client Implementation using Reqwest

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    http::{HttpClient, HttpRequest, HttpResponse},
};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Default overall request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Reqwest-based HTTP client implementation
///
/// Provides HTTP operations with:
/// - Connection pooling via reqwest
/// - TLS support by default (rustls)
/// - One attempt per request; callers decide what to do with failures
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP client with custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| {
                BridgeError::NotAvailable(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Build reqwest request from bridge request
    fn build_request(&self, request: HttpRequest) -> reqwest::RequestBuilder {
        let mut req = self.client.get(&request.url);

        for (key, value) in request.headers {
            req = req.header(key, value);
        }

        req
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        // Query strings can carry API keys
        let endpoint = request.url.split('?').next().unwrap_or_default().to_string();
        debug!(endpoint = %endpoint, "Executing HTTP request");

        let response = self.build_request(request).send().await.map_err(|e| {
            let e = e.without_url();
            warn!(endpoint = %endpoint, error = %e, "HTTP request failed");

            if e.is_timeout() {
                BridgeError::OperationFailed("Request timed out".to_string())
            } else if e.is_connect() {
                BridgeError::OperationFailed(format!("Connection failed: {}", e))
            } else {
                BridgeError::OperationFailed(e.to_string())
            }
        })?;

        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| BridgeError::OperationFailed(e.without_url().to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_http_client_creation() {
        let client = ReqwestHttpClient::new();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_build_request_carries_headers() {
        let client = ReqwestHttpClient::new().unwrap();
        let request = HttpRequest::get("https://api.discogs.com/artists/1")
            .header("Accept", "application/json")
            .header("User-Agent", "DiscogsTests/1.0");

        let built = client.build_request(request).build().unwrap();
        assert_eq!(built.method(), reqwest::Method::GET);
        assert_eq!(built.url().path(), "/artists/1");
        assert_eq!(
            built.headers().get("Accept").unwrap().to_str().unwrap(),
            "application/json"
        );
        assert_eq!(
            built.headers().get("User-Agent").unwrap().to_str().unwrap(),
            "DiscogsTests/1.0"
        );
    }
}
