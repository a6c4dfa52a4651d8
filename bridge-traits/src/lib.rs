//! # Host Bridge Traits
//!
//! Platform abstraction traits that a host must implement (or take from
//! `bridge-desktop`) before metadata providers can run.
//!
//! ## Traits
//!
//! - [`HttpClient`](http::HttpClient) - Async HTTP operations
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Platform
//! implementations should convert platform-specific errors to `BridgeError`
//! with actionable messages (URL, status, cause).
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so a single client can be shared by
//! concurrent provider requests.
//!
//! ## Implementing HttpClient
//!
//! ```ignore
//! use bridge_traits::http::{HttpClient, HttpRequest, HttpResponse};
//! use bridge_traits::error::Result;
//! use async_trait::async_trait;
//!
//! pub struct MyHttpClient {
//!     client: reqwest::Client,
//! }
//!
//! #[async_trait]
//! impl HttpClient for MyHttpClient {
//!     async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
//!         // Implementation
//!         todo!()
//!     }
//! }
//! ```

pub mod error;
pub mod http;

pub use error::BridgeError;

pub use http::{HttpClient, HttpRequest, HttpResponse};
