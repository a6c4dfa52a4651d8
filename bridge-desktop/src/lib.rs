//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! - `HttpClient` using `reqwest` with rustls
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::ReqwestHttpClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let http_client = Arc::new(ReqwestHttpClient::new()?);
//!     // Hand to DiscogsPlugin::new(config, http_client)
//!     Ok(())
//! }
//! ```

mod http;

pub use http::ReqwestHttpClient;
