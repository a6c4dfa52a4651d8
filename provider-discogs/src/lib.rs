//! # Discogs Metadata Provider
//!
//! Adapts the Discogs database API (discography) and the Last.fm API
//! (biographies, tags, track durations) into the host's normalized metadata
//! entities.
//!
//! ## Overview
//!
//! This crate provides:
//! - `DiscogsClient` and `LastFmClient`: typed upstream clients over
//!   `bridge_traits::HttpClient`
//! - `mappers`: pure conversion into `core_metadata` entities
//! - `DiscogsMetadataProvider`: the five provider operations
//! - `DiscogsPlugin`: lifecycle entry point that registers the provider
//!
//! ## Usage
//!
//! ```ignore
//! use core_metadata::{PluginApi, Plugin, ProviderRegistry, SearchParams};
//! use provider_discogs::DiscogsPlugin;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(ProviderRegistry::new());
//! let plugin = DiscogsPlugin::from_env()?;
//! plugin.on_enable(&PluginApi::new(registry.clone())).await?;
//!
//! let discogs = registry.metadata_provider("discogs").await.unwrap();
//! let artists = discogs.search_artists(&SearchParams::new("Miles Davis")).await?;
//! ```

pub mod discogs;
pub mod ids;
pub mod lastfm;
pub mod mappers;
pub mod plugin;
pub mod provider;

/// Provider id, also the `provider` field of every `ProviderRef` this crate emits
pub const PROVIDER_ID: &str = "discogs";

/// Human-readable provider name
pub const PROVIDER_NAME: &str = "Discogs";

pub use discogs::DiscogsClient;
pub use ids::{AlbumId, AlbumKind};
pub use lastfm::LastFmClient;
pub use plugin::DiscogsPlugin;
pub use provider::DiscogsMetadataProvider;
