//! # Metadata Provider Contract
//!
//! The interface a host uses to query a metadata provider. A provider
//! declares which operations it supports through capability lists; the host
//! consults those lists before routing a request to it.
//!
//! ## Usage
//!
//! ```ignore
//! use core_metadata::provider::{MetadataProvider, SearchCapability, SearchParams};
//!
//! async fn search(provider: &dyn MetadataProvider) -> core_metadata::Result<()> {
//!     if provider.search_capabilities().contains(&SearchCapability::Artists) {
//!         let artists = provider
//!             .search_artists(&SearchParams::new("Miles Davis").with_limit(5))
//!             .await?;
//!         println!("{} artists", artists.len());
//!     }
//!     Ok(())
//! }
//! ```

use crate::error::Result;
use crate::models::{Album, AlbumRef, ArtistBio, ArtistRef};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Discriminant the host uses to tell provider families apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Metadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchCapability {
    Artists,
    Albums,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArtistMetadataCapability {
    ArtistDetails,
    ArtistAlbums,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlbumMetadataCapability {
    AlbumDetails,
}

/// Search request parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    /// Maximum results; `None` lets the provider apply its default
    pub limit: Option<u32>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Metadata provider trait
///
/// Implementations are stateless adapters over one or more upstream services.
/// Every operation either returns fully mapped entities or the first error it
/// hit; there are no partial results.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Stable provider id, also used as `ProviderRef::provider`
    fn id(&self) -> &str;

    /// Human-readable provider name
    fn name(&self) -> &str;

    fn kind(&self) -> ProviderKind {
        ProviderKind::Metadata
    }

    fn search_capabilities(&self) -> &[SearchCapability];

    fn artist_metadata_capabilities(&self) -> &[ArtistMetadataCapability];

    fn album_metadata_capabilities(&self) -> &[AlbumMetadataCapability];

    async fn search_artists(&self, params: &SearchParams) -> Result<Vec<ArtistRef>>;

    async fn search_albums(&self, params: &SearchParams) -> Result<Vec<AlbumRef>>;

    /// Fetch full artist details by the opaque id from an `ArtistRef`
    async fn fetch_artist_details(&self, id: &str) -> Result<ArtistBio>;

    /// Fetch full album details by the opaque id from an `AlbumRef`
    async fn fetch_album_details(&self, id: &str) -> Result<Album>;

    /// Fetch an artist's albums by the artist's opaque id
    async fn fetch_artist_albums(&self, id: &str) -> Result<Vec<AlbumRef>>;
}
