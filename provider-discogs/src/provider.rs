//! # Discogs Metadata Provider
//!
//! Composes [`DiscogsClient`], [`LastFmClient`] and the mappers into the five
//! host operations. Discogs is the source of truth for discography data;
//! Last.fm fills in biographies, tags and missing track durations.
//!
//! Two-step operations call Discogs first and Last.fm second, because the
//! Last.fm lookup is keyed by the names Discogs returns. Any upstream failure
//! aborts the operation.

use crate::discogs::DiscogsClient;
use crate::ids::{AlbumId, AlbumKind};
use crate::lastfm::LastFmClient;
use crate::mappers;
use crate::{PROVIDER_ID, PROVIDER_NAME};
use async_trait::async_trait;
use bridge_traits::http::HttpClient;
use core_metadata::error::Result;
use core_metadata::models::{Album, AlbumRef, ArtistBio, ArtistRef};
use core_metadata::provider::{
    AlbumMetadataCapability, ArtistMetadataCapability, MetadataProvider, SearchCapability,
    SearchParams,
};
use core_runtime::config::ProviderApiConfig;
use std::sync::Arc;
use tracing::{info, instrument};

const SEARCH_CAPABILITIES: &[SearchCapability] =
    &[SearchCapability::Artists, SearchCapability::Albums];

const ARTIST_METADATA_CAPABILITIES: &[ArtistMetadataCapability] = &[
    ArtistMetadataCapability::ArtistDetails,
    ArtistMetadataCapability::ArtistAlbums,
];

const ALBUM_METADATA_CAPABILITIES: &[AlbumMetadataCapability] =
    &[AlbumMetadataCapability::AlbumDetails];

/// Discogs-backed metadata provider
pub struct DiscogsMetadataProvider {
    discogs: DiscogsClient,
    lastfm: LastFmClient,
    default_limit: u32,
}

impl DiscogsMetadataProvider {
    /// Creates a provider that sends all upstream traffic through `http_client`.
    pub fn new(http_client: Arc<dyn HttpClient>, config: &ProviderApiConfig) -> Self {
        Self {
            discogs: DiscogsClient::new(
                Arc::clone(&http_client),
                config.discogs_token.clone(),
                config.user_agent.clone(),
            ),
            lastfm: LastFmClient::new(
                http_client,
                config.lastfm_api_key.clone(),
                config.user_agent.clone(),
            ),
            default_limit: config.default_search_limit,
        }
    }

    fn limit(&self, params: &SearchParams) -> u32 {
        params.limit.unwrap_or(self.default_limit)
    }
}

#[async_trait]
impl MetadataProvider for DiscogsMetadataProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn search_capabilities(&self) -> &[SearchCapability] {
        SEARCH_CAPABILITIES
    }

    fn artist_metadata_capabilities(&self) -> &[ArtistMetadataCapability] {
        ARTIST_METADATA_CAPABILITIES
    }

    fn album_metadata_capabilities(&self) -> &[AlbumMetadataCapability] {
        ALBUM_METADATA_CAPABILITIES
    }

    #[instrument(skip(self), fields(query = %params.query))]
    async fn search_artists(&self, params: &SearchParams) -> Result<Vec<ArtistRef>> {
        let limit = self.limit(params);
        info!(limit, "Searching Discogs artists");

        let result = self.discogs.search_artists(&params.query, limit).await?;
        info!(count = result.results.len(), "Artist search completed");

        Ok(result
            .results
            .iter()
            .map(mappers::map_search_item_to_artist_ref)
            .collect())
    }

    #[instrument(skip(self), fields(query = %params.query))]
    async fn search_albums(&self, params: &SearchParams) -> Result<Vec<AlbumRef>> {
        let limit = self.limit(params);
        info!(limit, "Searching Discogs masters");

        let result = self.discogs.search_masters(&params.query, limit).await?;
        info!(count = result.results.len(), "Album search completed");

        Ok(result
            .results
            .iter()
            .map(mappers::map_search_item_to_album_ref)
            .collect())
    }

    #[instrument(skip(self))]
    async fn fetch_artist_details(&self, id: &str) -> Result<ArtistBio> {
        info!("Fetching artist details");

        let artist = self.discogs.get_artist(id).await?;
        let lastfm = self.lastfm.get_artist_info(&artist.name).await?;

        Ok(mappers::map_artist_details(&artist, &lastfm.artist))
    }

    #[instrument(skip(self))]
    async fn fetch_album_details(&self, id: &str) -> Result<Album> {
        let album_id: AlbumId = id.parse()?;
        info!(kind = %album_id.kind, discogs_id = %album_id.discogs_id, "Fetching album details");

        let discogs = match album_id.kind {
            AlbumKind::Master => self.discogs.get_master(&album_id.discogs_id).await?,
            AlbumKind::Release => self.discogs.get_release(&album_id.discogs_id).await?,
        };

        let artist_name = discogs
            .artists
            .first()
            .map(|artist| artist.name.as_str())
            .unwrap_or("");
        let lastfm = self
            .lastfm
            .get_album_info(artist_name, &discogs.title)
            .await?;

        Ok(mappers::map_album_details(
            &discogs,
            &lastfm.album,
            album_id.kind,
        ))
    }

    #[instrument(skip(self))]
    async fn fetch_artist_albums(&self, id: &str) -> Result<Vec<AlbumRef>> {
        info!("Fetching artist albums");

        let page = self.discogs.get_artist_releases(id).await?;
        let albums: Vec<AlbumRef> = page
            .releases
            .iter()
            .filter(|release| release.release_type == AlbumKind::Master.prefix())
            .map(mappers::map_artist_release_to_album_ref)
            .collect();

        info!(
            total = page.releases.len(),
            masters = albums.len(),
            "Filtered artist releases"
        );
        Ok(albums)
    }
}
