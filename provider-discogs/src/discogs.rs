//! Discogs API Client
//!
//! Typed access to the parts of the Discogs database API the provider uses.
//!
//! ## API Endpoints
//!
//! - **Search**: `https://api.discogs.com/database/search?type={artist|master}&q={query}&per_page={limit}`
//! - **Artist**: `https://api.discogs.com/artists/{id}`
//! - **Master**: `https://api.discogs.com/masters/{id}`
//! - **Release**: `https://api.discogs.com/releases/{id}`
//! - **Artist releases**: `https://api.discogs.com/artists/{id}/releases?sort=year&sort_order=desc`
//!
//! ## Authentication
//!
//! Every request carries `Authorization: Discogs token={token}` with a
//! personal access token, plus the `User-Agent` Discogs requires.
//! Obtain a token at: https://www.discogs.com/settings/developers

use bridge_traits::http::{HttpClient, HttpRequest};
use core_metadata::error::{MetadataError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Discogs API base URL
const DISCOGS_API_BASE: &str = "https://api.discogs.com";

// =============================================================================
// Response types
// =============================================================================

/// A single hit from `/database/search`
#[derive(Debug, Clone, Deserialize)]
pub struct DiscogsSearchItem {
    pub id: u64,
    /// Artist name for artist searches, `"Artist - Title"` for master searches
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumb: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscogsSearchResult {
    #[serde(default)]
    pub results: Vec<DiscogsSearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscogsImage {
    #[serde(default)]
    pub uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscogsArtist {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub images: Vec<DiscogsImage>,
}

/// Artist credit on a master or release
#[derive(Debug, Clone, Deserialize)]
pub struct DiscogsArtistCredit {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscogsTrack {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub title: String,
    /// `"m:ss"`, frequently empty
    #[serde(default)]
    pub duration: String,
}

/// Master release; `/releases/{id}` returns the same shape
#[derive(Debug, Clone, Deserialize)]
pub struct DiscogsMaster {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    /// 0 when unknown
    #[serde(default)]
    pub year: u32,
    #[serde(default)]
    pub artists: Vec<DiscogsArtistCredit>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub images: Vec<DiscogsImage>,
    #[serde(default)]
    pub tracklist: Vec<DiscogsTrack>,
}

pub type DiscogsRelease = DiscogsMaster;

/// Entry of an artist's discography page
#[derive(Debug, Clone, Deserialize)]
pub struct DiscogsArtistRelease {
    pub id: u64,
    /// `master` or `release`
    #[serde(rename = "type", default)]
    pub release_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub year: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscogsArtistReleases {
    #[serde(default)]
    pub releases: Vec<DiscogsArtistRelease>,
}

// =============================================================================
// Client
// =============================================================================

/// Discogs API client
pub struct DiscogsClient {
    http_client: Arc<dyn HttpClient>,
    token: String,
    user_agent: String,
}

impl DiscogsClient {
    /// Creates a new Discogs API client
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client for making requests
    /// * `token` - Discogs personal access token
    /// * `user_agent` - User-Agent header value
    pub fn new(http_client: Arc<dyn HttpClient>, token: String, user_agent: String) -> Self {
        Self {
            http_client,
            token,
            user_agent,
        }
    }

    pub async fn search_artists(&self, query: &str, limit: u32) -> Result<DiscogsSearchResult> {
        self.search("artist", query, limit).await
    }

    pub async fn search_masters(&self, query: &str, limit: u32) -> Result<DiscogsSearchResult> {
        self.search("master", query, limit).await
    }

    pub async fn get_artist(&self, id: &str) -> Result<DiscogsArtist> {
        self.fetch(&format!("/artists/{}", urlencoding::encode(id))).await
    }

    pub async fn get_master(&self, id: &str) -> Result<DiscogsMaster> {
        self.fetch(&format!("/masters/{}", urlencoding::encode(id))).await
    }

    pub async fn get_release(&self, id: &str) -> Result<DiscogsRelease> {
        self.fetch(&format!("/releases/{}", urlencoding::encode(id))).await
    }

    /// Artist discography, newest first
    pub async fn get_artist_releases(&self, id: &str) -> Result<DiscogsArtistReleases> {
        self.fetch(&format!(
            "/artists/{}/releases?sort=year&sort_order=desc",
            urlencoding::encode(id)
        ))
        .await
    }

    async fn search(
        &self,
        search_type: &str,
        query: &str,
        limit: u32,
    ) -> Result<DiscogsSearchResult> {
        self.fetch(&format!(
            "/database/search?type={}&q={}&per_page={}",
            search_type,
            urlencoding::encode(query),
            limit
        ))
        .await
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", DISCOGS_API_BASE, endpoint);

        debug!(url = %url, "Querying Discogs");

        let request = HttpRequest::get(url)
            .header("Authorization", format!("Discogs token={}", self.token))
            .header("User-Agent", self.user_agent.as_str())
            .header("Accept", "application/json");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| MetadataError::NetworkError(format!("Discogs request failed: {}", e)))?;

        if !response.is_success() {
            warn!(endpoint = %endpoint, status = response.status, "Discogs request rejected");
            return Err(MetadataError::HttpError {
                status: response.status,
                body: response.text_lossy(),
            });
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            MetadataError::JsonParse(format!("Failed to parse Discogs response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_tolerates_missing_fields() {
        let master: DiscogsMaster = serde_json::from_str(
            r#"{"id": 5460, "title": "Kind Of Blue", "tracklist": [{"title": "So What"}]}"#,
        )
        .unwrap();

        assert_eq!(master.year, 0);
        assert!(master.artists.is_empty());
        assert!(master.genres.is_empty());
        assert!(master.images.is_empty());
        assert_eq!(master.tracklist[0].duration, "");
        assert_eq!(master.tracklist[0].position, "");
    }

    #[test]
    fn test_missing_names_and_titles_default_to_empty() {
        let search: DiscogsSearchResult = serde_json::from_str(
            r#"{"results": [{"id": 1}, {"id": 2, "title": "Kind Of Blue"}]}"#,
        )
        .unwrap();
        assert_eq!(search.results[0].title, "");
        assert_eq!(search.results[1].title, "Kind Of Blue");

        let master: DiscogsMaster = serde_json::from_str(
            r#"{"id": 5460, "artists": [{"id": 1}], "tracklist": [{"duration": "9:22"}]}"#,
        )
        .unwrap();
        assert_eq!(master.title, "");
        assert_eq!(master.artists[0].name, "");
        assert_eq!(master.tracklist[0].title, "");

        let page: DiscogsArtistReleases =
            serde_json::from_str(r#"{"releases": [{"id": 3}]}"#).unwrap();
        assert_eq!(page.releases[0].release_type, "");
        assert_eq!(page.releases[0].title, "");
    }

    #[test]
    fn test_artist_release_type_field() {
        let page: DiscogsArtistReleases = serde_json::from_str(
            r#"{"releases": [
                {"id": 1, "type": "master", "title": "A", "thumb": "t", "year": 1959},
                {"id": 2, "type": "release", "title": "B"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(page.releases[0].release_type, "master");
        assert_eq!(page.releases[1].release_type, "release");
        assert_eq!(page.releases[1].thumb, "");
        assert_eq!(page.releases[1].year, 0);
    }
}
