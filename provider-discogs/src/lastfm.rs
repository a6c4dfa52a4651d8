//! Last.fm API Client
//!
//! Provides artist biographies, tags and per-track durations that Discogs
//! lacks.
//!
//! ## API Endpoints
//!
//! - **Artist Info**: `https://ws.audioscrobbler.com/2.0/?method=artist.getInfo&api_key={key}&format=json&artist={artist}`
//! - **Album Info**: `https://ws.audioscrobbler.com/2.0/?method=album.getInfo&api_key={key}&format=json&artist={artist}&album={album}`
//!
//! ## API Key Requirement
//!
//! Last.fm requires an API key for all requests, passed as a query parameter.
//! Obtain one at: https://www.last.fm/api/account/create
//!
//! ## Payload quirks
//!
//! Last.fm's JSON is converted from XML, so a list with one element is sent
//! as a bare object. [`OneOrMany`] absorbs that. API-level failures arrive as
//! `{"error": 6, "message": "..."}` with HTTP 200.

use bridge_traits::http::{HttpClient, HttpRequest};
use core_metadata::error::{MetadataError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Last.fm API base URL
const LASTFM_API_BASE: &str = "https://ws.audioscrobbler.com/2.0/";

// =============================================================================
// Response types
// =============================================================================

/// A field Last.fm encodes as a bare object when it holds a single element
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => std::slice::from_ref(item),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastFmArtistResponse {
    pub artist: LastFmArtist,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastFmArtist {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: Option<LastFmBio>,
    #[serde(default)]
    pub tags: Option<LastFmTags>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastFmBio {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastFmTags {
    #[serde(default)]
    pub tag: OneOrMany<LastFmTag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastFmTag {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastFmAlbumResponse {
    pub album: LastFmAlbum,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LastFmAlbum {
    #[serde(default)]
    pub tracks: Option<LastFmTracks>,
}

impl LastFmAlbum {
    /// Album tracks, always as a list
    pub fn track_list(&self) -> &[LastFmTrack] {
        self.tracks
            .as_ref()
            .map(|tracks| tracks.track.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastFmTracks {
    #[serde(default)]
    pub track: OneOrMany<LastFmTrack>,
}

/// Duration as Last.fm sends it: a number, a numeric string, or null
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LastFmSeconds {
    Number(u64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct LastFmTrack {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub duration: Option<LastFmSeconds>,
}

impl LastFmTrack {
    /// Track length in seconds; `None` when absent, unparseable or zero
    pub fn duration_seconds(&self) -> Option<u64> {
        let seconds = match self.duration.as_ref()? {
            LastFmSeconds::Number(n) => *n,
            LastFmSeconds::Text(s) => s.trim().parse().ok()?,
        };
        (seconds > 0).then_some(seconds)
    }
}

/// Last.fm error response
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: i32,
    message: String,
}

// =============================================================================
// Client
// =============================================================================

/// Last.fm API client
pub struct LastFmClient {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
    user_agent: String,
}

impl LastFmClient {
    /// Creates a new Last.fm API client
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client for making requests
    /// * `api_key` - Last.fm API key
    /// * `user_agent` - User-Agent header value
    pub fn new(http_client: Arc<dyn HttpClient>, api_key: String, user_agent: String) -> Self {
        Self {
            http_client,
            api_key,
            user_agent,
        }
    }

    pub async fn get_artist_info(&self, artist: &str) -> Result<LastFmArtistResponse> {
        self.call("artist.getInfo", &[("artist", artist)]).await
    }

    pub async fn get_album_info(&self, artist: &str, album: &str) -> Result<LastFmAlbumResponse> {
        self.call("album.getInfo", &[("artist", artist), ("album", album)]).await
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: &[(&str, &str)]) -> Result<T> {
        let mut query = format!(
            "method={}&api_key={}&format=json",
            method,
            urlencoding::encode(&self.api_key)
        );
        for (key, value) in params {
            query.push('&');
            query.push_str(key);
            query.push('=');
            query.push_str(&urlencoding::encode(value));
        }

        debug!(method = %method, params = ?params, "Querying Last.fm");

        let request = HttpRequest::get(format!("{}?{}", LASTFM_API_BASE, query))
            .header("User-Agent", self.user_agent.as_str())
            .header("Accept", "application/json");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| MetadataError::NetworkError(format!("Last.fm request failed: {}", e)))?;

        if !response.is_success() {
            warn!(method = %method, status = response.status, "Last.fm request rejected");
            return Err(MetadataError::HttpError {
                status: response.status,
                body: response.text_lossy(),
            });
        }

        if let Ok(error_resp) = serde_json::from_slice::<ErrorResponse>(&response.body) {
            warn!(method = %method, code = error_resp.error, "Last.fm API error");
            return Err(MetadataError::RemoteApi(format!(
                "Last.fm API error {}: {}",
                error_resp.error, error_resp.message
            )));
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            MetadataError::JsonParse(format!("Failed to parse Last.fm response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_track_object_normalized() {
        let single: LastFmAlbumResponse = serde_json::from_str(
            r#"{"album": {"tracks": {"track": {"name": "Flamenco Sketches", "duration": "562"}}}}"#,
        )
        .unwrap();
        let list: LastFmAlbumResponse = serde_json::from_str(
            r#"{"album": {"tracks": {"track": [{"name": "Flamenco Sketches", "duration": "562"}]}}}"#,
        )
        .unwrap();

        let single_tracks = single.album.track_list();
        let list_tracks = list.album.track_list();
        assert_eq!(single_tracks.len(), 1);
        assert_eq!(list_tracks.len(), 1);
        assert_eq!(single_tracks[0].name, list_tracks[0].name);
        assert_eq!(single_tracks[0].duration_seconds(), Some(562));
    }

    #[test]
    fn test_missing_tracks_is_empty() {
        let response: LastFmAlbumResponse = serde_json::from_str(r#"{"album": {}}"#).unwrap();
        assert!(response.album.track_list().is_empty());
    }

    #[test]
    fn test_duration_encodings() {
        let tracks: Vec<LastFmTrack> = serde_json::from_str(
            r#"[
                {"name": "a", "duration": 200},
                {"name": "b", "duration": "200"},
                {"name": "c", "duration": null},
                {"name": "d"},
                {"name": "e", "duration": "0"},
                {"name": "f", "duration": "n/a"}
            ]"#,
        )
        .unwrap();

        let seconds: Vec<Option<u64>> = tracks.iter().map(|t| t.duration_seconds()).collect();
        assert_eq!(seconds, vec![Some(200), Some(200), None, None, None, None]);
    }

    #[test]
    fn test_single_tag_object_normalized() {
        let response: LastFmArtistResponse = serde_json::from_str(
            r#"{"artist": {"name": "Miles Davis", "tags": {"tag": {"name": "jazz"}}}}"#,
        )
        .unwrap();

        let tags = response.artist.tags.unwrap().tag.into_vec();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "jazz");
        assert!(response.artist.bio.is_none());
    }

    #[test]
    fn test_missing_names_default_to_empty() {
        let album: LastFmAlbumResponse = serde_json::from_str(
            r#"{"album": {"tracks": {"track": [{"duration": "100"}, {"name": "So What"}]}}}"#,
        )
        .unwrap();
        let tracks = album.album.track_list();
        assert_eq!(tracks[0].name, "");
        assert_eq!(tracks[0].duration_seconds(), Some(100));
        assert_eq!(tracks[1].name, "So What");

        let artist: LastFmArtistResponse =
            serde_json::from_str(r#"{"artist": {"tags": {"tag": [{}]}}}"#).unwrap();
        assert_eq!(artist.artist.name, "");
        assert_eq!(artist.artist.tags.unwrap().tag.into_vec()[0].name, "");
    }

    #[test]
    fn test_error_payload_detected() {
        let body = br#"{"error": 6, "message": "Artist not found"}"#;
        let err: ErrorResponse = serde_json::from_slice(body).unwrap();
        assert_eq!(err.error, 6);

        let ok_body = br#"{"artist": {"name": "Miles Davis"}}"#;
        assert!(serde_json::from_slice::<ErrorResponse>(ok_body).is_err());
    }
}
