//! Normalized metadata entities handed to the host
//!
//! Every entity carries a [`ProviderRef`] naming the provider that produced it
//! and an opaque id the same provider can resolve again later. The field names
//! serialize as camelCase to match the host's schema.

use serde::{Deserialize, Serialize};

// =============================================================================
// Provenance & Artwork
// =============================================================================

/// Provenance tag: which provider produced an entity, and under which id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderRef {
    /// Provider id (e.g. `discogs`)
    pub provider: String,
    /// Provider-internal opaque id (e.g. `master:123`); may be empty when the
    /// upstream did not supply one
    pub id: String,
}

impl ProviderRef {
    pub fn new(provider: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkItem {
    pub url: String,
}

/// Set of artwork images for an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkSet {
    pub items: Vec<ArtworkItem>,
}

impl ArtworkSet {
    /// Artwork set holding exactly one image
    pub fn single(url: impl Into<String>) -> Self {
        Self {
            items: vec![ArtworkItem { url: url.into() }],
        }
    }

    /// Single-image set, or `None` when the URL is empty
    pub fn from_url(url: &str) -> Option<Self> {
        if url.is_empty() {
            None
        } else {
            Some(Self::single(url))
        }
    }
}

// =============================================================================
// Artists
// =============================================================================

/// Lightweight artist reference (search results, track credits)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRef {
    pub name: String,
    pub artwork: Option<ArtworkSet>,
    pub source: ProviderRef,
}

/// Artist as credited on an album, with optional roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistCredit {
    pub name: String,
    pub roles: Vec<String>,
    pub source: ProviderRef,
}

/// Full artist details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistBio {
    pub name: String,
    pub bio: Option<String>,
    pub artwork: Option<ArtworkSet>,
    pub tags: Option<Vec<String>>,
    pub source: ProviderRef,
}

// =============================================================================
// Albums & Tracks
// =============================================================================

/// Lightweight album reference (search results, discographies)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRef {
    pub title: String,
    pub artists: Vec<ArtistRef>,
    pub artwork: Option<ArtworkSet>,
    pub source: ProviderRef,
}

/// How much of a release date is known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePrecision {
    Year,
    Month,
    Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseDate {
    pub precision: DatePrecision,
    /// ISO-8601 prefix matching the precision (`1959`, `1959-08`, `1959-08-17`)
    pub date_iso: String,
}

impl ReleaseDate {
    pub fn year(year: u32) -> Self {
        Self {
            precision: DatePrecision::Year,
            date_iso: year.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub title: String,
    pub artists: Vec<ArtistRef>,
    pub source: ProviderRef,
    pub duration_ms: Option<u64>,
}

/// Full album details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub title: String,
    pub artists: Vec<ArtistCredit>,
    pub release_date: Option<ReleaseDate>,
    pub genres: Vec<String>,
    pub artwork: Option<ArtworkSet>,
    pub tracks: Vec<Track>,
    pub source: ProviderRef,
}
