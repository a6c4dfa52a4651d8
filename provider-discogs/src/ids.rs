//! Opaque ids handed to the host
//!
//! - artist: `"<discogs id>"`
//! - album: `"<kind>:<discogs id>"`, kind is `master` or `release`
//! - track: `"<kind>:<discogs id>:<index>"`, index into the Discogs tracklist

use core_metadata::error::MetadataError;
use std::fmt;
use std::str::FromStr;

/// Which Discogs endpoint an album id resolves against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlbumKind {
    Master,
    Release,
}

impl AlbumKind {
    pub fn prefix(self) -> &'static str {
        match self {
            AlbumKind::Master => "master",
            AlbumKind::Release => "release",
        }
    }
}

impl fmt::Display for AlbumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for AlbumKind {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "master" => Ok(AlbumKind::Master),
            "release" => Ok(AlbumKind::Release),
            other => Err(MetadataError::InvalidId(format!(
                "unknown album kind '{}', expected 'master' or 'release'",
                other
            ))),
        }
    }
}

/// Parsed album id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlbumId {
    pub kind: AlbumKind,
    pub discogs_id: String,
}

impl AlbumId {
    pub fn new(kind: AlbumKind, discogs_id: impl Into<String>) -> Self {
        Self {
            kind,
            discogs_id: discogs_id.into(),
        }
    }

    /// Id of the track at `index` on this album
    pub fn track_id(&self, index: usize) -> String {
        format!("{}:{}", self, index)
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.discogs_id)
    }
}

impl FromStr for AlbumId {
    type Err = MetadataError;

    /// Accepts album ids and track ids; a track id resolves to its album.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let kind = parts.next().unwrap_or_default();
        let discogs_id = parts
            .next()
            .ok_or_else(|| MetadataError::InvalidId(format!("'{}' is not '<kind>:<id>'", s)))?;

        if discogs_id.is_empty() || !discogs_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MetadataError::InvalidId(format!(
                "'{}' does not contain a numeric Discogs id",
                s
            )));
        }

        Ok(Self::new(kind.parse()?, discogs_id))
    }
}
