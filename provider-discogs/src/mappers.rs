//! Discogs + Last.fm → normalized entities
//!
//! Pure functions only; no I/O. Missing upstream fields fall back to absent
//! values instead of failing.

use crate::discogs::{
    DiscogsArtist, DiscogsArtistCredit, DiscogsArtistRelease, DiscogsImage, DiscogsMaster,
    DiscogsSearchItem,
};
use crate::ids::{AlbumId, AlbumKind};
use crate::lastfm::{LastFmAlbum, LastFmArtist};
use crate::PROVIDER_ID;
use core_metadata::models::{
    Album, AlbumRef, ArtistBio, ArtistCredit, ArtistRef, ArtworkSet, ProviderRef, ReleaseDate,
    Track,
};

/// Separator Discogs puts between artist and title in master search results
const TITLE_SEPARATOR: &str = " - ";

fn source(id: impl Into<String>) -> ProviderRef {
    ProviderRef::new(PROVIDER_ID, id)
}

fn first_image(images: &[DiscogsImage]) -> Option<ArtworkSet> {
    images.first().map(|image| ArtworkSet::single(image.uri.as_str()))
}

/// Artist search hit → artist reference
pub fn map_search_item_to_artist_ref(item: &DiscogsSearchItem) -> ArtistRef {
    ArtistRef {
        name: item.title.clone(),
        artwork: ArtworkSet::from_url(&item.thumb),
        source: source(item.id.to_string()),
    }
}

/// Splits `"Artist - Title"` on the first separator.
///
/// Returns `(None, whole)` when there is no separator.
pub fn split_artist_title(combined: &str) -> (Option<&str>, &str) {
    match combined.split_once(TITLE_SEPARATOR) {
        Some((artist, title)) => (Some(artist), title),
        None => (None, combined),
    }
}

/// Master search hit → album reference.
///
/// The search endpoint returns no artist id, so the synthesized artist has an
/// empty opaque id.
pub fn map_search_item_to_album_ref(item: &DiscogsSearchItem) -> AlbumRef {
    let (artist, title) = split_artist_title(&item.title);

    AlbumRef {
        title: title.to_string(),
        artists: artist
            .map(|name| ArtistRef {
                name: name.to_string(),
                artwork: None,
                source: source(""),
            })
            .into_iter()
            .collect(),
        artwork: ArtworkSet::from_url(&item.thumb),
        source: source(AlbumId::new(AlbumKind::Master, item.id.to_string()).to_string()),
    }
}

/// Discogs artist + Last.fm artist → artist bio
pub fn map_artist_details(discogs: &DiscogsArtist, lastfm: &LastFmArtist) -> ArtistBio {
    ArtistBio {
        name: discogs.name.clone(),
        bio: lastfm.bio.as_ref().map(|bio| bio.content.clone()),
        artwork: first_image(&discogs.images),
        tags: lastfm.tags.as_ref().map(|tags| {
            tags.tag
                .as_slice()
                .iter()
                .map(|tag| tag.name.clone())
                .collect()
        }),
        source: source(discogs.id.to_string()),
    }
}

/// Parses a Discogs `"m:ss"` duration into milliseconds.
///
/// Zero minutes counts as unknown, matching how Discogs pads missing values.
/// A present but empty seconds segment (`"3:"`) counts as zero seconds.
pub fn parse_discogs_duration(duration: &str) -> Option<u64> {
    let mut parts = duration.split(':');
    let minutes: u64 = parts.next()?.trim().parse().ok()?;
    let seconds: u64 = match parts.next()?.trim() {
        "" => 0,
        secs => secs.parse().ok()?,
    };

    if minutes == 0 {
        return None;
    }

    Some((minutes * 60 + seconds) * 1000)
}

fn credit_to_ref(artist: &DiscogsArtistCredit) -> ArtistRef {
    ArtistRef {
        name: artist.name.clone(),
        artwork: None,
        source: source(artist.id.to_string()),
    }
}

/// Discogs master/release + Last.fm album → full album.
///
/// Track durations come from Discogs when parseable, otherwise from the
/// Last.fm track with the same title (case-insensitive).
pub fn map_album_details(
    discogs: &DiscogsMaster,
    lastfm: &LastFmAlbum,
    kind: AlbumKind,
) -> Album {
    let album_id = AlbumId::new(kind, discogs.id.to_string());
    let lastfm_tracks = lastfm.track_list();
    let track_artists: Vec<ArtistRef> = discogs.artists.iter().map(credit_to_ref).collect();

    let tracks = discogs
        .tracklist
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let duration_ms = parse_discogs_duration(&track.duration).or_else(|| {
                let title = track.title.to_lowercase();
                lastfm_tracks
                    .iter()
                    .find(|candidate| candidate.name.to_lowercase() == title)
                    .and_then(|candidate| candidate.duration_seconds())
                    .map(|seconds| seconds * 1000)
            });

            Track {
                title: track.title.clone(),
                artists: track_artists.clone(),
                source: source(album_id.track_id(index)),
                duration_ms,
            }
        })
        .collect();

    Album {
        title: discogs.title.clone(),
        artists: discogs
            .artists
            .iter()
            .map(|artist| ArtistCredit {
                name: artist.name.clone(),
                roles: Vec::new(),
                source: source(artist.id.to_string()),
            })
            .collect(),
        release_date: (discogs.year != 0).then(|| ReleaseDate::year(discogs.year)),
        genres: discogs
            .genres
            .iter()
            .chain(discogs.styles.iter())
            .cloned()
            .collect(),
        artwork: first_image(&discogs.images),
        tracks,
        source: source(album_id.to_string()),
    }
}

/// Artist discography entry → album reference
pub fn map_artist_release_to_album_ref(release: &DiscogsArtistRelease) -> AlbumRef {
    AlbumRef {
        title: release.title.clone(),
        artists: Vec::new(),
        artwork: ArtworkSet::from_url(&release.thumb),
        source: source(format!("{}:{}", release.release_type, release.id)),
    }
}
