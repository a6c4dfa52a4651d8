//! # Metadata Provider Host Contract
//!
//! Defines what a host application expects from a metadata plugin.
//!
//! ## Overview
//!
//! This crate handles:
//! - Normalized entities (`ArtistRef`, `AlbumRef`, `ArtistBio`, `Album`, `Track`)
//!   with provenance tags
//! - The capability-tagged `MetadataProvider` trait
//! - The host-owned `ProviderRegistry`
//! - Plugin lifecycle hooks (`Plugin`, `PluginApi`)
//! - The shared `MetadataError` type

pub mod error;
pub mod models;
pub mod plugin;
pub mod provider;
pub mod registry;

pub use error::{MetadataError, Result};
pub use models::{
    Album, AlbumRef, ArtistBio, ArtistCredit, ArtistRef, ArtworkItem, ArtworkSet, DatePrecision,
    ProviderRef, ReleaseDate, Track,
};
pub use plugin::{Plugin, PluginApi};
pub use provider::{
    AlbumMetadataCapability, ArtistMetadataCapability, MetadataProvider, ProviderKind,
    SearchCapability, SearchParams,
};
pub use registry::{ProviderRegistry, RegisteredProvider};
