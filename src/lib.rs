//! Workspace facade crate.
//!
//! Re-exports the plugin surface so a host can depend on a single crate:
//! the host contract from `core-metadata`, configuration and logging from
//! `core-runtime`, and the Discogs plugin itself. The `desktop-shims` feature
//! (on by default) enables `DiscogsPlugin::from_env` with a reqwest client.

pub use core_metadata::{
    Album, AlbumRef, ArtistBio, ArtistRef, MetadataError, MetadataProvider, Plugin, PluginApi,
    ProviderRegistry, SearchParams,
};
pub use core_runtime::config::ProviderApiConfig;
pub use core_runtime::logging::{init_logging, LoggingConfig};
pub use provider_discogs::{DiscogsMetadataProvider, DiscogsPlugin};
