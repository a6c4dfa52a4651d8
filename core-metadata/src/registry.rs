//! # Provider Registry
//!
//! Host-owned table of enabled providers, keyed by provider id. Plugins add
//! themselves from their `on_enable` hook through [`PluginApi`](crate::plugin::PluginApi).

use crate::error::{MetadataError, Result};
use crate::provider::{MetadataProvider, ProviderKind};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// A provider as stored by the host, tagged by kind
#[derive(Clone)]
pub enum RegisteredProvider {
    Metadata(Arc<dyn MetadataProvider>),
}

impl RegisteredProvider {
    pub fn id(&self) -> &str {
        match self {
            RegisteredProvider::Metadata(provider) => provider.id(),
        }
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            RegisteredProvider::Metadata(_) => ProviderKind::Metadata,
        }
    }

    pub fn as_metadata(&self) -> Option<&Arc<dyn MetadataProvider>> {
        match self {
            RegisteredProvider::Metadata(provider) => Some(provider),
        }
    }
}

impl std::fmt::Debug for RegisteredProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredProvider")
            .field("id", &self.id())
            .field("kind", &self.kind())
            .finish()
    }
}

impl From<Arc<dyn MetadataProvider>> for RegisteredProvider {
    fn from(provider: Arc<dyn MetadataProvider>) -> Self {
        RegisteredProvider::Metadata(provider)
    }
}

/// Registry of enabled providers
#[derive(Default)]
pub struct ProviderRegistry {
    providers: RwLock<HashMap<String, RegisteredProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider under its id.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::AlreadyRegistered`] if a provider with the same
    /// id is already present; the existing entry is kept.
    pub async fn register(&self, provider: impl Into<RegisteredProvider>) -> Result<()> {
        let provider = provider.into();
        let id = provider.id().to_string();

        let mut providers = self.providers.write().await;
        if providers.contains_key(&id) {
            return Err(MetadataError::AlreadyRegistered(id));
        }

        info!(provider_id = %id, kind = ?provider.kind(), "Registered provider");
        providers.insert(id, provider);
        Ok(())
    }

    /// Removes a provider, returning it if it was registered.
    pub async fn unregister(&self, id: &str) -> Option<RegisteredProvider> {
        let removed = self.providers.write().await.remove(id);
        if removed.is_some() {
            debug!(provider_id = %id, "Unregistered provider");
        }
        removed
    }

    /// Looks up a metadata provider by id.
    pub async fn metadata_provider(&self, id: &str) -> Option<Arc<dyn MetadataProvider>> {
        self.providers
            .read()
            .await
            .get(id)
            .and_then(|p| p.as_metadata().cloned())
    }

    /// Ids of all registered providers, sorted.
    pub async fn provider_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.providers.read().await.keys().cloned().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Album, AlbumRef, ArtistBio, ArtistRef};
    use crate::provider::{
        AlbumMetadataCapability, ArtistMetadataCapability, SearchCapability, SearchParams,
    };
    use async_trait::async_trait;

    pub(crate) struct StubProvider {
        pub id: &'static str,
    }

    #[async_trait]
    impl MetadataProvider for StubProvider {
        fn id(&self) -> &str {
            self.id
        }

        fn name(&self) -> &str {
            "Stub"
        }

        fn search_capabilities(&self) -> &[SearchCapability] {
            &[]
        }

        fn artist_metadata_capabilities(&self) -> &[ArtistMetadataCapability] {
            &[]
        }

        fn album_metadata_capabilities(&self) -> &[AlbumMetadataCapability] {
            &[]
        }

        async fn search_artists(&self, _params: &SearchParams) -> Result<Vec<ArtistRef>> {
            Ok(Vec::new())
        }

        async fn search_albums(&self, _params: &SearchParams) -> Result<Vec<AlbumRef>> {
            Ok(Vec::new())
        }

        async fn fetch_artist_details(&self, id: &str) -> Result<ArtistBio> {
            Err(MetadataError::InvalidId(id.to_string()))
        }

        async fn fetch_album_details(&self, id: &str) -> Result<Album> {
            Err(MetadataError::InvalidId(id.to_string()))
        }

        async fn fetch_artist_albums(&self, _id: &str) -> Result<Vec<AlbumRef>> {
            Ok(Vec::new())
        }
    }

    fn stub(id: &'static str) -> Arc<dyn MetadataProvider> {
        Arc::new(StubProvider { id })
    }

    #[tokio::test]
    async fn test_register_and_lookup() {
        let registry = ProviderRegistry::new();
        registry.register(stub("discogs")).await.unwrap();

        let provider = registry.metadata_provider("discogs").await.unwrap();
        assert_eq!(provider.id(), "discogs");
        assert_eq!(provider.kind(), ProviderKind::Metadata);
        assert!(registry.metadata_provider("missing").await.is_none());
    }

    #[tokio::test]
    async fn test_register_duplicate_rejected() {
        let registry = ProviderRegistry::new();
        registry.register(stub("discogs")).await.unwrap();

        let err = registry.register(stub("discogs")).await.unwrap_err();
        assert!(matches!(err, MetadataError::AlreadyRegistered(id) if id == "discogs"));
        assert_eq!(registry.provider_ids().await, vec!["discogs".to_string()]);
    }

    #[tokio::test]
    async fn test_unregister() {
        let registry = ProviderRegistry::new();
        registry.register(stub("b")).await.unwrap();
        registry.register(stub("a")).await.unwrap();
        assert_eq!(registry.provider_ids().await, vec!["a", "b"]);

        let removed = registry.unregister("a").await.unwrap();
        assert_eq!(removed.id(), "a");
        assert_eq!(removed.kind(), ProviderKind::Metadata);
        assert!(registry.unregister("a").await.is_none());
        assert_eq!(registry.provider_ids().await, vec!["b"]);
    }
}
