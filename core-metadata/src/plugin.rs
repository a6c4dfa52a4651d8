//! # Plugin Lifecycle
//!
//! Hooks the host calls while loading, enabling, disabling and unloading a
//! plugin. Every hook defaults to a no-op, so a plugin overrides only the
//! ones it needs.
//!
//! ```text
//! on_load ──> on_enable(api) ──> on_disable ──> on_unload
//!                  │
//!                  └──> api.providers().register(...)
//! ```

use crate::error::Result;
use crate::registry::ProviderRegistry;
use async_trait::async_trait;
use std::sync::Arc;

/// Host services exposed to plugins
#[derive(Clone, Default)]
pub struct PluginApi {
    providers: Arc<ProviderRegistry>,
}

impl PluginApi {
    pub fn new(providers: Arc<ProviderRegistry>) -> Self {
        Self { providers }
    }

    /// The host's provider registry
    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }
}

#[async_trait]
pub trait Plugin: Send + Sync {
    async fn on_load(&self) -> Result<()> {
        Ok(())
    }

    async fn on_enable(&self, _api: &PluginApi) -> Result<()> {
        Ok(())
    }

    async fn on_disable(&self) -> Result<()> {
        Ok(())
    }

    async fn on_unload(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::StubProvider;

    struct StubPlugin;

    #[async_trait]
    impl Plugin for StubPlugin {
        async fn on_enable(&self, api: &PluginApi) -> Result<()> {
            api.providers()
                .register(Arc::new(StubProvider { id: "stub" }) as Arc<dyn crate::MetadataProvider>)
                .await
        }
    }

    #[tokio::test]
    async fn test_lifecycle_defaults_and_enable() {
        let registry = Arc::new(ProviderRegistry::new());
        let api = PluginApi::new(registry.clone());
        let plugin = StubPlugin;

        plugin.on_load().await.unwrap();
        assert!(registry.provider_ids().await.is_empty());

        plugin.on_enable(&api).await.unwrap();
        assert_eq!(registry.provider_ids().await, vec!["stub"]);

        plugin.on_disable().await.unwrap();
        plugin.on_unload().await.unwrap();
        assert!(registry.metadata_provider("stub").await.is_some());
    }
}
