//! Plugin entry point
//!
//! The host loads [`DiscogsPlugin`] and drives its lifecycle; enabling it
//! registers a [`DiscogsMetadataProvider`] in the host's provider registry.

use crate::provider::DiscogsMetadataProvider;
use crate::PROVIDER_ID;
use async_trait::async_trait;
use bridge_traits::http::HttpClient;
use core_metadata::error::Result;
use core_metadata::plugin::{Plugin, PluginApi};
use core_metadata::provider::MetadataProvider;
use core_runtime::config::ProviderApiConfig;
use std::sync::Arc;
use tracing::info;

pub struct DiscogsPlugin {
    config: ProviderApiConfig,
    http_client: Arc<dyn HttpClient>,
}

impl DiscogsPlugin {
    pub fn new(config: ProviderApiConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// Builds the plugin from `DISCOGS_TOKEN` / `LASTFM_API_KEY` and a
    /// reqwest-backed HTTP client.
    #[cfg(feature = "desktop-shims")]
    pub fn from_env() -> Result<Self> {
        let config = ProviderApiConfig::from_env()?;
        let http_client = bridge_desktop::ReqwestHttpClient::new()?;
        Ok(Self::new(config, Arc::new(http_client)))
    }

    pub fn config(&self) -> &ProviderApiConfig {
        &self.config
    }
}

impl std::fmt::Debug for DiscogsPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscogsPlugin")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Plugin for DiscogsPlugin {
    async fn on_enable(&self, api: &PluginApi) -> Result<()> {
        let provider: Arc<dyn MetadataProvider> = Arc::new(DiscogsMetadataProvider::new(
            Arc::clone(&self.http_client),
            &self.config,
        ));
        api.providers().register(provider).await?;

        info!(provider_id = PROVIDER_ID, "Discogs plugin enabled");
        Ok(())
    }
}
