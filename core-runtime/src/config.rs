//! # Provider Configuration Module
//!
//! Provides configuration management for the upstream metadata APIs.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! [`ProviderApiConfig`] holding the credentials and request defaults the
//! Discogs provider needs. Validation is fail-fast: a config that would only
//! produce authentication failures at request time is rejected at build time.
//!
//! Credentials are never compiled into the binary. They are supplied by the
//! host, either directly through the builder or from the process environment:
//!
//! | Variable | Field | Required |
//! |----------|-------|----------|
//! | `DISCOGS_TOKEN` | `discogs_token` | yes |
//! | `LASTFM_API_KEY` | `lastfm_api_key` | yes |
//! | `DISCOGS_PROVIDER_USER_AGENT` | `user_agent` | no |
//! | `DISCOGS_PROVIDER_SEARCH_LIMIT` | `default_search_limit` | no (15) |
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::ProviderApiConfig;
//!
//! let config = ProviderApiConfig::builder()
//!     .discogs_token("personal-access-token")
//!     .lastfm_api_key("lastfm-key")
//!     .default_search_limit(25)
//!     .build()
//!     .expect("Failed to build config");
//!
//! // Or, from the environment
//! let config = ProviderApiConfig::from_env()?;
//! ```

use crate::error::{Error, Result};
use crate::logging::redact_if_sensitive;

/// Environment variable holding the Discogs personal access token
pub const DISCOGS_TOKEN_ENV: &str = "DISCOGS_TOKEN";

/// Environment variable holding the Last.fm API key
pub const LASTFM_API_KEY_ENV: &str = "LASTFM_API_KEY";

/// Environment variable overriding the User-Agent sent upstream
pub const USER_AGENT_ENV: &str = "DISCOGS_PROVIDER_USER_AGENT";

/// Environment variable overriding the default search limit
pub const SEARCH_LIMIT_ENV: &str = "DISCOGS_PROVIDER_SEARCH_LIMIT";

/// Results per search page when the caller does not specify a limit
pub const DEFAULT_SEARCH_LIMIT: u32 = 15;

/// Discogs caps `per_page` at 100
pub const MAX_SEARCH_LIMIT: u32 = 100;

/// Upstream API configuration for the Discogs metadata provider.
///
/// Use [`ProviderApiConfigBuilder`] or [`ProviderApiConfig::from_env`] to
/// construct instances.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderApiConfig {
    /// Discogs personal access token, sent as `Authorization: Discogs token=...`
    pub discogs_token: String,

    /// Last.fm API key, sent as the `api_key` query parameter
    ///
    /// Obtain an API key from: https://www.last.fm/api/account/create
    pub lastfm_api_key: String,

    /// User-Agent header sent to both APIs (Discogs rejects requests without one)
    pub user_agent: String,

    /// Search page size used when a request carries no explicit limit
    pub default_search_limit: u32,
}

impl std::fmt::Debug for ProviderApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderApiConfig")
            .field(
                "discogs_token",
                &redact_if_sensitive("discogs_token", &self.discogs_token),
            )
            .field(
                "lastfm_api_key",
                &redact_if_sensitive("lastfm_api_key", &self.lastfm_api_key),
            )
            .field("user_agent", &self.user_agent)
            .field("default_search_limit", &self.default_search_limit)
            .finish()
    }
}

impl ProviderApiConfig {
    /// Creates a new builder for constructing a `ProviderApiConfig`.
    pub fn builder() -> ProviderApiConfigBuilder {
        ProviderApiConfigBuilder::default()
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when a required variable is missing or a
    /// value fails validation.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    ///
    /// Hosts with their own secret store can pass a closure over it; the keys
    /// are the same as the environment variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(token) = lookup(DISCOGS_TOKEN_ENV) {
            builder = builder.discogs_token(token);
        }

        if let Some(api_key) = lookup(LASTFM_API_KEY_ENV) {
            builder = builder.lastfm_api_key(api_key);
        }

        if let Some(user_agent) = lookup(USER_AGENT_ENV) {
            builder = builder.user_agent(user_agent);
        }

        if let Some(raw) = lookup(SEARCH_LIMIT_ENV) {
            let limit = raw.trim().parse::<u32>().map_err(|e| {
                Error::Config(format!(
                    "{} must be a positive integer, got '{}': {}",
                    SEARCH_LIMIT_ENV, raw, e
                ))
            })?;
            builder = builder.default_search_limit(limit);
        }

        builder.build()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - Both credentials are non-blank
    /// - User agent is non-blank
    /// - Default search limit is within 1..=100
    pub fn validate(&self) -> Result<()> {
        if self.discogs_token.trim().is_empty() {
            return Err(Error::Config(format!(
                "Discogs token cannot be empty. Set {} or use .discogs_token().",
                DISCOGS_TOKEN_ENV
            )));
        }

        if self.lastfm_api_key.trim().is_empty() {
            return Err(Error::Config(format!(
                "Last.fm API key cannot be empty. Set {} or use .lastfm_api_key().",
                LASTFM_API_KEY_ENV
            )));
        }

        if self.user_agent.trim().is_empty() {
            return Err(Error::Config("User agent cannot be empty".to_string()));
        }

        if self.default_search_limit == 0 {
            return Err(Error::Config(
                "Default search limit must be greater than 0".to_string(),
            ));
        }

        if self.default_search_limit > MAX_SEARCH_LIMIT {
            return Err(Error::Config(format!(
                "Default search limit exceeds the Discogs maximum of {}",
                MAX_SEARCH_LIMIT
            )));
        }

        Ok(())
    }
}

/// Builder for [`ProviderApiConfig`].
#[derive(Default)]
pub struct ProviderApiConfigBuilder {
    discogs_token: Option<String>,
    lastfm_api_key: Option<String>,
    user_agent: Option<String>,
    default_search_limit: Option<u32>,
}

impl ProviderApiConfigBuilder {
    /// Sets the Discogs personal access token (required).
    pub fn discogs_token(mut self, token: impl Into<String>) -> Self {
        self.discogs_token = Some(token.into());
        self
    }

    /// Sets the Last.fm API key (required).
    pub fn lastfm_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.lastfm_api_key = Some(api_key.into());
        self
    }

    /// Overrides the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the default search page size (default: 15).
    pub fn default_search_limit(mut self, limit: u32) -> Self {
        self.default_search_limit = Some(limit);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when a credential is missing or validation
    /// fails.
    pub fn build(self) -> Result<ProviderApiConfig> {
        let discogs_token = self.discogs_token.ok_or_else(|| {
            Error::Config(format!(
                "Discogs token is required. Set {} or use .discogs_token().",
                DISCOGS_TOKEN_ENV
            ))
        })?;

        let lastfm_api_key = self.lastfm_api_key.ok_or_else(|| {
            Error::Config(format!(
                "Last.fm API key is required. Set {} or use .lastfm_api_key().",
                LASTFM_API_KEY_ENV
            ))
        })?;

        let config = ProviderApiConfig {
            discogs_token,
            lastfm_api_key,
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
            default_search_limit: self.default_search_limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
        };

        config.validate()?;

        Ok(config)
    }
}

fn default_user_agent() -> String {
    format!("DiscogsMetadataProvider/{}", env!("CARGO_PKG_VERSION"))
}
