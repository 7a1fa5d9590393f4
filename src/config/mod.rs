//! Configuration types for the BigCommerce provider.
//!
//! This module provides the configuration resolved by the provider's configure
//! step and passed explicitly to every lifecycle callback.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ProviderConfig`]: Provider-wide settings (store hash, API host)
//! - [`ProviderConfigBuilder`]: A builder for constructing [`ProviderConfig`] instances
//! - [`StoreHash`]: A validated store identifier
//! - [`ClientId`] / [`AccessToken`]: Validated per-resource credentials
//! - [`HostUrl`]: A validated API host override
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_provider::{ProviderConfig, StoreHash};
//!
//! let config = ProviderConfig::builder()
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_base_uri(), "https://api.bigcommerce.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ClientId, HostUrl, StoreHash};

use crate::error::ConfigError;

/// Environment variable consulted when `store_hash` is not configured.
pub const STORE_HASH_ENV_VAR: &str = "BIGCOMMERCE_STORE_HASH";

/// Public BigCommerce API endpoint.
pub const DEFAULT_API_BASE_URI: &str = "https://api.bigcommerce.com";

/// Provider-wide configuration.
///
/// Holds only what is shared by every resource under one store. Credentials
/// are deliberately absent: each resource instance carries its own.
///
/// # Thread Safety
///
/// `ProviderConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    store_hash: StoreHash,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ProviderConfig {
    /// Creates a new builder for constructing a `ProviderConfig`.
    #[must_use]
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::new()
    }

    /// Returns the store hash.
    #[must_use]
    pub const fn store_hash(&self) -> &StoreHash {
        &self.store_hash
    }

    /// Returns the API host override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the base URI requests are sent to.
    #[must_use]
    pub fn api_base_uri(&self) -> &str {
        self.api_host
            .as_ref()
            .map_or(DEFAULT_API_BASE_URI, HostUrl::base_uri)
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ProviderConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProviderConfig>();
};

/// Builder for constructing [`ProviderConfig`] instances.
///
/// `store_hash` is required. `api_host` defaults to the public API and
/// `user_agent_prefix` to none.
#[derive(Debug, Default)]
pub struct ProviderConfigBuilder {
    store_hash: Option<StoreHash>,
    api_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
}

impl ProviderConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store hash (required).
    #[must_use]
    pub fn store_hash(mut self, hash: StoreHash) -> Self {
        self.store_hash = Some(hash);
        self
    }

    /// Overrides the API host.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ProviderConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_hash` is not set.
    pub fn build(self) -> Result<ProviderConfig, ConfigError> {
        let store_hash = self.store_hash.ok_or(ConfigError::MissingRequiredField {
            field: "store_hash",
        })?;

        Ok(ProviderConfig {
            store_hash,
            api_host: self.api_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
