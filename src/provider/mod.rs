//! The provider contract the host runtime calls into.
//!
//! A [`Provider`] exposes a configuration schema, a configure step that
//! resolves the [`ProviderConfig`] handed to every callback, and registries
//! of [`Resource`]s and [`DataSource`]s keyed by type name.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_provider::provider::{Provider, ResourceData};
//! use serde_json::json;
//!
//! let provider = Provider::new();
//! let meta = provider.configure(json!({"store_hash": "abc123"}).as_object().unwrap())?;
//!
//! let resource = provider.resource("bigcommerce_webhook").unwrap();
//! let mut data = ResourceData::new(planned_config);
//! resource.create(&mut data, &meta).await?;
//! println!("created webhook {}", data.id());
//! ```

mod diagnostics;
mod resource_data;
mod schema;
pub mod webhook;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use resource_data::ResourceData;
pub use schema::{Attribute, AttributeType, Schema, REDACTED};

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::config::{ProviderConfig, StoreHash, STORE_HASH_ENV_VAR};

/// A manageable resource type with full lifecycle callbacks.
///
/// Callbacks receive the resource's [`ResourceData`] and the provider-wide
/// [`ProviderConfig`]. They report failure as [`Diagnostics`]; warnings that
/// do not fail the operation are logged.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Returns the attribute schema.
    fn schema(&self) -> Schema;

    /// Creates the remote object and records its identity.
    async fn create(&self, data: &mut ResourceData, meta: &ProviderConfig)
        -> Result<(), Diagnostics>;

    /// Refreshes state from the remote object. Clearing the identity tells
    /// the host the object is gone.
    async fn read(&self, data: &mut ResourceData, meta: &ProviderConfig) -> Result<(), Diagnostics>;

    /// Applies configuration changes to the remote object.
    async fn update(&self, data: &mut ResourceData, meta: &ProviderConfig)
        -> Result<(), Diagnostics>;

    /// Deletes the remote object and clears the identity.
    async fn delete(&self, data: &mut ResourceData, meta: &ProviderConfig)
        -> Result<(), Diagnostics>;
}

/// A read-only view of remote objects.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Returns the attribute schema.
    fn schema(&self) -> Schema;

    /// Populates computed attributes from the remote object.
    async fn read(&self, data: &mut ResourceData, meta: &ProviderConfig) -> Result<(), Diagnostics>;
}

/// The BigCommerce provider.
///
/// # Example
///
/// ```rust
/// use bigcommerce_provider::provider::Provider;
///
/// let provider = Provider::new();
/// assert!(provider.resource("bigcommerce_webhook").is_some());
/// assert!(provider.data_source("bigcommerce_webhook").is_some());
/// assert!(provider.resource("bigcommerce_product").is_none());
/// ```
pub struct Provider {
    resources: BTreeMap<&'static str, Box<dyn Resource>>,
    data_sources: BTreeMap<&'static str, Box<dyn DataSource>>,
}

impl Provider {
    /// Creates the provider with every resource and data source registered.
    #[must_use]
    pub fn new() -> Self {
        let mut resources: BTreeMap<&'static str, Box<dyn Resource>> = BTreeMap::new();
        resources.insert(webhook::TYPE_NAME, Box::new(webhook::WebhookResource));

        let mut data_sources: BTreeMap<&'static str, Box<dyn DataSource>> = BTreeMap::new();
        data_sources.insert(webhook::TYPE_NAME, Box::new(webhook::WebhookDataSource));

        Self {
            resources,
            data_sources,
        }
    }

    /// Returns the provider configuration schema.
    #[must_use]
    pub fn schema() -> Schema {
        Schema::new().attribute(
            "store_hash",
            Attribute::string()
                .optional()
                .description("The store hash. Defaults to the BIGCOMMERCE_STORE_HASH environment variable."),
        )
    }

    /// Looks up a resource type by name.
    #[must_use]
    pub fn resource(&self, name: &str) -> Option<&dyn Resource> {
        self.resources.get(name).map(AsRef::as_ref)
    }

    /// Looks up a data source type by name.
    #[must_use]
    pub fn data_source(&self, name: &str) -> Option<&dyn DataSource> {
        self.data_sources.get(name).map(AsRef::as_ref)
    }

    /// Returns the registered resource type names.
    pub fn resource_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resources.keys().copied()
    }

    /// Returns the registered data source type names.
    pub fn data_source_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.data_sources.keys().copied()
    }

    /// Resolves the provider configuration.
    ///
    /// `store_hash` comes from `config`, falling back to the
    /// `BIGCOMMERCE_STORE_HASH` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error diagnostic if the store hash is missing, empty or
    /// malformed, or if `config` does not match [`Provider::schema`].
    pub fn configure(&self, config: &Map<String, Value>) -> Result<ProviderConfig, Diagnostics> {
        configure_with(config, |name| std::env::var(name).ok())
    }

    /// Validates resource configuration against the named type's schema.
    ///
    /// Unknown type names produce an error diagnostic.
    #[must_use]
    pub fn validate_resource_config(&self, name: &str, config: &Map<String, Value>) -> Diagnostics {
        self.resource(name).map_or_else(
            || unknown_type("resource", name),
            |resource| resource.schema().validate(config),
        )
    }

    /// Validates data source configuration against the named type's schema.
    ///
    /// Unknown type names produce an error diagnostic.
    #[must_use]
    pub fn validate_data_source_config(
        &self,
        name: &str,
        config: &Map<String, Value>,
    ) -> Diagnostics {
        self.data_source(name).map_or_else(
            || unknown_type("data source", name),
            |data_source| data_source.schema().validate(config),
        )
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .field("data_sources", &self.data_sources.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn configure_with(
    config: &Map<String, Value>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ProviderConfig, Diagnostics> {
    Provider::schema().validate(config).into_result()?;

    let store_hash = config
        .get("store_hash")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(ToString::to_string)
        .or_else(|| env(STORE_HASH_ENV_VAR))
        .unwrap_or_default();

    if store_hash.trim().is_empty() {
        tracing::debug!("No store_hash in provider configuration or environment");
        return Err(Diagnostic::error("Missing store_hash from provider configuration")
            .with_detail(format!(
                "store_hash is a required parameter and must be defined, you can also use the {STORE_HASH_ENV_VAR} environment variable."
            ))
            .with_attribute("store_hash")
            .into());
    }

    let store_hash = StoreHash::new(store_hash).map_err(|e| {
        Diagnostics::from(Diagnostic::error(e.to_string()).with_attribute("store_hash"))
    })?;

    Ok(ProviderConfig::builder().store_hash(store_hash).build()?)
}

fn unknown_type(kind: &str, name: &str) -> Diagnostics {
    Diagnostic::error(format!("Unknown {kind} type"))
        .with_detail(format!("The provider does not support {kind} type \"{name}\"."))
        .into()
}
