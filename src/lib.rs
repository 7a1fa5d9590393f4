//! # BigCommerce Webhook Provider
//!
//! An infrastructure-as-code provider for managing BigCommerce webhook
//! subscriptions. A host orchestration runtime drives the lifecycle
//! (planning, diffing and state persistence); this crate supplies the schemas
//! and the create/read/update/delete callbacks, plus the REST client they use.
//!
//! ## Overview
//!
//! This crate provides:
//! - A [`provider::Provider`] with a configuration schema and a configure
//!   step resolving the store hash (falling back to `BIGCOMMERCE_STORE_HASH`)
//! - The `bigcommerce_webhook` resource and data source in [`provider::webhook`]
//! - Validated newtypes for the store hash, API credentials and host URL
//! - An async HTTP client authenticating with `X-Auth-Client`/`X-Auth-Token`
//! - A typed [`rest::Webhook`] resource with `find`, `save` and `delete`
//!
//! ## Quick Start
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
//!
//! ## Running Lifecycle Callbacks
//!
//! ```rust,ignore
//! use bigcommerce_provider::provider::{Provider, ResourceData};
//! use serde_json::json;
//!
//! let provider = Provider::new();
//! let meta = provider.configure(json!({"store_hash": "abc123"}).as_object().unwrap())?;
//!
//! let planned = json!({
//!     "client_id": "client-id",
//!     "access_token": "access-token",
//!     "scope": "store/order/created",
//!     "destination": "https://example.com/hooks/orders",
//!     "is_active": true,
//!     "header": [{"key": "X-Functions-Key", "value": "secret"}]
//! });
//!
//! let webhook = provider.resource("bigcommerce_webhook").unwrap();
//! let mut data = ResourceData::new(planned.as_object().unwrap().clone());
//! webhook.create(&mut data, &meta).await?;
//! println!("created webhook {}", data.id());
//! ```
//!
//! ## Using the REST Client Directly
//!
//! ```rust,ignore
//! use bigcommerce_provider::{AccessToken, ClientId, Credentials};
//! use bigcommerce_provider::clients::RestClient;
//! use bigcommerce_provider::rest::Webhook;
//!
//! let credentials = Credentials::new(
//!     config.store_hash().clone(),
//!     ClientId::new("client-id")?,
//!     AccessToken::new("access-token")?,
//! );
//! let client = RestClient::new(&credentials, &config)?;
//!
//! let webhook = Webhook::find(&client, 42).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is passed explicitly to every callback
//! - **Per-call clients**: Each callback builds a client from its own credentials
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod provider;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{
    AccessToken, ClientId, HostUrl, ProviderConfig, ProviderConfigBuilder, StoreHash,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RateLimit,
};

// Re-export provider types
pub use provider::{Diagnostic, Diagnostics, Provider, ResourceData, Severity};
