//! REST resources for the BigCommerce v3 API.
//!
//! This module provides typed resources on top of the
//! [`RestClient`](crate::clients::RestClient) and the error mapping that
//! turns HTTP failures into resource semantics.
//!
//! # Key Types
//!
//! - [`Webhook`]: Webhook subscriptions with `find`, `save`, and `delete`
//! - [`ResourceError`]: Error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_provider::clients::RestClient;
//! use bigcommerce_provider::rest::Webhook;
//!
//! let client = RestClient::new(&credentials, &config)?;
//! let webhook = Webhook::find(&client, 42).await?;
//! println!("{} -> {}", webhook.scope, webhook.destination);
//! ```

mod errors;
mod webhook;

pub use errors::ResourceError;
pub use webhook::Webhook;
