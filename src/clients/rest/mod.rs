//! REST API client for the BigCommerce v3 API.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that scopes every request to a
//! store (`/stores/{store_hash}/v3`) and normalizes resource paths.
//!
//! # Overview
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `put()`, `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_provider::clients::RestClient;
//!
//! let client = RestClient::new(&credentials, &config)?;
//! let response = client.get("hooks/42").await?;
//! println!("Webhook: {}", response.data());
//! ```
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/hooks` -> `hooks`
//! - Trailing slashes are stripped: `hooks/` -> `hooks`
//! - Empty paths are rejected with [`RestError::InvalidPath`]

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
