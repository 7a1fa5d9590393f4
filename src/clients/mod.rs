//! HTTP client types for BigCommerce API communication.
//!
//! This module provides the HTTP layer for making authenticated requests to
//! the BigCommerce API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`RateLimit`]: Parsed `X-Rate-Limit-*` headers
//! - [`rest::RestClient`]: Store-scoped REST client for the v3 API
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_provider::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new("/stores/abc123/v3", &credentials, &config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "hooks/42")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Failure Behavior
//!
//! Requests are attempted once. Non-2xx responses become
//! [`HttpError::Response`]; recovery is left to the caller (for the
//! provider, the host runtime's next apply).

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, RateLimit};

pub use rest::{RestClient, RestError};
