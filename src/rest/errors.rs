//! Resource-specific error types for REST API operations.
//!
//! This module maps HTTP failures onto resource semantics:
//!
//! - **404**: [`ResourceError::NotFound`] - Resource doesn't exist
//! - **422**: [`ResourceError::ValidationFailed`] - Validation errors from the API
//! - **Other 4xx/5xx**: [`ResourceError::Http`] - Wrapped HTTP error
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_provider::rest::{ResourceError, Webhook};
//!
//! match Webhook::find(&client, 123).await {
//!     Ok(webhook) => println!("Found: {}", webhook.scope),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use bigcommerce_provider::rest::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "Webhook",
///     id: "123".to_string(),
/// };
/// assert_eq!(error.to_string(), "Webhook with id 123 not found");
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The type name of the resource (e.g., "Webhook").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// Validation failed for the resource (HTTP 422).
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// A map of field names to error messages.
        errors: HashMap<String, Vec<String>>,
        /// The request ID for debugging (from X-Request-Id header).
        request_id: Option<String>,
    },

    /// A stored identifier is not a valid numeric resource ID.
    #[error("Invalid {resource} id '{id}': expected a positive integer")]
    InvalidId {
        /// The type name of the resource.
        resource: &'static str,
        /// The identifier that failed to parse.
        id: String,
    },

    /// A payload could not be encoded for, or decoded from, the API.
    #[error("Failed to serialize {resource} payload: {source}")]
    Serialization {
        /// The type name of the resource.
        resource: &'static str,
        /// The underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Maps a REST client error onto resource semantics.
    ///
    /// 404 and 422 responses become [`NotFound`](Self::NotFound) and
    /// [`ValidationFailed`](Self::ValidationFailed); every other error is
    /// passed through unchanged.
    #[must_use]
    pub fn from_rest_error(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(HttpError::Response(response)) => match response.code {
                404 => Self::NotFound {
                    resource,
                    id: id.unwrap_or("unknown").to_string(),
                },
                422 => Self::ValidationFailed {
                    errors: parse_validation_errors(&response.body),
                    request_id: response.error_reference,
                },
                _ => Self::Http(HttpError::Response(response)),
            },
            RestError::Http(other) => Self::Http(other),
            other @ RestError::InvalidPath { .. } => Self::Rest(other),
        }
    }

    /// Returns `true` if this error reports a missing resource.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Parses validation errors from a BigCommerce problem document.
///
/// V3 validation failures carry an `errors` object keyed by field, whose
/// values are a message or a list of messages:
///
/// ```json
/// {
///   "status": 422,
///   "title": "JSON data is missing or invalid",
///   "errors": { "destination": "must use https" }
/// }
/// ```
///
/// A bare `errors` list, or only a `title`, is reported under `base`.
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();

    match body.get("errors") {
        Some(serde_json::Value::Object(map)) => {
            for (field, messages) in map {
                let msgs: Vec<String> = match messages {
                    serde_json::Value::Array(arr) => arr
                        .iter()
                        .filter_map(|v| v.as_str().map(ToString::to_string))
                        .collect(),
                    serde_json::Value::String(s) => vec![s.clone()],
                    _ => vec![messages.to_string()],
                };
                result.insert(field.clone(), msgs);
            }
        }
        Some(serde_json::Value::Array(arr)) => {
            let msgs: Vec<String> = arr
                .iter()
                .filter_map(|v| v.as_str().map(ToString::to_string))
                .collect();
            if !msgs.is_empty() {
                result.insert("base".to_string(), msgs);
            }
        }
        _ => {}
    }

    if result.is_empty() {
        if let Some(title) = body.get("title").and_then(serde_json::Value::as_str) {
            result.insert("base".to_string(), vec![title.to_string()]);
        }
    }

    result
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
