//! HTTP-specific error types.
//!
//! This module contains error types for HTTP operations, including response
//! errors and request validation failures.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Requests are attempted exactly once; there is no retry error variant.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_provider::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The `message` field holds a compact JSON summary of the BigCommerce
/// problem document (`status`, `title`, `errors`, `error_reference`). The
/// full decoded body is kept in `body` for callers that need field-level
/// detail.
///
/// # Example
///
/// ```rust
/// use bigcommerce_provider::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"title":"Unauthorized"}"#.to_string(),
///     body: json!({"status": 401, "title": "Unauthorized"}),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), r#"{"title":"Unauthorized"}"#);
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// The decoded response body.
    pub body: serde_json::Value,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before a request is sent, for example when a POST or PUT has no
/// body.
///
/// # Example
///
/// ```rust
/// use bigcommerce_provider::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "post".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send data with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not accept a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"title":"The requested resource was not found"}"#.to_string(),
            body: json!({}),
            error_reference: None,
        };
        assert_eq!(
            error.to_string(),
            r#"{"title":"The requested resource was not found"}"#
        );
    }

    #[test]
    fn test_invalid_request_error_messages() {
        let missing = InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        };
        assert_eq!(missing.to_string(), "Cannot use put without specifying data.");

        let unexpected = InvalidHttpRequestError::UnexpectedBody {
            method: "delete".to_string(),
        };
        assert_eq!(unexpected.to_string(), "Cannot send data with delete.");
    }
}
