//! Error types for provider configuration.
//!
//! This module contains error types used when building configuration values
//! and credentials.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_provider::{StoreHash, ConfigError};
//!
//! let result = StoreHash::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyStoreHash)));
//! ```

use thiserror::Error;

/// Errors that can occur during provider configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Store hash cannot be empty.
    #[error("Store hash cannot be empty. Set store_hash in the provider configuration or the BIGCOMMERCE_STORE_HASH environment variable.")]
    EmptyStoreHash,

    /// Store hash contains characters that cannot appear in an API path.
    #[error("Invalid store hash '{hash}'. Expected only ASCII letters and digits.")]
    InvalidStoreHash {
        /// The invalid hash that was provided.
        hash: String,
    },

    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide a valid BigCommerce API client ID.")]
    EmptyClientId,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid BigCommerce API access token.")]
    EmptyAccessToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.bigcommerce.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
