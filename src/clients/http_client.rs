//! HTTP client for BigCommerce API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the BigCommerce API.

use std::collections::HashMap;

use crate::auth::Credentials;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::ProviderConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the BigCommerce API.
///
/// The client handles:
/// - Base URI construction from the provider config
/// - Default headers including User-Agent and the `X-Auth-*` credentials
/// - Response parsing and error serialization
///
/// Each request is attempted exactly once.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_provider::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let client = HttpClient::new("/stores/abc123/v3", &credentials, &config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "hooks/42")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.bigcommerce.com`).
    base_uri: String,
    /// Base path (e.g., "/stores/abc123/v3").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client authenticated with the given credentials.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., "/stores/abc123/v3")
    /// * `credentials` - The client ID and access token to authenticate with
    /// * `config` - Provider configuration for the API host and user agent prefix
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying TLS client cannot be
    /// initialized.
    pub fn new(
        base_path: impl Into<String>,
        credentials: &Credentials,
        config: &ProviderConfig,
    ) -> Result<Self, HttpError> {
        let base_path = base_path.into();
        let base_uri = config.api_base_uri().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}BigCommerce Provider v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Auth-Client".to_string(),
            credentials.client_id.as_ref().to_string(),
        );
        default_headers.insert(
            "X-Auth-Token".to_string(),
            credentials.access_token.as_ref().to_string(),
        );

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri,
            base_path,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the BigCommerce API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "Sending BigCommerce API request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                // Keep unparseable bodies so they still reach the error message
                serde_json::json!({ "raw_body": body_text })
            })
        };

        let response = HttpResponse::new(code, res_headers, body);

        if let Some(limit) = response.rate_limit {
            tracing::debug!(
                requests_left = limit.requests_left,
                reset_ms = ?limit.time_reset_ms,
                "BigCommerce rate limit"
            );
        }

        if response.is_ok() {
            return Ok(response);
        }

        let message = Self::serialize_error(&response);
        tracing::debug!(code, path = %request.path, %message, "BigCommerce API request failed");

        Err(HttpError::Response(HttpResponseError {
            code,
            message,
            error_reference: response.request_id().map(String::from),
            body: response.body,
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response to a compact JSON summary.
    ///
    /// BigCommerce errors are problem documents (`status`, `title`, `type`,
    /// `detail`, `errors`); v2-style bodies may be a bare array of messages.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        error_body.insert("status".to_string(), serde_json::json!(response.code));
        for field in ["title", "detail", "errors", "raw_body"] {
            if let Some(value) = response.body.get(field) {
                error_body.insert(field.to_string(), value.clone());
            }
        }
        if response.body.is_array() {
            error_body.insert("errors".to_string(), response.body.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
