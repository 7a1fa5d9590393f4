//! REST client implementation for the BigCommerce v3 API.
//!
//! This module provides the [`RestClient`] type for making store-scoped REST
//! requests with automatic path normalization.

use crate::auth::Credentials;
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::ProviderConfig;

/// REST API client for the BigCommerce v3 API.
///
/// Every request is sent under `/stores/{store_hash}/v3` and authenticated
/// with the credentials the client was built from. Clients are cheap to
/// build and are constructed fresh for every lifecycle call.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_provider::clients::RestClient;
///
/// let client = RestClient::new(&credentials, &config)?;
///
/// let response = client.get("hooks/42").await?;
///
/// let body = serde_json::json!({"scope": "store/order/created", "destination": "https://example.com", "is_active": true});
/// let response = client.post("hooks", body).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the credentials' store.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be initialized.
    pub fn new(credentials: &Credentials, config: &ProviderConfig) -> Result<Self, RestError> {
        let base_path = format!(
            "/stores/{}/v3",
            urlencoding::encode(credentials.store_hash.as_ref())
        );
        let http_client = HttpClient::new(base_path, credentials, config)?;

        Ok(Self { http_client })
    }

    /// Returns the base path requests are sent under.
    #[must_use]
    pub fn base_path(&self) -> &str {
        self.http_client.base_path()
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(&self, path: &str) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None).await
    }

    /// Sends a POST request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body)).await
    }

    /// Sends a PUT request with a JSON body to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body)).await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None).await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);
        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// Strips leading and trailing `/` characters and rejects empty paths.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let path = path.trim_matches('/');

    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ClientId, StoreHash};

    fn create_test_credentials(store: &str) -> Credentials {
        Credentials::new(
            StoreHash::new(store).unwrap(),
            ClientId::new("client").unwrap(),
            AccessToken::new("token").unwrap(),
        )
    }

    fn create_test_config() -> ProviderConfig {
        ProviderConfig::builder()
            .store_hash(StoreHash::new("abc123").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_normalize_path_strips_slashes() {
        assert_eq!(normalize_path("/hooks").unwrap(), "hooks");
        assert_eq!(normalize_path("hooks/").unwrap(), "hooks");
        assert_eq!(normalize_path("//hooks/42//").unwrap(), "hooks/42");
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        assert!(matches!(
            normalize_path(""),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
        assert!(matches!(
            normalize_path("/"),
            Err(RestError::InvalidPath { path }) if path.is_empty()
        ));
    }

    #[test]
    fn test_rest_client_scopes_base_path_to_store() {
        let client = RestClient::new(&create_test_credentials("abc123"), &create_test_config())
            .unwrap();
        assert_eq!(client.base_path(), "/stores/abc123/v3");
    }

    #[test]
    fn test_rest_client_uses_credentials_store() {
        let client = RestClient::new(&create_test_credentials("other9"), &create_test_config())
            .unwrap();
        assert_eq!(client.base_path(), "/stores/other9/v3");
    }

    #[tokio::test]
    async fn test_empty_path_fails_before_sending() {
        let client = RestClient::new(&create_test_credentials("abc123"), &create_test_config())
            .unwrap();

        let result = client.get("/").await;
        assert!(matches!(result, Err(RestError::InvalidPath { .. })));
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
