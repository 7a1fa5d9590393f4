//! Per-resource API credentials.
//!
//! This module provides the [`Credentials`] type: the store a webhook lives
//! under plus the client ID / access token pair that authorizes calls to it.

use crate::config::{AccessToken, ClientId, StoreHash};

/// Credentials for authenticated BigCommerce API calls.
///
/// Credentials belong to a resource instance rather than the provider, so
/// two webhooks under one store may authenticate with different API accounts.
/// A fresh client is built from these for every lifecycle call.
///
/// # Thread Safety
///
/// `Credentials` is `Send + Sync`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_provider::{AccessToken, ClientId, Credentials, StoreHash};
///
/// let credentials = Credentials::new(
///     StoreHash::new("abc123").unwrap(),
///     ClientId::new("client-id").unwrap(),
///     AccessToken::new("access-token").unwrap(),
/// );
///
/// assert_eq!(credentials.store_hash.as_ref(), "abc123");
/// // Secrets never leak through Debug
/// assert!(!format!("{credentials:?}").contains("access-token"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    /// The store the credentials are scoped to.
    pub store_hash: StoreHash,

    /// The API account client ID (sent as `X-Auth-Client`).
    pub client_id: ClientId,

    /// The API account access token (sent as `X-Auth-Token`).
    pub access_token: AccessToken,
}

impl Credentials {
    /// Creates a new set of credentials.
    #[must_use]
    pub const fn new(store_hash: StoreHash, client_id: ClientId, access_token: AccessToken) -> Self {
        Self {
            store_hash,
            client_id,
            access_token,
        }
    }
}

// Verify Credentials is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credentials>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(client_id: &str, token: &str) -> Credentials {
        Credentials::new(
            StoreHash::new("store1").unwrap(),
            ClientId::new(client_id).unwrap(),
            AccessToken::new(token).unwrap(),
        )
    }

    #[test]
    fn test_debug_masks_secrets() {
        let debug = format!("{:?}", credentials("client-xyz", "token-xyz"));
        assert!(debug.contains("store1"));
        assert!(!debug.contains("client-xyz"));
        assert!(!debug.contains("token-xyz"));
    }
}
