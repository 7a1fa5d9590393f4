//! Webhook resource implementation.
//!
//! This module provides the [`Webhook`] resource: a subscription that makes
//! BigCommerce POST event notifications to a destination URL whenever an
//! event matching its scope occurs.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_provider::rest::Webhook;
//! use std::collections::HashMap;
//!
//! // Create a webhook
//! let webhook = Webhook {
//!     scope: "store/order/created".to_string(),
//!     destination: "https://example.com/hooks/orders".to_string(),
//!     is_active: true,
//!     headers: HashMap::from([("X-Functions-Key".to_string(), "secret".to_string())]),
//!     ..Default::default()
//! };
//! let saved = webhook.save(&client).await?;
//!
//! // Find it again
//! let found = Webhook::find(&client, saved.id.unwrap()).await?;
//!
//! // Delete it
//! Webhook::delete(&client, saved.id.unwrap()).await?;
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::clients::RestClient;
use crate::rest::ResourceError;

/// A webhook subscription in a BigCommerce store.
///
/// # Fields
///
/// ## Read-Only Fields
/// - `id` - The unique identifier issued at creation
/// - `client_id` - The API account that owns the webhook
/// - `store_hash` - The store the webhook belongs to
/// - `created_at` / `updated_at` - Timestamps (unix seconds on the wire)
///
/// ## Writable Fields
/// - `scope` - The event topic (e.g., `store/order/created`)
/// - `destination` - The URL notifications are POSTed to
/// - `is_active` - Whether the webhook fires
/// - `headers` - Custom headers sent with each notification
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Webhook {
    /// The unique identifier of the webhook.
    /// Read-only field.
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,

    /// The event topic that triggers the webhook.
    pub scope: String,

    /// The URL notifications are sent to.
    pub destination: String,

    /// Whether the webhook is active.
    pub is_active: bool,

    /// Custom headers included in each notification.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub headers: HashMap<String, String>,

    /// The client ID of the API account that created the webhook.
    /// Read-only field.
    #[serde(default, skip_serializing)]
    pub client_id: Option<String>,

    /// The store the webhook belongs to.
    /// Read-only field.
    #[serde(default, skip_serializing)]
    pub store_hash: Option<String>,

    /// When the webhook was created.
    /// Read-only field.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "chrono::serde::ts_seconds_option::deserialize"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// When the webhook was last updated.
    /// Read-only field.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "chrono::serde::ts_seconds_option::deserialize"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Webhook {
    /// Resource name used in error messages.
    pub const NAME: &'static str = "Webhook";

    /// Collection path relative to the store's v3 base path.
    pub const PATH: &'static str = "hooks";

    /// Parses a stored identifier into a webhook ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidId`] unless `id` is a positive integer.
    pub fn parse_id(id: &str) -> Result<u64, ResourceError> {
        match id.trim().parse::<u64>() {
            Ok(parsed) if parsed > 0 => Ok(parsed),
            _ => Err(ResourceError::InvalidId {
                resource: Self::NAME,
                id: id.to_string(),
            }),
        }
    }

    /// Fetches a webhook by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if no webhook with that ID is
    /// visible to the client's credentials, or any other request error.
    pub async fn find(client: &RestClient, id: u64) -> Result<Self, ResourceError> {
        let id_str = id.to_string();
        let response = client
            .get(&Self::member_path(id))
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(&id_str)))?;

        Self::decode(response.data())
    }

    /// Creates the webhook if it has no ID, otherwise replaces it in place.
    ///
    /// Returns the webhook as stored remotely.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] when the API rejects the
    /// payload, [`ResourceError::NotFound`] when updating a missing webhook,
    /// or any other request error.
    pub async fn save(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let body = serde_json::to_value(self).map_err(|source| ResourceError::Serialization {
            resource: Self::NAME,
            source,
        })?;

        let response = match self.id {
            None => client
                .post(Self::PATH, body)
                .await
                .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, None))?,
            Some(id) => {
                let id_str = id.to_string();
                client
                    .put(&Self::member_path(id), body)
                    .await
                    .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(&id_str)))?
            }
        };

        Self::decode(response.data())
    }

    /// Deletes a webhook by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the webhook does not exist, or
    /// any other request error.
    pub async fn delete(client: &RestClient, id: u64) -> Result<(), ResourceError> {
        let id_str = id.to_string();
        client
            .delete(&Self::member_path(id))
            .await
            .map_err(|e| ResourceError::from_rest_error(e, Self::NAME, Some(&id_str)))?;
        Ok(())
    }

    fn member_path(id: u64) -> String {
        format!("{}/{id}", Self::PATH)
    }

    fn decode(data: &serde_json::Value) -> Result<Self, ResourceError> {
        Self::deserialize(data).map_err(|source| ResourceError::Serialization {
            resource: Self::NAME,
            source,
        })
    }
}

/// Treats a JSON `null` header map as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HashMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialization_omits_read_only_fields() {
        let webhook = Webhook {
            id: Some(12345),
            scope: "store/order/created".to_string(),
            destination: "https://example.com/hooks".to_string(),
            is_active: true,
            headers: HashMap::from([("X-Functions-Key".to_string(), "abc".to_string())]),
            client_id: Some("client".to_string()),
            store_hash: Some("abc123".to_string()),
            created_at: Some(DateTime::from_timestamp(1_700_000_000, 0).unwrap()),
            updated_at: None,
        };

        let value = serde_json::to_value(&webhook).unwrap();
        assert_eq!(
            value,
            json!({
                "scope": "store/order/created",
                "destination": "https://example.com/hooks",
                "is_active": true,
                "headers": {"X-Functions-Key": "abc"}
            })
        );
    }

    #[test]
    fn test_deserialization_from_api_response() {
        let webhook: Webhook = serde_json::from_value(json!({
            "id": 18048287,
            "client_id": "m9r6keqmo7h7f23btnpwernbez1kglkl",
            "store_hash": "sftg45fsd",
            "created_at": 1_561_488_106,
            "updated_at": 1_561_488_106,
            "scope": "store/order/*",
            "destination": "https://665b65a6.ngrok.io/webhooks",
            "is_active": true,
            "headers": {"custom": "string"}
        }))
        .unwrap();

        assert_eq!(webhook.id, Some(18_048_287));
        assert_eq!(webhook.scope, "store/order/*");
        assert!(webhook.is_active);
        assert_eq!(webhook.headers.get("custom"), Some(&"string".to_string()));
        assert_eq!(webhook.store_hash.as_deref(), Some("sftg45fsd"));
        assert_eq!(webhook.created_at.unwrap().timestamp(), 1_561_488_106);
    }

    #[test]
    fn test_deserialization_tolerates_null_headers() {
        let webhook: Webhook = serde_json::from_value(json!({
            "id": 1,
            "scope": "store/cart/created",
            "destination": "https://example.com",
            "is_active": false,
            "headers": null
        }))
        .unwrap();

        assert!(webhook.headers.is_empty());
        assert!(webhook.created_at.is_none());
    }

    #[test]
    fn test_parse_id_accepts_positive_integers() {
        assert_eq!(Webhook::parse_id("42").unwrap(), 42);
        assert_eq!(Webhook::parse_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn test_parse_id_rejects_malformed_ids() {
        for bad in ["", "0", "-1", "abc", "12abc", "1.5"] {
            assert!(
                matches!(Webhook::parse_id(bad), Err(ResourceError::InvalidId { .. })),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_member_path() {
        assert_eq!(Webhook::member_path(99), "hooks/99");
    }
}
