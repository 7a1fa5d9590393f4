//! The `bigcommerce_webhook` resource and data source.
//!
//! Both authenticate with per-instance credentials (`client_id` and
//! `access_token`) against the store named in the provider configuration,
//! and map between the declarative attributes and the [`Webhook`] API type.

mod data_source;
pub mod headers;
mod resource;

pub use data_source::WebhookDataSource;
pub use headers::HeaderPair;
pub use resource::WebhookResource;

use crate::auth::Credentials;
use crate::clients::RestClient;
use crate::config::{AccessToken, ClientId, ProviderConfig};
use crate::provider::{Attribute, Diagnostic, Diagnostics, ResourceData, Schema};
use crate::rest::Webhook;

/// Type name of the webhook resource and data source.
pub const TYPE_NAME: &str = "bigcommerce_webhook";

/// Adds the credential attributes shared by the resource and data source.
fn with_credentials(schema: Schema) -> Schema {
    schema
        .attribute(
            "client_id",
            Attribute::string()
                .required()
                .sensitive()
                .description("Client ID of the API account that owns the webhook."),
        )
        .attribute(
            "access_token",
            Attribute::string()
                .required()
                .sensitive()
                .description("Access token of the API account that owns the webhook."),
        )
}

/// Element schema of the `header` set.
fn header_element(computed: bool) -> Schema {
    let field = |description| {
        let attr = Attribute::string().description(description);
        if computed {
            attr.computed()
        } else {
            attr.required()
        }
    };
    Schema::new()
        .attribute("key", field("Header name."))
        .attribute("value", field("Header value."))
}

/// Builds credentials from raw attribute values.
fn credentials_from(
    client_id: Option<&str>,
    access_token: Option<&str>,
    meta: &ProviderConfig,
) -> Result<Credentials, Diagnostics> {
    let client_id = ClientId::new(client_id.unwrap_or_default())
        .map_err(|e| Diagnostic::error(e.to_string()).with_attribute("client_id"))?;
    let access_token = AccessToken::new(access_token.unwrap_or_default())
        .map_err(|e| Diagnostic::error(e.to_string()).with_attribute("access_token"))?;

    Ok(Credentials::new(
        meta.store_hash().clone(),
        client_id,
        access_token,
    ))
}

/// Builds credentials from the current attribute values.
fn current_credentials(
    data: &ResourceData,
    meta: &ProviderConfig,
) -> Result<Credentials, Diagnostics> {
    credentials_from(
        data.get_str("client_id"),
        data.get_str("access_token"),
        meta,
    )
}

fn rest_client(credentials: &Credentials, meta: &ProviderConfig) -> Result<RestClient, Diagnostics> {
    Ok(RestClient::new(credentials, meta)?)
}

/// Parses the stored identity into a webhook ID.
fn webhook_id(data: &ResourceData) -> Result<u64, Diagnostics> {
    Webhook::parse_id(data.id())
        .map_err(|e| Diagnostic::error(e.to_string()).with_attribute("id").into())
}

fn required_str<'a>(data: &'a ResourceData, key: &str) -> Result<&'a str, Diagnostic> {
    data.get_str(key).ok_or_else(|| missing(key))
}

fn missing(key: &str) -> Diagnostic {
    Diagnostic::error("Missing required argument")
        .with_detail(format!(
            "The argument \"{key}\" is required, but no definition was found."
        ))
        .with_attribute(key)
}

/// Maps the declarative attributes onto a webhook request.
fn webhook_from_data(data: &ResourceData) -> Result<Webhook, Diagnostics> {
    let scope = required_str(data, "scope")?.to_string();
    let destination = required_str(data, "destination")?.to_string();
    let is_active = data.get_bool("is_active").ok_or_else(|| missing("is_active"))?;
    let pairs = headers::pairs_from_values(data.get_set("header"))?;

    Ok(Webhook {
        scope,
        destination,
        is_active,
        headers: headers::to_map(pairs),
        ..Default::default()
    })
}

/// Maps a webhook from the API back onto the declarative attributes.
fn set_webhook_data(webhook: &Webhook, data: &mut ResourceData) {
    data.set("scope", webhook.scope.clone());
    data.set("destination", webhook.destination.clone());
    data.set("is_active", webhook.is_active);
    data.set(
        "header",
        headers::pairs_to_value(&headers::from_map(&webhook.headers)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreHash;
    use serde_json::{json, Map, Value};

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn meta() -> ProviderConfig {
        ProviderConfig::builder()
            .store_hash(StoreHash::new("abc123").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_webhook_from_data_collapses_duplicate_headers() {
        let data = ResourceData::new(object(json!({
            "scope": "store/order/created",
            "destination": "https://example.com/hooks",
            "is_active": true,
            "header": [
                {"key": "X-Key", "value": "one"},
                {"key": "X-Key", "value": "two"}
            ]
        })));

        let webhook = webhook_from_data(&data).unwrap();
        assert_eq!(webhook.id, None);
        assert_eq!(webhook.scope, "store/order/created");
        assert!(webhook.is_active);
        assert_eq!(webhook.headers.len(), 1);
        assert_eq!(webhook.headers["X-Key"], "two");
    }

    #[test]
    fn test_webhook_from_data_requires_is_active() {
        let data = ResourceData::new(object(json!({
            "scope": "store/order/created",
            "destination": "https://example.com/hooks"
        })));

        let diags = webhook_from_data(&data).unwrap_err();
        assert_eq!(
            diags.iter().next().unwrap().attribute.as_deref(),
            Some("is_active")
        );
    }

    #[test]
    fn test_set_webhook_data_writes_all_fields() {
        let webhook = Webhook {
            id: Some(9),
            scope: "store/cart/*".to_string(),
            destination: "https://example.com".to_string(),
            is_active: false,
            headers: std::collections::HashMap::from([("k".to_string(), "v".to_string())]),
            ..Default::default()
        };
        let mut data = ResourceData::new(Map::new());
        set_webhook_data(&webhook, &mut data);

        assert_eq!(data.get_str("scope"), Some("store/cart/*"));
        assert_eq!(data.get_bool("is_active"), Some(false));
        assert_eq!(data.get_set("header"), &[json!({"key": "k", "value": "v"})]);
    }

    #[test]
    fn test_credentials_use_store_from_meta() {
        let credentials = credentials_from(Some("client"), Some("token"), &meta()).unwrap();
        assert_eq!(credentials.store_hash.as_ref(), "abc123");
    }

    #[test]
    fn test_empty_credentials_are_rejected() {
        let diags = credentials_from(Some(""), Some("token"), &meta()).unwrap_err();
        assert_eq!(
            diags.iter().next().unwrap().attribute.as_deref(),
            Some("client_id")
        );

        let diags = credentials_from(Some("client"), None, &meta()).unwrap_err();
        assert_eq!(
            diags.iter().next().unwrap().attribute.as_deref(),
            Some("access_token")
        );
    }

    #[test]
    fn test_malformed_id_is_an_error() {
        let data = ResourceData::from_state(object(json!({"id": "not-a-number"})));
        let diags = webhook_id(&data).unwrap_err();

        assert!(diags.has_error());
        assert!(diags.to_string().contains("not-a-number"));
    }
}
