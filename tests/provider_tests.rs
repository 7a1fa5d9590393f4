//! Integration tests for the provider's configuration and validation surface.

use bigcommerce_provider::provider::{AttributeType, Provider, Severity};
use bigcommerce_provider::{AccessToken, ClientId, Credentials, StoreHash};
use serde_json::{json, Map, Value};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

#[test]
fn test_configure_with_explicit_store_hash() {
    let provider = Provider::new();
    let config = provider
        .configure(&object(json!({"store_hash": "  store42 "})))
        .unwrap();

    assert_eq!(config.store_hash().as_ref(), "store42");
    assert_eq!(config.api_base_uri(), "https://api.bigcommerce.com");
}

#[test]
fn test_configure_rejects_unknown_arguments() {
    let provider = Provider::new();
    let diags = provider
        .configure(&object(json!({"store_hash": "store42", "region": "eu"})))
        .unwrap_err();

    let diag = diags.iter().next().unwrap();
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.summary, "Unsupported argument");
    assert_eq!(diag.attribute.as_deref(), Some("region"));
}

#[test]
fn test_provider_schema_declares_optional_store_hash() {
    let schema = Provider::schema();
    let store_hash = schema.get("store_hash").unwrap();

    assert!(store_hash.optional);
    assert!(!store_hash.required);
    assert_eq!(store_hash.attr_type, AttributeType::String);
    assert_eq!(schema.attributes().count(), 1);
}

#[test]
fn test_valid_resource_config_passes_validation() {
    let provider = Provider::new();
    let diags = provider.validate_resource_config(
        "bigcommerce_webhook",
        &object(json!({
            "client_id": "client",
            "access_token": "token",
            "scope": "store/order/created",
            "destination": "https://example.com/hooks",
            "is_active": true,
            "header": [{"key": "X-Key", "value": "v"}]
        })),
    );

    assert!(diags.is_empty(), "unexpected diagnostics: {diags}");
}

#[test]
fn test_resource_config_rejects_configured_id_and_bad_header() {
    let provider = Provider::new();
    let diags = provider.validate_resource_config(
        "bigcommerce_webhook",
        &object(json!({
            "id": "12",
            "client_id": "client",
            "access_token": "token",
            "scope": "store/order/created",
            "destination": "https://example.com/hooks",
            "is_active": "yes",
            "header": [{"key": "X-Key"}]
        })),
    );

    let attrs: Vec<_> = diags.iter().filter_map(|d| d.attribute.as_deref()).collect();
    assert_eq!(attrs, vec!["header.value", "id", "is_active"]);
}

#[test]
fn test_data_source_rejects_configured_computed_fields() {
    let provider = Provider::new();
    let diags = provider.validate_data_source_config(
        "bigcommerce_webhook",
        &object(json!({
            "id": "12",
            "client_id": "client",
            "access_token": "token",
            "scope": "store/order/created"
        })),
    );

    assert!(diags.has_error());
    let attrs: Vec<_> = diags.iter().filter_map(|d| d.attribute.as_deref()).collect();
    assert_eq!(attrs, vec!["scope"]);
}

#[test]
fn test_credentials_debug_output_is_masked() {
    let credentials = Credentials::new(
        StoreHash::new("abc123").unwrap(),
        ClientId::new("visible-client-id").unwrap(),
        AccessToken::new("very-secret-token").unwrap(),
    );

    let debug = format!("{credentials:?}");
    assert!(!debug.contains("visible-client-id"));
    assert!(!debug.contains("very-secret-token"));
}
