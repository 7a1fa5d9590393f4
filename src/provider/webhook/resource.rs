use async_trait::async_trait;

use super::{
    current_credentials, credentials_from, header_element, rest_client, set_webhook_data,
    webhook_from_data, webhook_id, with_credentials, TYPE_NAME,
};
use crate::config::ProviderConfig;
use crate::provider::{Attribute, Diagnostic, Diagnostics, Resource, ResourceData, Schema};
use crate::rest::{ResourceError, Webhook};

/// Lifecycle callbacks for the `bigcommerce_webhook` resource.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebhookResource;

#[async_trait]
impl Resource for WebhookResource {
    fn schema(&self) -> Schema {
        let schema = Schema::new()
            .with_description("Manages a BigCommerce webhook subscription.")
            .attribute("id", Attribute::string().computed())
            .attribute(
                "scope",
                Attribute::string()
                    .required()
                    .description("Event topic that triggers the webhook, e.g. store/order/created."),
            )
            .attribute(
                "destination",
                Attribute::string()
                    .required()
                    .description("URL notifications are sent to."),
            )
            .attribute(
                "is_active",
                Attribute::bool()
                    .required()
                    .description("Whether the webhook fires."),
            )
            .attribute(
                "header",
                Attribute::set(header_element(false))
                    .optional()
                    .description("Custom headers sent with each notification."),
            );
        with_credentials(schema)
    }

    async fn create(
        &self,
        data: &mut ResourceData,
        meta: &ProviderConfig,
    ) -> Result<(), Diagnostics> {
        let client = rest_client(&current_credentials(data, meta)?, meta)?;
        let webhook = webhook_from_data(data)?;

        tracing::debug!(
            resource = TYPE_NAME,
            scope = %webhook.scope,
            destination = %webhook.destination,
            "Creating webhook"
        );

        let created = webhook.save(&client).await?;
        data.set_id(created_id(&created)?.to_string());
        Ok(())
    }

    async fn read(&self, data: &mut ResourceData, meta: &ProviderConfig) -> Result<(), Diagnostics> {
        let id = webhook_id(data)?;
        let client = rest_client(&current_credentials(data, meta)?, meta)?;

        match Webhook::find(&client, id).await {
            Ok(webhook) => {
                set_webhook_data(&webhook, data);
                Ok(())
            }
            Err(e @ ResourceError::NotFound { .. }) => {
                tracing::warn!(resource = TYPE_NAME, id, error = %e, "Webhook no longer exists, removing from state");
                data.set_id("");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(
        &self,
        data: &mut ResourceData,
        meta: &ProviderConfig,
    ) -> Result<(), Diagnostics> {
        let id = webhook_id(data)?;

        if data.has_change("client_id") || data.has_change("access_token") {
            let (old_client_id, _) = data.get_change("client_id");
            let (old_access_token, _) = data.get_change("access_token");
            let old_credentials = credentials_from(
                old_client_id.and_then(serde_json::Value::as_str),
                old_access_token.and_then(serde_json::Value::as_str),
                meta,
            )?;
            let new_credentials = current_credentials(data, meta)?;
            let webhook = webhook_from_data(data)?;

            tracing::debug!(
                resource = TYPE_NAME,
                id,
                "Credentials changed, recreating webhook under the new API account"
            );

            let old_client = rest_client(&old_credentials, meta)?;
            Webhook::delete(&old_client, id).await?;

            let new_client = rest_client(&new_credentials, meta)?;
            let created = webhook.save(&new_client).await?;
            data.set_id(created_id(&created)?.to_string());
        } else if ["scope", "destination", "is_active", "header"]
            .iter()
            .any(|key| data.has_change(key))
        {
            let client = rest_client(&current_credentials(data, meta)?, meta)?;
            let webhook = Webhook {
                id: Some(id),
                ..webhook_from_data(data)?
            };

            tracing::debug!(resource = TYPE_NAME, id, "Updating webhook");
            webhook.save(&client).await?;
        }

        self.read(data, meta).await
    }

    async fn delete(
        &self,
        data: &mut ResourceData,
        meta: &ProviderConfig,
    ) -> Result<(), Diagnostics> {
        let id = webhook_id(data)?;
        let client = rest_client(&current_credentials(data, meta)?, meta)?;

        tracing::debug!(resource = TYPE_NAME, id, "Deleting webhook");
        Webhook::delete(&client, id).await?;

        data.set_id("");
        Ok(())
    }
}

fn created_id(webhook: &Webhook) -> Result<u64, Diagnostic> {
    webhook
        .id
        .ok_or_else(|| Diagnostic::error("BigCommerce returned a webhook without an id"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::AttributeType;

    #[test]
    fn test_schema_markers() {
        let schema = WebhookResource.schema();

        assert!(schema.get("id").unwrap().is_computed_only());
        for name in ["client_id", "access_token"] {
            let attr = schema.get(name).unwrap();
            assert!(attr.required && attr.sensitive, "{name} must be required and sensitive");
        }
        for name in ["scope", "destination", "is_active"] {
            assert!(schema.get(name).unwrap().required);
        }

        let header = schema.get("header").unwrap();
        assert!(header.optional);
        match &header.attr_type {
            AttributeType::Set(element) => {
                assert!(element.get("key").unwrap().required);
                assert!(element.get("value").unwrap().required);
            }
            other => panic!("header should be a set, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_read_with_malformed_id_fails_without_request() {
        let meta = ProviderConfig::builder()
            .store_hash(crate::config::StoreHash::new("abc123").unwrap())
            .api_host(crate::config::HostUrl::new("http://127.0.0.1:1").unwrap())
            .build()
            .unwrap();
        let mut state = serde_json::Map::new();
        state.insert("id".to_string(), "abc".into());
        state.insert("client_id".to_string(), "client".into());
        state.insert("access_token".to_string(), "token".into());
        let mut data = ResourceData::from_state(state);

        let diags = WebhookResource.read(&mut data, &meta).await.unwrap_err();
        assert_eq!(
            diags.iter().next().unwrap().attribute.as_deref(),
            Some("id")
        );
        assert_eq!(data.id(), "abc");
    }
}
