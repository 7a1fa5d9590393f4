use async_trait::async_trait;

use super::{
    current_credentials, header_element, rest_client, set_webhook_data, webhook_id,
    with_credentials,
};
use crate::config::ProviderConfig;
use crate::provider::{Attribute, DataSource, Diagnostics, ResourceData, Schema};
use crate::rest::Webhook;

/// Read-only lookup of a webhook by ID.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebhookDataSource;

#[async_trait]
impl DataSource for WebhookDataSource {
    fn schema(&self) -> Schema {
        let schema = Schema::new()
            .with_description("Provides information about a webhook.")
            .attribute("id", Attribute::string().required())
            .attribute("scope", Attribute::string().computed())
            .attribute("destination", Attribute::string().computed())
            .attribute("is_active", Attribute::bool().computed())
            .attribute("header", Attribute::set(header_element(true)).optional());
        with_credentials(schema)
    }

    /// Unlike the resource read, a missing webhook is an error here.
    async fn read(&self, data: &mut ResourceData, meta: &ProviderConfig) -> Result<(), Diagnostics> {
        let configured_id = data.get_str("id").unwrap_or_default().to_string();
        data.set_id(configured_id);

        let id = webhook_id(data)?;
        let client = rest_client(&current_credentials(data, meta)?, meta)?;

        let webhook = Webhook::find(&client, id).await?;
        set_webhook_data(&webhook, data);
        data.set_id(webhook.id.unwrap_or(id).to_string());
        Ok(())
    }
}
