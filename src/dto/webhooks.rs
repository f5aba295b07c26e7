use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RegisterWebhookPayload {
    pub webhook_url: Option<String>,
    pub url: Option<String>,
}

impl RegisterWebhookPayload {
    pub fn resolved_url(self) -> String {
        self.webhook_url.or(self.url).unwrap_or_default()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WebhookRegistration {
    pub webhook_url: String,
}
