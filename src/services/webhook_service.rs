use crate::{
    dto::webhooks::{RegisterWebhookPayload, WebhookRegistration},
    error::AppResult,
    models::SettingKey,
    response::ApiResponse,
    state::AppState,
};

/// Store the partner callback URL. The value is not validated; registering
/// again overwrites the previous URL.
pub async fn register_webhook(
    state: &AppState,
    payload: RegisterWebhookPayload,
) -> AppResult<ApiResponse<WebhookRegistration>> {
    let webhook_url = payload.resolved_url();
    state
        .store
        .upsert_setting(SettingKey::MovedropWebhookUrl, &webhook_url)
        .await?;

    tracing::info!(webhook_url = %webhook_url, "partner webhook registered");

    Ok(ApiResponse::with_message(
        "Webhook registered",
        WebhookRegistration { webhook_url },
    ))
}

pub async fn current_webhook_url(state: &AppState) -> AppResult<Option<String>> {
    let url = state
        .store
        .get_setting(SettingKey::MovedropWebhookUrl)
        .await?
        .filter(|url| !url.is_empty());
    Ok(url)
}
