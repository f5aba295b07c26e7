use axum::{Json, body::Bytes, extract::State};

use crate::{
    dto::webhooks::{RegisterWebhookPayload, WebhookRegistration},
    error::AppResult,
    response::ApiResponse,
    routes::json_body,
    services::webhook_service,
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/webhooks",
    request_body = RegisterWebhookPayload,
    responses(
        (status = 200, description = "Callback URL stored", body = WebhookRegistration),
        (status = 400, description = "Body is not valid JSON"),
    ),
    security(("api_key" = [])),
    tag = "Webhooks"
)]
pub async fn register_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ApiResponse<WebhookRegistration>>> {
    let payload: RegisterWebhookPayload = json_body(&body)?;
    let resp = webhook_service::register_webhook(&state, payload).await?;
    Ok(Json(resp))
}
