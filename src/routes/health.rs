use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult, response::ApiResponse, routes::ENDPOINTS, services::webhook_service,
    state::AppState,
};

pub const SERVICE_NAME: &str = "MoveDrop Channel API";

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub service: String,
    pub version: String,
    pub status: String,
    pub endpoints: Vec<String>,
    pub webhook_url: Option<String>,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service status and supported endpoints", body = HealthData),
        (status = 401, description = "Missing or invalid API key"),
    ),
    security(("api_key" = [])),
    tag = "Health"
)]
pub async fn status(State(state): State<AppState>) -> AppResult<Json<ApiResponse<HealthData>>> {
    let data = HealthData {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "ok".to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        webhook_url: webhook_service::current_webhook_url(&state).await?,
    };

    Ok(Json(ApiResponse::success(data)))
}
