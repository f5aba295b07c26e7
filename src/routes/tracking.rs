use axum::{Json, body::Bytes, extract::State};

use crate::{
    dto::tracking::{TrackOrderRequest, TrackedOrder},
    error::AppResult,
    response::ApiResponse,
    services::tracking_service,
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/track-order",
    request_body = TrackOrderRequest,
    responses(
        (status = 200, description = "Public order status", body = TrackedOrder),
        (status = 400, description = "tracking_id_required"),
        (status = 404, description = "order_not_found"),
    ),
    tag = "Tracking"
)]
pub async fn track_order(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ApiResponse<TrackedOrder>>> {
    // An unreadable body is treated as a missing tracking id.
    let request: TrackOrderRequest = serde_json::from_slice(&body).unwrap_or_default();
    let resp = tracking_service::track_order(&state, request).await?;
    Ok(Json(resp))
}
