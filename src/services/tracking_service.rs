use crate::{
    conversions::convert_tracked_order,
    dto::tracking::{TrackOrderRequest, TrackedOrder},
    error::{AppError, AppResult},
    response::ApiResponse,
    state::AppState,
};

/// Guest lookup by tracking id; the id is matched upper-cased.
pub async fn track_order(
    state: &AppState,
    request: TrackOrderRequest,
) -> AppResult<ApiResponse<TrackedOrder>> {
    let tracking_id = request
        .tracking_id
        .map(|id| id.trim().to_uppercase())
        .filter(|id| !id.is_empty())
        .ok_or(AppError::Validation("tracking_id_required"))?;

    let order = state
        .store
        .find_order_by_tracking_id(&tracking_id)
        .await?
        .ok_or(AppError::NotFound("order_not_found"))?;

    Ok(ApiResponse::success(convert_tracked_order(order)))
}
