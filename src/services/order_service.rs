use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    conversions::{convert_create_payload, convert_order, convert_update_payload},
    dto::orders::{CreateOrderPayload, PartnerOrder, UpdateOrderPayload},
    error::{AppError, AppResult},
    models::{Order, OrderStatus},
    response::ApiResponse,
    routes::params::OrderListQuery,
    state::AppState,
};

pub const ORDER_PAGE_SIZE: u64 = 10;
pub const FALLBACK_TRACKING_PREFIX: &str = "MD";

const ORDER_NOT_FOUND: AppError = AppError::NotFound("Order not found");

pub async fn list_orders(
    state: &AppState,
    query: OrderListQuery,
) -> AppResult<ApiResponse<Vec<PartnerOrder>>> {
    let window = query.pagination.normalize(ORDER_PAGE_SIZE);

    let status = query
        .status
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let status = match status {
        Some(raw) => match OrderStatus::parse(raw) {
            Some(status) => Some(status),
            // No stored order can carry an unknown status.
            None => return Ok(ApiResponse::paginated(Vec::new(), window.meta(0))),
        },
        None => None,
    };

    let page = state.store.list_orders(status, window.request()).await?;
    let meta = window.meta(page.total);
    let items = page.items.into_iter().map(convert_order).collect();
    Ok(ApiResponse::paginated(items, meta))
}

pub async fn get_order(state: &AppState, id: &str) -> AppResult<ApiResponse<PartnerOrder>> {
    let order = find_order(state, id).await?;
    Ok(ApiResponse::success(convert_order(order)))
}

/// Create a pending order on behalf of the partner.
///
/// Once the payload has parsed, only a failed insert can make this fail:
/// a broken tracking-id generator falls back to [`fallback_tracking_id`].
pub async fn create_order(
    state: &AppState,
    payload: CreateOrderPayload,
) -> AppResult<ApiResponse<PartnerOrder>> {
    let tracking_id = match state.store.generate_tracking_id().await {
        Ok(id) if !id.trim().is_empty() => id,
        Ok(_) => {
            tracing::warn!("tracking id generator returned an empty id; using local fallback");
            fallback_tracking_id(Utc::now())
        }
        Err(err) => {
            tracing::warn!(error = %err, "tracking id generator failed; using local fallback");
            fallback_tracking_id(Utc::now())
        }
    };

    let order = state
        .store
        .insert_order(convert_create_payload(payload, tracking_id))
        .await?;

    tracing::info!(
        order_id = %order.id,
        tracking_id = %order.tracking_id,
        "partner order created"
    );

    Ok(ApiResponse::with_message("Order created", convert_order(order)))
}

pub async fn update_order(
    state: &AppState,
    id: &str,
    payload: UpdateOrderPayload,
) -> AppResult<ApiResponse<PartnerOrder>> {
    let changes = convert_update_payload(payload).map_err(|err| {
        tracing::debug!(error = %err, "rejected order update");
        AppError::Validation("invalid_status")
    })?;
    let id = parse_order_id(id)?;

    if changes.is_empty() {
        let order = match state.store.find_order(id).await? {
            Some(o) => o,
            None => return Err(ORDER_NOT_FOUND),
        };
        return Ok(ApiResponse::with_message("Order updated", convert_order(order)));
    }

    let order = match state.store.update_order(id, changes).await? {
        Some(o) => o,
        None => return Err(ORDER_NOT_FOUND),
    };

    tracing::info!(
        order_id = %order.id,
        status = order.status.as_str(),
        tracking_id = %order.tracking_id,
        "partner order updated"
    );

    Ok(ApiResponse::with_message("Order updated", convert_order(order)))
}

/// Local tracking id: fixed prefix plus the last six digits of the epoch
/// milliseconds. Two calls in the same millisecond collide; the unique
/// index on `tracking_id` then rejects the second insert.
pub fn fallback_tracking_id(now: DateTime<Utc>) -> String {
    let suffix = now.timestamp_millis().rem_euclid(1_000_000);
    format!("{FALLBACK_TRACKING_PREFIX}{suffix:06}")
}

async fn find_order(state: &AppState, id: &str) -> AppResult<Order> {
    let id = parse_order_id(id)?;
    match state.store.find_order(id).await? {
        Some(o) => Ok(o),
        None => Err(ORDER_NOT_FOUND),
    }
}

fn parse_order_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ORDER_NOT_FOUND)
}
