use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    dto::orders::{CreateOrderPayload, PartnerOrder, UpdateOrderPayload},
    error::AppResult,
    response::ApiResponse,
    routes::{
        json_body,
        params::{OrderListQuery, QueryPairs},
    },
    services::order_service,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/orders",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 10"),
        ("status" = Option<String>, Query, description = "Only orders with this status"),
    ),
    responses(
        (status = 200, description = "Orders, newest first", body = Vec<PartnerOrder>),
        (status = 401, description = "Missing or invalid API key"),
    ),
    security(("api_key" = [])),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<ApiResponse<Vec<PartnerOrder>>>> {
    let query = OrderListQuery::from_pairs(&pairs);
    let resp = order_service::list_orders(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderPayload,
    responses(
        (status = 201, description = "Order created", body = PartnerOrder),
        (status = 400, description = "Body is not valid JSON"),
        (status = 401, description = "Missing or invalid API key"),
    ),
    security(("api_key" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<ApiResponse<PartnerOrder>>)> {
    let payload: CreateOrderPayload = json_body(&body)?;
    let resp = order_service::create_order(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Single order", body = PartnerOrder),
        (status = 404, description = "Order not found"),
    ),
    security(("api_key" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<PartnerOrder>>> {
    let resp = order_service::get_order(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/orders/{id}",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    request_body = UpdateOrderPayload,
    responses(
        (status = 200, description = "Updated order", body = PartnerOrder),
        (status = 400, description = "Invalid body or unknown status"),
        (status = 404, description = "Order not found"),
    ),
    security(("api_key" = [])),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Json<ApiResponse<PartnerOrder>>> {
    let payload: UpdateOrderPayload = json_body(&body)?;
    let resp = order_service::update_order(&state, &id, payload).await?;
    Ok(Json(resp))
}
