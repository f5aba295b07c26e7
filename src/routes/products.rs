use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    dto::products::PartnerProduct,
    error::AppResult,
    response::ApiResponse,
    routes::params::{Pagination, QueryPairs},
    services::catalog_service,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/products",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 10"),
    ),
    responses(
        (status = 200, description = "Active products, newest first", body = Vec<PartnerProduct>),
        (status = 401, description = "Missing or invalid API key"),
    ),
    security(("api_key" = [])),
    tag = "Catalog"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<ApiResponse<Vec<PartnerProduct>>>> {
    let query = Pagination::from_pairs(&pairs);
    let resp = catalog_service::list_products(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Single product", body = PartnerProduct),
        (status = 404, description = "Product not found"),
    ),
    security(("api_key" = [])),
    tag = "Catalog"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<PartnerProduct>>> {
    let resp = catalog_service::get_product(&state, &id).await?;
    Ok(Json(resp))
}
