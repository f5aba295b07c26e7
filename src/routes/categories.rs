use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    dto::categories::{CategoryListing, PartnerCategory},
    error::AppResult,
    routes::params::{Pagination, QueryPairs},
    services::catalog_service,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/categories",
    params(
        ("page" = Option<i64>, Query, description = "Page number; when absent the response is a flat array"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 100"),
    ),
    responses(
        (status = 200, description = "Categories by display order", body = Vec<PartnerCategory>),
        (status = 401, description = "Missing or invalid API key"),
    ),
    security(("api_key" = [])),
    tag = "Catalog"
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> AppResult<Json<CategoryListing>> {
    let query = Pagination::from_pairs(&pairs);
    let listing = catalog_service::list_categories(&state, query).await?;
    Ok(Json(listing))
}
