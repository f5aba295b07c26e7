use uuid::Uuid;

use crate::{
    conversions::{convert_category, convert_product},
    dto::{categories::CategoryListing, products::PartnerProduct},
    error::{AppError, AppResult},
    response::ApiResponse,
    routes::params::Pagination,
    state::AppState,
};

pub const CATEGORY_PAGE_SIZE: u64 = 100;
pub const PRODUCT_PAGE_SIZE: u64 = 10;

/// Flat array unless the caller asked for a specific page.
pub async fn list_categories(state: &AppState, query: Pagination) -> AppResult<CategoryListing> {
    let window = query.normalize(CATEGORY_PAGE_SIZE);
    let page = state.store.list_categories(window.request()).await?;
    let meta = window.meta(page.total);
    let items = page.items.into_iter().map(convert_category).collect();

    if query.page_requested() {
        Ok(CategoryListing::Paged(ApiResponse::paginated(items, meta)))
    } else {
        Ok(CategoryListing::Flat(items))
    }
}

pub async fn list_products(
    state: &AppState,
    query: Pagination,
) -> AppResult<ApiResponse<Vec<PartnerProduct>>> {
    let window = query.normalize(PRODUCT_PAGE_SIZE);
    let page = state.store.list_active_products(window.request()).await?;
    let meta = window.meta(page.total);
    let items = page.items.into_iter().map(convert_product).collect();
    Ok(ApiResponse::paginated(items, meta))
}

pub async fn get_product(state: &AppState, id: &str) -> AppResult<ApiResponse<PartnerProduct>> {
    let not_found = AppError::NotFound("Product not found");
    let id = match Uuid::parse_str(id) {
        Ok(id) => id,
        Err(_) => return Err(not_found),
    };
    let product = match state.store.find_product(id).await? {
        Some(p) => p,
        None => return Err(not_found),
    };
    Ok(ApiResponse::success(convert_product(product)))
}
