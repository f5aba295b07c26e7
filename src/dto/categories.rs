use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::response::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct PartnerCategory {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub position: i32,
}

/// Clients that send no `page` get a bare array.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CategoryListing {
    Flat(Vec<PartnerCategory>),
    Paged(ApiResponse<Vec<PartnerCategory>>),
}
