use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{ProductStatus, ProductType};

/// Product as the partner expects to read it.
#[derive(Debug, Serialize, ToSchema)]
pub struct PartnerProduct {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub sale_price: Option<Decimal>,
    pub stock: i32,
    pub images: Vec<String>,
    pub category_id: Option<Uuid>,
    pub status: ProductStatus,
    pub product_type: ProductType,
    pub variants: Vec<PartnerVariant>,
    pub created_at: DateTime<Utc>,
}

/// A purchasable size/colour combination, derived on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PartnerVariant {
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
