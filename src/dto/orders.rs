use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{lenient_count, lenient_counts, string_or_number, string_or_number_list};
use crate::models::OrderStatus;

#[derive(Debug, Serialize, ToSchema)]
pub struct PartnerCustomer {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Order as the partner expects to read it.
#[derive(Debug, Serialize, ToSchema)]
pub struct PartnerOrder {
    pub id: Uuid,
    pub tracking_id: String,
    pub customer: PartnerCustomer,
    pub product_ids: Vec<String>,
    pub selected_sizes: BTreeMap<String, String>,
    pub selected_colors: BTreeMap<String, String>,
    pub quantities: BTreeMap<String, u32>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub delivery_charge: Decimal,
    pub payment_method: String,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order creation body. Each logical field has a primary name and a
/// partner-native fallback; see `conversions::orders::convert_create_payload`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateOrderPayload {
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub shipping: Option<ShippingDetails>,
    #[serde(default, deserialize_with = "string_or_number_list")]
    pub product_ids: Option<Vec<String>>,
    pub line_items: Option<Vec<LineItem>>,
    pub selected_sizes: Option<BTreeMap<String, String>>,
    pub selected_colors: Option<BTreeMap<String, String>>,
    #[serde(default, deserialize_with = "lenient_counts")]
    pub quantities: Option<BTreeMap<String, u32>>,
    #[schema(value_type = Option<f64>)]
    pub total_amount: Option<Decimal>,
    #[schema(value_type = Option<f64>)]
    pub total: Option<Decimal>,
    #[schema(value_type = Option<f64>)]
    pub delivery_charge: Option<Decimal>,
    #[schema(value_type = Option<f64>)]
    pub shipping_charge: Option<Decimal>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub order_number: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub order_id: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ShippingDetails {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LineItem {
    #[serde(default, deserialize_with = "string_or_number")]
    pub product_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub quantity: Option<u32>,
    pub size: Option<String>,
    pub color: Option<String>,
}

/// Partial update body; absent fields stay untouched.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateOrderPayload {
    pub status: Option<String>,
    pub tracking_number: Option<String>,
    pub tracking_id: Option<String>,
    pub notes: Option<String>,
}
