use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::string_or_number;
use crate::models::OrderStatus;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TrackOrderRequest {
    #[serde(default, deserialize_with = "string_or_number")]
    pub tracking_id: Option<String>,
}

/// The subset of an order a guest may see.
#[derive(Debug, Serialize, ToSchema)]
pub struct TrackedOrder {
    pub tracking_id: String,
    pub status: OrderStatus,
    pub customer_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub delivery_charge: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
