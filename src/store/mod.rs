use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Category, NewOrder, Order, OrderChanges, OrderStatus, Product, SettingKey};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Orm(#[from] sea_orm::DbErr),

    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("invalid {column} on order {id}: {source}")]
    Decode {
        column: &'static str,
        id: Uuid,
        #[source]
        source: serde_json::Error,
    },

    /// Failure reported by a backend as plain text.
    #[error("{0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

/// Query/command interface over the shop's relational data.
///
/// The façade runs with service privileges, so no row-level filtering
/// happens here. Every call is a single round-trip; callers never retry.
#[async_trait]
pub trait CommerceStore: Send + Sync {
    /// Categories ordered by display order.
    async fn list_categories(&self, page: PageRequest) -> StoreResult<Page<Category>>;

    /// Active products, newest first.
    async fn list_active_products(&self, page: PageRequest) -> StoreResult<Page<Product>>;

    async fn find_product(&self, id: Uuid) -> StoreResult<Option<Product>>;

    /// Orders newest first, optionally restricted to one status.
    async fn list_orders(
        &self,
        status: Option<OrderStatus>,
        page: PageRequest,
    ) -> StoreResult<Page<Order>>;

    async fn find_order(&self, id: Uuid) -> StoreResult<Option<Order>>;

    async fn find_order_by_tracking_id(&self, tracking_id: &str) -> StoreResult<Option<Order>>;

    async fn insert_order(&self, order: NewOrder) -> StoreResult<Order>;

    /// Returns `None` when no order has this id.
    async fn update_order(&self, id: Uuid, changes: OrderChanges) -> StoreResult<Option<Order>>;

    /// Store-side generator of unique, human-readable tracking codes.
    async fn generate_tracking_id(&self) -> StoreResult<String>;

    /// Insert-or-update by key; atomic per key.
    async fn upsert_setting(&self, key: SettingKey, value: &str) -> StoreResult<()>;

    async fn get_setting(&self, key: SettingKey) -> StoreResult<Option<String>>;
}
