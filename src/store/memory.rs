use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CommerceStore, Page, PageRequest, StoreResult};
use crate::models::{
    Category, NewOrder, Order, OrderChanges, OrderStatus, Product, ProductStatus, SettingKey,
};

/// In-process store with the same ordering and filtering rules as [`super::PgStore`].
///
/// Used by the integration tests and for running the façade without a database.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    categories: Vec<Category>,
    products: Vec<Product>,
    orders: Vec<Order>,
    settings: HashMap<&'static str, String>,
    tracking_seq: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_category(&self, category: Category) {
        self.inner.write().await.categories.push(category);
    }

    pub async fn insert_product(&self, product: Product) {
        self.inner.write().await.products.push(product);
    }

    /// Number of rows in the settings table.
    pub async fn settings_len(&self) -> usize {
        self.inner.read().await.settings.len()
    }
}

fn paginate<T: Clone>(rows: &[T], page: PageRequest) -> Page<T> {
    let items = rows
        .iter()
        .skip(usize::try_from(page.offset).unwrap_or(usize::MAX))
        .take(usize::try_from(page.limit).unwrap_or(usize::MAX))
        .cloned()
        .collect();
    Page {
        items,
        total: rows.len() as u64,
    }
}

#[async_trait]
impl CommerceStore for MemoryStore {
    async fn list_categories(&self, page: PageRequest) -> StoreResult<Page<Category>> {
        let inner = self.inner.read().await;
        let mut rows = inner.categories.clone();
        rows.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.name.cmp(&b.name)));
        Ok(paginate(&rows, page))
    }

    async fn list_active_products(&self, page: PageRequest) -> StoreResult<Page<Product>> {
        let inner = self.inner.read().await;
        let mut rows: Vec<Product> = inner
            .products
            .iter()
            .rev()
            .filter(|p| p.status == ProductStatus::Active)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(&rows, page))
    }

    async fn find_product(&self, id: Uuid) -> StoreResult<Option<Product>> {
        let inner = self.inner.read().await;
        Ok(inner.products.iter().find(|p| p.id == id).cloned())
    }

    async fn list_orders(
        &self,
        status: Option<OrderStatus>,
        page: PageRequest,
    ) -> StoreResult<Page<Order>> {
        let inner = self.inner.read().await;
        let mut rows: Vec<Order> = inner
            .orders
            .iter()
            .rev()
            .filter(|o| status.is_none_or(|s| o.status == s))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(&rows, page))
    }

    async fn find_order(&self, id: Uuid) -> StoreResult<Option<Order>> {
        let inner = self.inner.read().await;
        Ok(inner.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn find_order_by_tracking_id(&self, tracking_id: &str) -> StoreResult<Option<Order>> {
        let inner = self.inner.read().await;
        Ok(inner
            .orders
            .iter()
            .find(|o| o.tracking_id == tracking_id)
            .cloned())
    }

    async fn insert_order(&self, order: NewOrder) -> StoreResult<Order> {
        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            tracking_id: order.tracking_id,
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            customer_address: order.customer_address,
            product_ids: order.product_ids,
            selected_sizes: order.selected_sizes,
            selected_colors: order.selected_colors,
            quantities: order.quantities,
            total_amount: order.total_amount,
            delivery_charge: order.delivery_charge,
            payment_method: order.payment_method,
            status: order.status,
            notes: order.notes,
            created_at: now,
            updated_at: now,
        };
        self.inner.write().await.orders.push(order.clone());
        Ok(order)
    }

    async fn update_order(&self, id: Uuid, changes: OrderChanges) -> StoreResult<Option<Order>> {
        let mut inner = self.inner.write().await;
        let order = match inner.orders.iter_mut().find(|o| o.id == id) {
            Some(o) => o,
            None => return Ok(None),
        };

        if let Some(status) = changes.status {
            order.status = status;
        }
        if let Some(tracking_id) = changes.tracking_id {
            order.tracking_id = tracking_id;
        }
        if let Some(notes) = changes.notes {
            order.notes = Some(notes);
        }
        order.updated_at = Utc::now();

        Ok(Some(order.clone()))
    }

    async fn generate_tracking_id(&self) -> StoreResult<String> {
        let mut inner = self.inner.write().await;
        inner.tracking_seq += 1;
        Ok(format!("MD{:08}", inner.tracking_seq))
    }

    async fn upsert_setting(&self, key: SettingKey, value: &str) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .settings
            .insert(key.as_str(), value.to_owned());
        Ok(())
    }

    async fn get_setting(&self, key: SettingKey) -> StoreResult<Option<String>> {
        Ok(self.inner.read().await.settings.get(key.as_str()).cloned())
    }
}
