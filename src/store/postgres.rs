use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use super::{CommerceStore, Page, PageRequest, StoreError, StoreResult};
use crate::{
    db::{DbPool, OrmConn, orm_from_pool},
    entity::{
        categories::{Column as CategoryCol, Entity as Categories, Model as CategoryModel},
        orders::{
            ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel,
        },
        products::{Column as ProdCol, Entity as Products, Model as ProductModel},
        settings::Entity as Settings,
    },
    models::{
        Category, NewOrder, Order, OrderChanges, OrderStatus, Product, ProductStatus, SettingKey,
    },
};

/// Postgres-backed store: SeaORM for entity queries, sqlx for the
/// tracking-id function and the settings upsert.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
    orm: OrmConn,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        let orm = orm_from_pool(&pool);
        Self { pool, orm }
    }

    pub fn orm(&self) -> &OrmConn {
        &self.orm
    }
}

#[async_trait]
impl CommerceStore for PgStore {
    async fn list_categories(&self, page: PageRequest) -> StoreResult<Page<Category>> {
        let finder = Categories::find()
            .order_by_asc(CategoryCol::SortOrder)
            .order_by_asc(CategoryCol::Name);

        let total = finder.clone().count(&self.orm).await?;
        let items = finder
            .limit(page.limit)
            .offset(page.offset)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(category_from_entity)
            .collect();

        Ok(Page { items, total })
    }

    async fn list_active_products(&self, page: PageRequest) -> StoreResult<Page<Product>> {
        let finder = Products::find()
            .filter(ProdCol::Status.eq(ProductStatus::Active))
            .order_by_desc(ProdCol::CreatedAt);

        let total = finder.clone().count(&self.orm).await?;
        let items = finder
            .limit(page.limit)
            .offset(page.offset)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect();

        Ok(Page { items, total })
    }

    async fn find_product(&self, id: Uuid) -> StoreResult<Option<Product>> {
        let product = Products::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(product_from_entity);
        Ok(product)
    }

    async fn list_orders(
        &self,
        status: Option<OrderStatus>,
        page: PageRequest,
    ) -> StoreResult<Page<Order>> {
        let mut finder = Orders::find();
        if let Some(status) = status {
            finder = finder.filter(OrderCol::Status.eq(status));
        }
        let finder = finder.order_by_desc(OrderCol::CreatedAt);

        let total = finder.clone().count(&self.orm).await?;
        let items = finder
            .limit(page.limit)
            .offset(page.offset)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(order_from_entity)
            .collect::<StoreResult<Vec<_>>>()?;

        Ok(Page { items, total })
    }

    async fn find_order(&self, id: Uuid) -> StoreResult<Option<Order>> {
        Orders::find_by_id(id)
            .one(&self.orm)
            .await?
            .map(order_from_entity)
            .transpose()
    }

    async fn find_order_by_tracking_id(&self, tracking_id: &str) -> StoreResult<Option<Order>> {
        Orders::find()
            .filter(OrderCol::TrackingId.eq(tracking_id))
            .one(&self.orm)
            .await?
            .map(order_from_entity)
            .transpose()
    }

    async fn insert_order(&self, order: NewOrder) -> StoreResult<Order> {
        let model = OrderActive {
            id: Set(Uuid::new_v4()),
            tracking_id: Set(order.tracking_id),
            customer_name: Set(order.customer_name),
            customer_phone: Set(order.customer_phone),
            customer_address: Set(order.customer_address),
            product_ids: Set(order.product_ids),
            selected_sizes: Set(to_json(&order.selected_sizes)),
            selected_colors: Set(to_json(&order.selected_colors)),
            quantities: Set(to_json(&order.quantities)),
            total_amount: Set(order.total_amount),
            delivery_charge: Set(order.delivery_charge),
            payment_method: Set(order.payment_method),
            status: Set(order.status),
            notes: Set(order.notes),
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(&self.orm)
        .await?;

        order_from_entity(model)
    }

    async fn update_order(&self, id: Uuid, changes: OrderChanges) -> StoreResult<Option<Order>> {
        let existing = Orders::find_by_id(id).one(&self.orm).await?;
        let existing = match existing {
            Some(o) => o,
            None => return Ok(None),
        };

        let mut active: OrderActive = existing.into();
        if let Some(status) = changes.status {
            active.status = Set(status);
        }
        if let Some(tracking_id) = changes.tracking_id {
            active.tracking_id = Set(tracking_id);
        }
        if let Some(notes) = changes.notes {
            active.notes = Set(Some(notes));
        }
        active.updated_at = Set(Utc::now().into());
        let order = active.update(&self.orm).await?;

        order_from_entity(order).map(Some)
    }

    async fn generate_tracking_id(&self) -> StoreResult<String> {
        let tracking_id: String = sqlx::query_scalar("SELECT generate_tracking_id()")
            .fetch_one(&self.pool)
            .await?;
        Ok(tracking_id)
    }

    async fn upsert_setting(&self, key: SettingKey, value: &str) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()
            "#,
        )
        .bind(key.as_str())
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_setting(&self, key: SettingKey) -> StoreResult<Option<String>> {
        let value = Settings::find_by_id(key.as_str().to_owned())
            .one(&self.orm)
            .await?
            .map(|row| row.value);
        Ok(value)
    }
}

fn category_from_entity(model: CategoryModel) -> Category {
    Category {
        id: model.id,
        name: model.name,
        slug: model.slug,
        sort_order: model.sort_order,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        slug: model.slug,
        description: model.description,
        price: model.price,
        discount_price: model.discount_price,
        stock: model.stock,
        images: model.images,
        sizes: model.sizes,
        colors: model.colors,
        category_id: model.category_id,
        status: model.status,
        product_type: model.product_type,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn order_from_entity(model: OrderModel) -> StoreResult<Order> {
    let id = model.id;
    Ok(Order {
        id,
        tracking_id: model.tracking_id,
        customer_name: model.customer_name,
        customer_phone: model.customer_phone,
        customer_address: model.customer_address,
        product_ids: model.product_ids,
        selected_sizes: decode_map(id, "selected_sizes", model.selected_sizes)?,
        selected_colors: decode_map(id, "selected_colors", model.selected_colors)?,
        quantities: decode_map(id, "quantities", model.quantities)?,
        total_amount: model.total_amount,
        delivery_charge: model.delivery_charge,
        payment_method: model.payment_method,
        status: model.status,
        notes: model.notes,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

fn to_json<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_default()
}

fn decode_map<T>(id: Uuid, column: &'static str, value: serde_json::Value) -> StoreResult<T>
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(|source| StoreError::Decode { column, id, source })
}
