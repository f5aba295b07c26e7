#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use movedrop_channel::{
    middleware::auth::ApiKeyGate,
    models::{
        Category, NewOrder, Order, OrderChanges, OrderStatus, Product, ProductStatus, ProductType,
        SettingKey,
    },
    routes::build_app,
    state::AppState,
    store::{CommerceStore, MemoryStore, Page, PageRequest, StoreError, StoreResult},
};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub const API_KEY: &str = "md-test-secret-7f3a";

pub fn state_with(store: Arc<dyn CommerceStore>) -> AppState {
    AppState::new(store, ApiKeyGate::new(Some(API_KEY)))
}

pub fn app_with(store: Arc<dyn CommerceStore>) -> Router {
    build_app(state_with(store), "/")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    api_key: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    send_raw(app, method, uri, api_key, body.map(|json| json.to_string())).await
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    api_key: Option<&str>,
    body: Option<String>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = api_key {
        builder = builder.header("x-api-key", key);
    }
    let body = match body {
        Some(text) => {
            builder = builder.header("content-type", "application/json");
            Body::from(text)
        }
        None => Body::empty(),
    };
    call(app, builder.body(body).expect("request")).await
}

pub async fn call(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.expect("response");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, Some(API_KEY), None).await
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

pub fn product(name: &str, minutes: i64, status: ProductStatus) -> Product {
    Product {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: None,
        description: None,
        price: Decimal::new(1000, 0),
        discount_price: None,
        stock: 5,
        images: vec![format!("https://cdn.example.com/{name}.jpg")],
        sizes: Vec::new(),
        colors: Vec::new(),
        category_id: None,
        status,
        product_type: ProductType::Own,
        created_at: base_time() + Duration::minutes(minutes),
    }
}

pub fn category(name: &str, sort_order: i32) -> Category {
    Category {
        id: Uuid::new_v4(),
        name: name.to_string(),
        slug: None,
        sort_order,
        created_at: base_time(),
    }
}

/// Delegates to a [`MemoryStore`] but can be told to fail.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_tracking_ids: bool,
    pub fail_order_reads: bool,
}

fn backend_down() -> StoreError {
    StoreError::Backend("connection refused".into())
}

#[async_trait]
impl CommerceStore for FlakyStore {
    async fn list_categories(&self, page: PageRequest) -> StoreResult<Page<Category>> {
        self.inner.list_categories(page).await
    }

    async fn list_active_products(&self, page: PageRequest) -> StoreResult<Page<Product>> {
        self.inner.list_active_products(page).await
    }

    async fn find_product(&self, id: Uuid) -> StoreResult<Option<Product>> {
        self.inner.find_product(id).await
    }

    async fn list_orders(
        &self,
        status: Option<OrderStatus>,
        page: PageRequest,
    ) -> StoreResult<Page<Order>> {
        if self.fail_order_reads {
            return Err(backend_down());
        }
        self.inner.list_orders(status, page).await
    }

    async fn find_order(&self, id: Uuid) -> StoreResult<Option<Order>> {
        if self.fail_order_reads {
            return Err(backend_down());
        }
        self.inner.find_order(id).await
    }

    async fn find_order_by_tracking_id(&self, tracking_id: &str) -> StoreResult<Option<Order>> {
        self.inner.find_order_by_tracking_id(tracking_id).await
    }

    async fn insert_order(&self, order: NewOrder) -> StoreResult<Order> {
        self.inner.insert_order(order).await
    }

    async fn update_order(&self, id: Uuid, changes: OrderChanges) -> StoreResult<Option<Order>> {
        self.inner.update_order(id, changes).await
    }

    async fn generate_tracking_id(&self) -> StoreResult<String> {
        if self.fail_tracking_ids {
            return Err(StoreError::Backend("function generate_tracking_id() does not exist".into()));
        }
        self.inner.generate_tracking_id().await
    }

    async fn upsert_setting(&self, key: SettingKey, value: &str) -> StoreResult<()> {
        self.inner.upsert_setting(key, value).await
    }

    async fn get_setting(&self, key: SettingKey) -> StoreResult<Option<String>> {
        self.inner.get_setting(key).await
    }
}
