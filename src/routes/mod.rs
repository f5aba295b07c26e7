use std::time::Duration;

use axum::{
    Router,
    body::Bytes,
    http::{HeaderName, Method, Request, Response},
    middleware::from_fn_with_state,
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::{redacted_headers, require_api_key},
    state::AppState,
};

pub mod categories;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod products;
pub mod tracking;
pub mod webhooks;

/// Everything the façade answers, relative to its mount point.
pub const ENDPOINTS: &[&str] = &[
    "GET /",
    "GET /categories",
    "GET /products",
    "GET /products/{id}",
    "GET /orders",
    "POST /orders",
    "GET /orders/{id}",
    "PUT /orders/{id}",
    "POST /webhooks",
];

/// Partner-facing routes behind the API key gate, including the 404 fallback.
pub fn movedrop_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(health::status))
        .route("/categories", get(categories::list_categories))
        .route("/products", get(products::list_products))
        .route("/products/{*id}", get(products::get_product))
        .route("/orders", get(orders::list_orders).post(orders::create_order))
        .route(
            "/orders/{*id}",
            get(orders::get_order).put(orders::update_order),
        )
        .route("/webhooks", post(webhooks::register_webhook))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(from_fn_with_state(state.clone(), require_api_key))
}

/// Full application: the façade under `mount_path`, the public tracking
/// lookup, API docs, and the shared middleware stack.
pub fn build_app(state: AppState, mount_path: &str) -> Router {
    let facade = movedrop_router(&state);
    let router = if mount_path == "/" {
        facade
    } else {
        // A nested router does not see `{mount}/`; serve it as the status route.
        let status = get(health::status)
            .fallback(route_not_found)
            .layer(from_fn_with_state(state.clone(), require_api_key));
        Router::new()
            .nest(mount_path, facade)
            .route(&format!("{mount_path}/"), status)
    };

    let request_id_header = HeaderName::from_static("x-request-id");
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
                headers = ?redacted_headers(request.headers())
            )
        })
        .on_request(|request: &Request<_>, _span: &tracing::Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "request started"
            );
        })
        .on_response(|response: &Response<_>, latency: Duration, _span: &tracing::Span| {
            tracing::info!(
                status = %response.status(),
                ms = %latency.as_millis(),
                "request finished"
            );
        });

    router
        .route("/track-order", post(tracking::track_order))
        .merge(doc::scalar_docs())
        .layer(trace_layer)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(ConcurrencyLimitLayer::new(100))
        .layer(cors_layer())
        .with_state(state)
}

/// Any origin may call; preflights never reach the API key gate.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any)
}

async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

/// Parse a JSON body regardless of `Content-Type`.
pub(crate) fn json_body<T: DeserializeOwned>(body: &Bytes) -> AppResult<T> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "unparseable request body");
        AppError::Validation("invalid_payload")
    })
}
