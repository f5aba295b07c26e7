mod common;

use std::sync::Arc;

use axum::extract::State;
use movedrop_channel::{
    models::SettingKey,
    routes::{ENDPOINTS, health::status},
    store::{CommerceStore, MemoryStore},
};

#[tokio::test]
async fn status_reports_service_and_endpoints() {
    let state = common::state_with(Arc::new(MemoryStore::new()));
    let response = status(State(state)).await.expect("status");

    let data = response.0.data;
    assert_eq!(data.status, "ok");
    assert_eq!(data.service, "MoveDrop Channel API");
    assert_eq!(data.endpoints.len(), ENDPOINTS.len());
    assert_eq!(data.webhook_url, None);
}

#[tokio::test]
async fn status_shows_registered_webhook() {
    let store = Arc::new(MemoryStore::new());
    store
        .upsert_setting(SettingKey::MovedropWebhookUrl, "https://partner.example.com/hook")
        .await
        .expect("upsert");

    let state = common::state_with(store);
    let response = status(State(state)).await.expect("status");
    assert_eq!(
        response.0.data.webhook_url.as_deref(),
        Some("https://partner.example.com/hook")
    );
}
