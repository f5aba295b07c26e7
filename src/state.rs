use std::sync::Arc;

use crate::{middleware::auth::ApiKeyGate, store::CommerceStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CommerceStore>,
    pub gate: ApiKeyGate,
}

impl AppState {
    pub fn new(store: Arc<dyn CommerceStore>, gate: ApiKeyGate) -> Self {
        Self { store, gate }
    }
}
