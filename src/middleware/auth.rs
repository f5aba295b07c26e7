use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, Method, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;

use crate::{error::AppError, state::AppState};

/// Header names are case-insensitive; `HeaderMap` lookups already are.
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Single static shared secret for the partner.
#[derive(Clone, Default)]
pub struct ApiKeyGate {
    expected: Option<Arc<[u8]>>,
}

impl std::fmt::Debug for ApiKeyGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyGate")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl ApiKeyGate {
    /// An empty or missing key leaves the gate closed for every caller.
    pub fn new(expected: Option<&str>) -> Self {
        let expected = expected
            .filter(|key| !key.is_empty())
            .map(|key| Arc::from(key.as_bytes()));
        Self { expected }
    }

    pub fn is_configured(&self) -> bool {
        self.expected.is_some()
    }

    /// Byte-for-byte comparison in constant time.
    pub fn allows(&self, presented: &[u8]) -> bool {
        match &self.expected {
            Some(expected) => expected.as_ref().ct_eq(presented).into(),
            None => false,
        }
    }
}

/// Rejects any request whose `X-API-KEY` does not match the configured secret.
///
/// Preflight requests pass through with an empty 200; the CORS layer adds
/// its headers on the way out.
pub async fn require_api_key(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let presented = req.headers().get(&API_KEY_HEADER).map(|v| v.as_bytes());
    match presented {
        Some(key) if state.gate.allows(key) => next.run(req).await,
        _ => {
            tracing::warn!(
                method = %req.method(),
                path = %req.uri().path(),
                "rejected partner request"
            );
            AppError::Unauthorized.into_response()
        }
    }
}

/// Request headers with secrets masked, for log context.
pub fn redacted_headers(headers: &HeaderMap) -> Vec<String> {
    headers
        .iter()
        .map(|(name, value)| {
            if *name == API_KEY_HEADER || *name == AUTHORIZATION {
                format!("{name}: [redacted]")
            } else {
                format!("{name}: {}", value.to_str().unwrap_or("[binary]"))
            }
        })
        .collect()
}
