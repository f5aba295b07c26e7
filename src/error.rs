use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::{routes::ENDPOINTS, store::StoreError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    /// Carries the entity-specific message, e.g. `Product not found`.
    #[error("{0}")]
    NotFound(&'static str),

    /// Carries a machine-readable code such as `tracking_id_required`.
    #[error("{0}")]
    Validation(&'static str),

    #[error("Endpoint not found")]
    RouteNotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<&'static [&'static str]>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Store(err) = &self {
            tracing::error!(error = %err, "data store request failed");
        }

        let endpoints = matches!(self, AppError::RouteNotFound).then_some(ENDPOINTS);
        let body = ErrorBody {
            error: self.to_string(),
            endpoints,
        };

        (self.status(), Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
