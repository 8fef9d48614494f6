use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use crate::config::AppConfig;
use crate::schemas::FieldError;
use crate::storage::{DocumentStore, StoreError};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    pub config: Arc<AppConfig>,
}

/// Response after accepting a daig order or inquiry
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: String,
    pub id: String,
}

impl SubmitResponse {
    pub fn ok(id: String) -> Self {
        Self {
            status: "ok".to_string(),
            id,
        }
    }
}

/// Query parameters for the review listing
#[derive(Debug, Deserialize)]
pub struct ListReviewsParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    20
}

/// Store diagnostics returned by `/test`
#[derive(Debug, Serialize)]
pub struct StoreReport {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, fields) = match self {
            AppError::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation failed".to_string(),
                fields,
            ),
            AppError::Store(err) => {
                error!(error = %err, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string(), Vec::new())
            }
        };

        (status, Json(ErrorResponse {
            error: status.to_string(),
            message,
            fields,
        }))
        .into_response()
    }
}
