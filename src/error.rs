//! Error types for the template cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Storage Error Enum ==
/// Unified error type for storage backends, the cache layer and the HTTP API.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Requested record does not exist (API surface only; storage reports absence as `None`)
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Cache configuration rejected at construction
    #[error("Invalid cache configuration: {0}")]
    InvalidConfig(String),

    /// Catalog could not be loaded or parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Generic failure raised by a storage backend
    #[error("Backend error: {0}")]
    Backend(String),

    /// Remote backend answered with a non-success status
    #[error("Remote backend returned {status} for {url}")]
    Status { status: u16, url: String },

    /// Remote backend did not answer in time
    #[error("Remote backend timed out: {0}")]
    Timeout(String),

    /// Transport-level failure talking to a remote backend
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
}

impl From<reqwest::Error> for StorageError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            let url = err
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "<unknown>".to_string());
            StorageError::Timeout(url)
        } else {
            StorageError::Http(err)
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        let status = match &self {
            StorageError::NotFound(_) => StatusCode::NOT_FOUND,
            StorageError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            StorageError::InvalidConfig(_) | StorageError::Catalog(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            StorageError::Backend(_) | StorageError::Status { .. } | StorageError::Http(_) => {
                StatusCode::BAD_GATEWAY
            }
            StorageError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the template cache.
pub type Result<T> = std::result::Result<T, StorageError>;
