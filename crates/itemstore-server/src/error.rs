//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all item endpoints. It implements
//! `axum::response::IntoResponse` to produce plain-text error bodies with the
//! matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use itemstore_storage::StorageError;

/// Body of every 404 produced by an item lookup.
pub const ITEM_NOT_FOUND: &str = "Item not found";

/// Body of every 405.
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body did not decode (400). Carries the decoder's message.
    #[error("{0}")]
    BadRequest(String),

    /// Target item does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// Method not routed for this path (405).
    #[error("{}", METHOD_NOT_ALLOWED)]
    MethodNotAllowed,

    /// Internal server error (500).
    #[error("{0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ItemNotFound(_) => ApiError::NotFound(ITEM_NOT_FOUND.to_string()),
            StorageError::IdSpaceExhausted => ApiError::InternalError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
