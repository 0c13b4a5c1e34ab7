//! Application error type mapping to HTTP status codes and the `{ok, error}` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::transcript::TranscriptError;

#[derive(Debug)]
pub enum AppError {
    /// Rejected input, reported as 400 with the message as-is.
    Validation(String),
    /// Storage unavailable or failing; the request cannot complete.
    Storage(TranscriptError),
    Internal(String),
}

impl From<TranscriptError> for AppError {
    fn from(e: TranscriptError) -> Self {
        // Handlers validate input before it reaches the store, so an empty
        // field rejected there is a server-side fault.
        match e {
            TranscriptError::EmptyText | TranscriptError::EmptyUserId => {
                AppError::Internal(e.to_string())
            }
            TranscriptError::Storage(_) => AppError::Storage(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Storage(e) => {
                tracing::error!(error = %e, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage unavailable".to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        (status, Json(json!({ "ok": false, "error": message }))).into_response()
    }
}
