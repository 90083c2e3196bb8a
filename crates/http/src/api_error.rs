//! Typed API error for HTTP handlers.
//!
//! Every failure in this service renders as a 500 with the error text in
//! the JSON body; the messages carry no detail beyond what the DB driver
//! or CSV reader reports.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quotevault_ingest::IngestError;
use quotevault_storage::StorageError;

/// API error with a human-readable message.
///
/// Use via `Result<Json<T>, ApiError>` in handlers.
/// Converts to JSON response: `{"status": "error", "message": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// 500 Internal Server Error: DB, ingest, or runtime failure.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self::Internal(message) = self;
        tracing::error!(error = %message, "request failed");
        let body = serde_json::json!({"status": "error", "message": message});
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        Self::Internal(err.to_string())
    }
}
