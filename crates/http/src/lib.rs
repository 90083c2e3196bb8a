//! HTTP API server for quotevault.

mod api_error;
mod handlers;
mod response_types;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use quotevault_storage::PgStorage;

pub use api_error::ApiError;
pub use response_types::LoadResponse;

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers; holds no
/// per-request state and nothing mutable.
pub struct AppState {
    /// PostgreSQL-backed quote repository.
    pub storage: PgStorage,
    /// CSV source consumed by the reload endpoint.
    pub csv_path: PathBuf,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/load", post(handlers::reload::load))
        .route("/quotes", get(handlers::quotes::list_quotes))
        .route("/quotes/{author}", get(handlers::quotes::quotes_by_author))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
