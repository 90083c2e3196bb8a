use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use quotevault_core::Quote;

use crate::AppState;
use crate::api_error::ApiError;

/// GET /quotes, returning every stored quote.
pub async fn list_quotes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Quote>>, ApiError> {
    let quotes = state.storage.list_all().await?;
    Ok(Json(quotes))
}

/// GET /quotes/{author}, a case-insensitive exact match on the author.
/// No match is an empty array, not an error. The parameter is only ever
/// a bind value.
pub async fn quotes_by_author(
    State(state): State<Arc<AppState>>,
    Path(author): Path<String>,
) -> Result<Json<Vec<Quote>>, ApiError> {
    let quotes = state.storage.list_by_author(&author).await?;
    Ok(Json(quotes))
}
