use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use quotevault_ingest::read_quotes;

use crate::AppState;
use crate::api_error::ApiError;
use crate::response_types::LoadResponse;

/// POST /load: parse the CSV source and replace the table contents.
///
/// Any failure (missing file, connection, insert) aborts the whole reload;
/// the transaction in the storage layer guarantees the previous contents
/// survive a failed attempt.
pub async fn load(State(state): State<Arc<AppState>>) -> Result<Json<LoadResponse>, ApiError> {
    let csv_path = state.csv_path.clone();
    let report = tokio::task::spawn_blocking(move || read_quotes(&csv_path))
        .await
        .map_err(|e| ApiError::Internal(format!("CSV read task failed: {e}")))??;

    let inserted = state.storage.reload(&report.records).await?;

    Ok(Json(LoadResponse {
        status: "success",
        message: format!("loaded {inserted} quotes ({} rows skipped)", report.skipped),
    }))
}
