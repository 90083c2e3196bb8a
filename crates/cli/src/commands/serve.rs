use std::sync::Arc;

use anyhow::Result;
use quotevault_core::Config;
use quotevault_http::{AppState, create_router};
use quotevault_storage::PgStorage;

pub(crate) async fn run(config: Config, host: String, port: u16) -> Result<()> {
    let storage = PgStorage::connect(&config.db.url()).await?;

    let state = Arc::new(AppState { storage, csv_path: config.csv_path });
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
