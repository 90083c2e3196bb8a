use std::path::PathBuf;

use anyhow::Result;
use quotevault_core::Config;
use quotevault_ingest::read_quotes;
use quotevault_storage::PgStorage;

/// One-shot load: parse the CSV and replace the table contents.
pub(crate) async fn run(config: Config, csv: Option<PathBuf>) -> Result<()> {
    let csv_path = csv.unwrap_or(config.csv_path);

    let report = read_quotes(&csv_path)?;
    if report.skipped > 0 {
        tracing::warn!(skipped = report.skipped, "some rows were skipped during parsing");
    }

    let storage = PgStorage::connect(&config.db.url()).await?;
    let inserted = storage.reload(&report.records).await?;

    println!(
        "loaded {inserted} quotes from {} ({} rows skipped)",
        csv_path.display(),
        report.skipped
    );
    Ok(())
}
