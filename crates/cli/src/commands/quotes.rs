use anyhow::Result;
use quotevault_core::Config;
use quotevault_storage::PgStorage;

pub(crate) async fn run(config: Config, author: Option<String>) -> Result<()> {
    let storage = PgStorage::connect(&config.db.url()).await?;

    let quotes = match author.as_deref() {
        Some(author) => storage.list_by_author(author).await?,
        None => storage.list_all().await?,
    };

    println!("{}", serde_json::to_string_pretty(&quotes)?);
    Ok(())
}
