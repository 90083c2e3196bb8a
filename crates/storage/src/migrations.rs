//! Schema migration for the quotes table, run on every connect (idempotent).
//!
//! `CREATE TABLE IF NOT EXISTS` never drops an existing populated table;
//! replacement happens only inside a reload transaction.

use sqlx::PgPool;

pub(crate) async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quotes (
            id BIGSERIAL PRIMARY KEY,
            quote TEXT NOT NULL,
            author TEXT NOT NULL,
            season INTEGER NOT NULL,
            episode INTEGER NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_quotes_author_lower ON quotes (LOWER(author))")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_quotes_season_episode ON quotes (season, episode)",
    )
    .execute(pool)
    .await?;

    tracing::info!("quotes schema migration completed");
    Ok(())
}
