//! Quote table operations: transactional reload and read queries.

use quotevault_core::{INSERT_BATCH_SIZE, Quote};

use crate::PgStorage;
use crate::error::StorageError;

type QuoteRow = (String, String, i32, i32);

impl PgStorage {
    /// Replaces the entire table contents with `records`.
    ///
    /// TRUNCATE and all batch inserts run in one transaction: any failure
    /// rolls the whole reload back and the previous contents survive.
    /// Returns the number of rows inserted.
    pub async fn reload(&self, records: &[Quote]) -> Result<u64, StorageError> {
        if records.is_empty() {
            return Err(StorageError::EmptyLoad);
        }

        let mut tx = self.pool.begin().await?;

        sqlx::query("TRUNCATE quotes RESTART IDENTITY").execute(&mut *tx).await?;

        let mut inserted = 0u64;
        for batch in records.chunks(INSERT_BATCH_SIZE) {
            let quotes: Vec<&str> = batch.iter().map(|r| r.quote.as_str()).collect();
            let authors: Vec<&str> = batch.iter().map(|r| r.author.as_str()).collect();
            let seasons: Vec<i32> = batch.iter().map(|r| r.season).collect();
            let episodes: Vec<i32> = batch.iter().map(|r| r.episode).collect();

            let result = sqlx::query(
                r#"
                INSERT INTO quotes (quote, author, season, episode)
                SELECT * FROM UNNEST($1::TEXT[], $2::TEXT[], $3::INT4[], $4::INT4[])
                "#,
            )
            .bind(&quotes)
            .bind(&authors)
            .bind(&seasons)
            .bind(&episodes)
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit().await?;
        tracing::info!(rows = inserted, "quotes table reloaded");
        Ok(inserted)
    }

    /// All quotes, in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Quote>, StorageError> {
        let rows = sqlx::query_as::<_, QuoteRow>(
            "SELECT quote, author, season, episode FROM quotes ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_quote).collect())
    }

    /// Quotes whose author matches `author` case-insensitively (exact match,
    /// not substring). Empty result is not an error.
    pub async fn list_by_author(&self, author: &str) -> Result<Vec<Quote>, StorageError> {
        let rows = sqlx::query_as::<_, QuoteRow>(
            r#"
            SELECT quote, author, season, episode
            FROM quotes
            WHERE LOWER(author) = LOWER($1)
            ORDER BY id
            "#,
        )
        .bind(author)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_quote).collect())
    }
}

fn row_to_quote((quote, author, season, episode): QuoteRow) -> Quote {
    Quote { quote, author, season, episode }
}
