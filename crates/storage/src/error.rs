//! Typed error enum for the storage layer.

use thiserror::Error;

/// Storage-layer error covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Pool could not be established against the configured database.
    /// Callers must check this before proceeding; there is no retry.
    #[error("connection error: {0}")]
    Connect(#[source] sqlx::Error),

    /// SQL / connection / timeout failure during an operation.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure at connect time.
    #[error("migration error: {0}")]
    Migration(String),

    /// Reload invoked with zero parsed records; the table is left untouched.
    #[error("no records to insert")]
    EmptyLoad,
}
