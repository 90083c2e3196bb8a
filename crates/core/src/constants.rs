//! Shared constants for quotevault.

/// Rows per multi-row INSERT statement during a reload.
pub const INSERT_BATCH_SIZE: usize = 100;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 5;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// CSV source consumed by a reload when no override is given.
pub const DEFAULT_CSV_PATH: &str = "quotes.csv";

/// Database connection defaults, overridable via `QUOTEVAULT_DB_*`.
pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_NAME: &str = "quotevault";
