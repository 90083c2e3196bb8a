use serde::{Deserialize, Serialize};

/// One validated quotation, exactly as it crosses the API boundary.
///
/// The database row also carries an `id` and a `created_at`, both assigned
/// by PostgreSQL at insertion; neither is surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
    pub season: i32,
    pub episode: i32,
}
