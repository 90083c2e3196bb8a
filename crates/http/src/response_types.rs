//! Response types (Serialize)

use serde::Serialize;

/// Body of a successful `POST /load`.
#[derive(Debug, Serialize)]
pub struct LoadResponse {
    pub status: &'static str,
    pub message: String,
}
