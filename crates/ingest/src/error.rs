use std::io;

use thiserror::Error;

/// Errors that abort a CSV read entirely.
///
/// Row-level problems (short rows, bad integers) are skipped with a
/// diagnostic, not surfaced here.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("CSV file error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
}
