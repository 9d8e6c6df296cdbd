//! Record loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading catalog records
#[derive(Debug, Error)]
pub enum RecordError {
    /// The catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON could not be decoded into records
    #[error("Failed to decode records: {0}")]
    Decode(#[from] serde_json::Error),

    /// Valid JSON that holds no record list
    #[error("Unexpected catalog shape: {0}")]
    UnexpectedShape(String),
}
