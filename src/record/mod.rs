//! Catalog record model
//!
//! Records are produced by the search layer and handed to the view by
//! reference. Nothing in this crate mutates a record after it is loaded.

pub mod error;
mod types;

pub use error::RecordError;
pub use types::{ImageRef, Person, Record, text};

use std::fs;
use std::path::Path;

/// Load records from a JSON file
///
/// Accepts either a bare array of records or the API envelope
/// `{ "info": {..}, "records": [..] }`.
///
/// # Errors
///
/// Returns `RecordError` if the file cannot be read or does not contain
/// records in either shape.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, RecordError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| RecordError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&raw)
}

/// Parse records from JSON text, see [`load_records`]
///
/// # Errors
///
/// Returns `RecordError::Decode` on malformed JSON and
/// `RecordError::UnexpectedShape` when neither shape matches.
pub fn parse_records(raw: &str) -> Result<Vec<Record>, RecordError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        serde_json::Value::Object(mut envelope) => match envelope.remove("records") {
            Some(records @ serde_json::Value::Array(_)) => Ok(serde_json::from_value(records)?),
            _ => Err(RecordError::UnexpectedShape(
                "object without a `records` array".to_string(),
            )),
        },
        other => Err(RecordError::UnexpectedShape(format!(
            "expected array or object, found {}",
            json_kind(&other)
        ))),
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
