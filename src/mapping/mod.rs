//! Pure transformations from upstream JSON payloads to output records.
//!
//! Every function borrows a [`serde_json::Value`] and never mutates it.
//! Fields follow a per-entity default policy: most missing fields map to an
//! explicit absent marker, while the fields documented as required raise a
//! [`MappingError`] that surfaces to the caller as a 500.

mod bills;
mod presidential;
mod summaries;
mod text;

pub use bills::{map_bill, map_bill_numbers, map_bills};
pub use presidential::{map_document_picks, map_presidential_documents};
pub use summaries::map_bill_summaries;
pub use text::map_text_versions;

use serde_json::Value;
use thiserror::Error;

/// A required upstream field was missing or malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("upstream {entity} record is missing required field '{field}'")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("upstream {entity} record has malformed field '{field}'")]
    InvalidField {
        entity: &'static str,
        field: &'static str,
    },
}

/// Reads an optional string field, tolerating numeric JSON values.
fn string_field(record: &Value, key: &str) -> Option<String> {
    match record.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads an optional integer field, tolerating stringified numbers.
fn int_field(record: &Value, key: &str) -> Option<i64> {
    match record.get(key) {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Reads a required string field, erroring when absent.
fn required_string(
    record: &Value,
    entity: &'static str,
    field: &'static str,
) -> Result<String, MappingError> {
    string_field(record, field).ok_or(MappingError::MissingField { entity, field })
}

/// The records array under `key`, or an empty slice when absent.
fn records_array<'a>(payload: &'a Value, key: &str) -> &'a [Value] {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
