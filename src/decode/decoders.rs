//! Decoder implementations

use super::types::RecordDecoder;
use crate::error::{Error, Result};
use crate::types::Item;
use serde_json::Value;

// ============================================================================
// JSON Decoder
// ============================================================================

/// JSON decoder for collection bodies.
///
/// Without a record path the body itself must be a JSON array. With a path
/// (dot notation, optional `$.` prefix) the array is looked up inside an
/// envelope object such as `{"data": {"items": [...]}}`.
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder {
    record_path: Option<String>,
}

impl JsonDecoder {
    /// Create a decoder for bare-array bodies
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder that finds the array at a path
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            record_path: Some(path.into()),
        }
    }

    /// Record path, if any
    pub fn record_path(&self) -> Option<&str> {
        self.record_path.as_deref()
    }

    fn extract_records(&self, value: Value) -> Result<Vec<Item>> {
        let records = match &self.record_path {
            Some(path) => take_path(value, path)
                .ok_or_else(|| Error::decode(format!("No value at record path '{path}'")))?,
            None => value,
        };

        match records {
            Value::Array(items) => Ok(items),
            other => Err(Error::decode(format!(
                "Expected an array of items, found {}",
                kind(&other)
            ))),
        }
    }
}

impl RecordDecoder for JsonDecoder {
    fn decode(&self, body: &str) -> Result<Vec<Item>> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))?;
        self.extract_records(value)
    }
}

/// Move the value at a dotted path out of `value`
fn take_path(mut value: Value, path: &str) -> Option<Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    if path.is_empty() || path == "$" {
        return Some(value);
    }

    for part in path.split('.') {
        value = match value {
            Value::Object(mut map) => map.remove(part)?,
            Value::Array(mut items) => {
                let index: usize = part.parse().ok()?;
                if index >= items.len() {
                    return None;
                }
                items.swap_remove(index)
            }
            _ => return None,
        };
    }

    Some(value)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
