//! Block attribute payloads.
//!
//! The text between a block name and the delimiter terminator is a JSON
//! object. It is decoded into an ordered [`Attributes`] map whose keys keep
//! their document order.

use serde_json::{Map, Value};
use thiserror::Error;

/// Ordered mapping from attribute name to JSON value.
pub type Attributes = Map<String, Value>;

#[derive(Debug, Error)]
pub enum AttributeError {
    #[error("attribute payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("attribute payload is a JSON {found}, expected an object")]
    NotAnObject { found: &'static str },
}

/// Decode a raw attribute payload.
///
/// A missing or blank payload yields an empty map.
pub fn parse_attributes(raw: Option<&str>) -> Result<Attributes, AttributeError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Ok(Attributes::new());
    }

    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        other => Err(AttributeError::NotAnObject {
            found: json_kind(&other),
        }),
    }
}

/// [`parse_attributes`], falling back to an empty map when the payload is
/// malformed.
pub fn attributes_or_default(block_name: &str, raw: Option<&str>) -> Attributes {
    parse_attributes(raw).unwrap_or_else(|err| {
        log::debug!("ignoring attributes of {block_name}: {err}");
        Attributes::new()
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
