//! Catalog boundary normalization.
//!
//! Category data occasionally arrives double-encoded: a stringified JSON
//! list nested inside a list (`["[\"Apparel\"]"]`). This is flattened once,
//! here, so every other read site sees plain strings.

use serde_json::Value;

/// Normalize a raw category field into a flat list of category names.
///
/// Accepts null, a bare string, a list of strings, or a list whose elements
/// are themselves JSON-encoded lists. A string that parses as a JSON array
/// is expanded; anything else is kept verbatim.
pub fn normalize_categories(raw: &Value) -> Vec<String> {
    match raw {
        Value::Null => Vec::new(),
        Value::String(s) => expand(s),
        Value::Array(items) => items
            .iter()
            .flat_map(|item| match item {
                Value::String(s) => expand(s),
                other => scalar(other),
            })
            .collect(),
        other => scalar(other),
    }
}

/// Expand a string that may itself be a JSON-encoded list.
fn expand(s: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(s) {
        Ok(Value::Array(items)) => items.iter().flat_map(scalar).collect(),
        _ => vec![s.to_string()],
    }
}

fn scalar(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::String(s) => vec![s.clone()],
        other => vec![other.to_string()],
    }
}
