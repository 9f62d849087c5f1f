//! Field projection from raw Table/Service Catalog API records
//!
//! Missing fields become `""`, never `null`.

use serde_json::Value;

/// The `result` member of a response envelope (`Null` when absent)
pub fn result_member(body: &Value) -> &Value {
    body.get("result").unwrap_or(&Value::Null)
}

/// The `result` member as rows; anything but an array yields no rows
pub fn result_rows(body: &Value) -> &[Value] {
    result_member(body)
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Project a field to text
///
/// Reference fields (`{"display_value": .., "link": ..}`) project to their
/// display value; booleans and numbers are stringified.
pub fn text_field(record: &Value, key: &str) -> String {
    record.get(key).map_or_else(String::new, as_text)
}

/// Project a field to non-empty text, or `None`
pub fn opt_text_field(record: &Value, key: &str) -> Option<String> {
    Some(text_field(record, key)).filter(|s| !s.is_empty())
}

/// Pass a structured field through untouched (missing becomes `""`)
pub fn raw_field(record: &Value, key: &str) -> Value {
    match record.get(key) {
        None | Some(Value::Null) => Value::String(String::new()),
        Some(v) => v.clone(),
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => map
            .get("display_value")
            .or_else(|| map.get("value"))
            .map_or_else(|| value.to_string(), as_text),
        Value::Array(_) => value.to_string(),
    }
}

/// Whether a `result` member holds an actual record
pub fn is_present(record: &Value) -> bool {
    match record {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        Value::Array(rows) => !rows.is_empty(),
        Value::String(s) => !s.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}
