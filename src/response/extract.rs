//! Free-text extraction from workflow outputs

use serde_json::{Map, Value};

/// Fields probed on object-valued outputs, highest priority first
const TEXT_FIELDS: [&str; 4] = ["text", "answer", "result", "content"];

/// Find the first usable text among the output values.
///
/// Values are scanned in insertion order. A string value counts directly; an
/// object value contributes its first string field from [`TEXT_FIELDS`]. The
/// first candidate that is non-empty after trimming is returned trimmed.
pub fn extract_text(outputs: Option<&Map<String, Value>>) -> Option<String> {
    outputs?.values().find_map(candidate)
}

fn candidate(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.as_str(),
        Value::Object(fields) => TEXT_FIELDS
            .iter()
            .find_map(|field| fields.get(*field).and_then(Value::as_str))?,
        _ => return None,
    };

    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
