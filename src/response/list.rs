//! Splitting free text into a list of candidates

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r?\n+").unwrap());

static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*•0-9.\s]+").unwrap());

/// Parse a text blob into an ordered list of strings.
///
/// A JSON array is taken as-is: string entries are trimmed, everything else
/// and empty entries are dropped. An array that ends up empty is still the
/// answer and never falls through to line splitting. Any other input is
/// split into lines with leading bullets or numbering removed.
pub fn parse_list(text: &str) -> Vec<String> {
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text) {
        return items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect();
    }

    LINE_BREAKS
        .split(text)
        .map(|line| LIST_MARKER.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
