//! Empty-field detection over an extracted résumé value tree.
//!
//! Paths use the index-suffixed convention: object keys are joined with `.`
//! and array positions are written as `[i]`, e.g. `experience[0].company`.
//! Every path is unique within one traversal, so no deduplication is applied.

use serde_json::Value;

/// Returns the path of every empty position in `value`, in depth-first order.
///
/// A position is empty when it holds `null`, an empty string, or an empty
/// array. Objects are never empty themselves; their entries are visited.
/// A non-empty array is transparent: only its elements are visited, so its
/// own path never appears even when every element is empty.
///
/// This never fails. Numbers, booleans and non-empty strings contribute
/// nothing. If `value` itself is empty the result is a single empty-string
/// path.
pub fn collect_empty_fields(value: &Value) -> Vec<String> {
    collect_empty_fields_at(value, "")
}

/// Same as [`collect_empty_fields`], with every path rooted at `prefix`.
pub fn collect_empty_fields_at(value: &Value, prefix: &str) -> Vec<String> {
    let mut paths = Vec::new();
    walk(value, prefix, &mut paths);
    paths
}

fn walk(value: &Value, path: &str, out: &mut Vec<String>) {
    match value {
        Value::Array(items) if items.is_empty() => out.push(path.to_string()),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                walk(item, &format!("{path}[{index}]"), out);
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                walk(child, &child_path, out);
            }
        }
        Value::Null => out.push(path.to_string()),
        Value::String(s) if s.is_empty() => out.push(path.to_string()),
        Value::String(_) | Value::Number(_) | Value::Bool(_) => {}
    }
}
