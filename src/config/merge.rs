//! Deep merge for JSON-shaped configuration values.
//!
//! [`merge`] combines a base configuration with overrides. It is used both
//! when a [`ClientConfig`](crate::ClientConfig) is built from an options
//! object and when a client's transport options are composed with per-call
//! overrides.

use serde_json::{Map, Value};

/// Merges `source` into a copy of `target` and returns the result.
///
/// For every key in `source`:
///
/// - if `target` has no such key, or holds a scalar there, the source value
///   wins;
/// - if both values are arrays, they are concatenated (target first);
/// - if both values are objects, they are merged recursively;
/// - otherwise the target keeps its composite value.
///
/// Neither input is modified.
///
/// # Example
///
/// ```rust
/// use grafico_ql::config::merge;
/// use serde_json::json;
///
/// let target = json!({"a": [1, 2], "b": {"x": 1}}).as_object().cloned().unwrap();
/// let source = json!({"a": [3], "b": "str"}).as_object().cloned().unwrap();
///
/// let merged = merge(&target, &source);
/// assert_eq!(merged["a"], json!([1, 2, 3]));
/// assert_eq!(merged["b"], json!({"x": 1}));
/// ```
#[must_use]
pub fn merge(target: &Map<String, Value>, source: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = target.clone();
    merge_into(&mut merged, source);
    merged
}

fn merge_into(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, incoming) in source {
        let handled = match (target.get_mut(key), incoming) {
            (Some(Value::Array(existing)), Value::Array(extra)) => {
                existing.extend(extra.iter().cloned());
                true
            }
            (Some(Value::Object(existing)), Value::Object(nested)) => {
                merge_into(existing, nested);
                true
            }
            // Shape mismatch: keep the composite target value.
            (Some(Value::Array(_) | Value::Object(_)), _) => true,
            _ => false,
        };
        if !handled {
            target.insert(key.clone(), incoming.clone());
        }
    }
}
