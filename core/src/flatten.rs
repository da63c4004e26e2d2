//! JSON flattening: nested documents to flat `(path, value)` pairs.
//!
//! Tracker payloads are often deeply nested (batched analytics events, tag
//! manager containers) while the parameter model is flat. Flattening joins
//! the enclosing object keys and array indices with `_`:
//!
//! `{"a":{"b":[1,2]}}` → `[("a_b_0","1"), ("a_b_1","2")]`

use serde_json::Value;

/// Flatten a parsed JSON document into `(path, value)` pairs.
///
/// - Object keys and array indices are `_`-joined into the path.
/// - Leaves are stringified: strings verbatim, numbers and booleans via
///   their canonical display form, `null` as `"null"`.
/// - Pair order follows document order.
/// - A scalar at the top level produces no pairs (there is no path to
///   name it by).
///
/// Flattening an already-flat object is the identity, modulo value
/// stringification.
///
/// # Example
///
/// ```
/// use pixhound::flatten_json;
///
/// let doc = serde_json::json!({"event": "Purchase", "items": [{"sku": "A-1"}]});
/// let flat = flatten_json(&doc);
/// assert_eq!(flat[0], ("event".to_string(), "Purchase".to_string()));
/// assert_eq!(flat[1], ("items_0_sku".to_string(), "A-1".to_string()));
/// ```
#[must_use]
pub fn flatten_json(value: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    walk(value, "", &mut out);
    out
}

fn walk(value: &Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                walk(child, &joined(prefix, key), out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                walk(child, &joined(prefix, &index.to_string()), out);
            }
        }
        leaf => {
            // Top-level scalars have no path and are dropped.
            if !prefix.is_empty() {
                out.push((prefix.to_owned(), leaf_to_string(leaf)));
            }
        }
    }
}

fn joined(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}_{key}")
    }
}

fn leaf_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_owned(),
        // walk() never passes containers here
        Value::Object(_) | Value::Array(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_object_is_identity_modulo_stringification() {
        let doc = json!({"a": "x", "b": 2, "c": true, "d": null});
        assert_eq!(
            flatten_json(&doc),
            vec![
                ("a".to_string(), "x".to_string()),
                ("b".to_string(), "2".to_string()),
                ("c".to_string(), "true".to_string()),
                ("d".to_string(), "null".to_string()),
            ]
        );
    }

    #[test]
    fn nested_objects_join_with_underscore() {
        let doc = json!({"context": {"pixel_code": "XYZ"}});
        assert_eq!(
            flatten_json(&doc),
            vec![("context_pixel_code".to_string(), "XYZ".to_string())]
        );
    }

    #[test]
    fn arrays_use_index_suffixes() {
        let doc = json!({"a": {"b": [1, 2]}});
        assert_eq!(
            flatten_json(&doc),
            vec![
                ("a_b_0".to_string(), "1".to_string()),
                ("a_b_1".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn array_of_objects() {
        let doc = json!({"items": [{"sku": "A"}, {"sku": "B"}]});
        assert_eq!(
            flatten_json(&doc),
            vec![
                ("items_0_sku".to_string(), "A".to_string()),
                ("items_1_sku".to_string(), "B".to_string()),
            ]
        );
    }

    #[test]
    fn top_level_array() {
        let doc = json!(["a", {"k": "v"}]);
        assert_eq!(
            flatten_json(&doc),
            vec![
                ("0".to_string(), "a".to_string()),
                ("1_k".to_string(), "v".to_string()),
            ]
        );
    }

    #[test]
    fn top_level_scalar_yields_nothing() {
        assert!(flatten_json(&json!("just a string")).is_empty());
        assert!(flatten_json(&json!(42)).is_empty());
        assert!(flatten_json(&json!(null)).is_empty());
    }

    #[test]
    fn empty_containers_yield_nothing() {
        assert!(flatten_json(&json!({})).is_empty());
        assert!(flatten_json(&json!({"a": {}})).is_empty());
        assert!(flatten_json(&json!({"a": []})).is_empty());
    }

    #[test]
    fn decimal_numbers_keep_their_form() {
        let doc = json!({"value": 9.99});
        assert_eq!(
            flatten_json(&doc),
            vec![("value".to_string(), "9.99".to_string())]
        );
    }
}
