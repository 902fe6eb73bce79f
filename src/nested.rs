//! Conversion between flat dot-path entries and nested JSON objects.
//!
//! Resource files store translations as nested objects while the tree works
//! on flat key paths. These helpers only reshape values; writing the result
//! out in a concrete file syntax is left to the caller.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{error::Error, keys};

/// Flattens a nested JSON object into dot-path entries.
///
/// ```rust
/// use serde_json::json;
///
/// let entries = langtree::nested::flatten(&json!({
///     "menu": { "file": "File", "edit": "Edit" }
/// }))?;
/// assert_eq!(entries.get("menu.file").map(String::as_str), Some("File"));
/// # Ok::<(), langtree::Error>(())
/// ```
///
/// Empty strings and empty objects produce no entries. Any value that is
/// neither an object nor a string is rejected, as are keys with empty segments
/// and two values landing on the same path (`{"a": {"b": ..}, "a.b": ..}`).
pub fn flatten(value: &Value) -> Result<BTreeMap<String, String>, Error> {
    let Value::Object(map) = value else {
        return Err(Error::validation_error(
            "expected an object at the top level",
        ));
    };

    let mut result = BTreeMap::new();
    flatten_object(map, "", &mut result)?;
    Ok(result)
}

fn flatten_object(
    map: &Map<String, Value>,
    prefix: &str,
    result: &mut BTreeMap<String, String>,
) -> Result<(), Error> {
    for (key, value) in map {
        if !keys::is_valid(key) {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}{}{key}", keys::SEPARATOR)
            };
            return Err(Error::InvalidKey(path));
        }
        let full_key = keys::create(prefix, key);
        match value {
            Value::Object(child) => flatten_object(child, &full_key, result)?,
            Value::String(s) if s.is_empty() => {}
            Value::String(s) => {
                if result.contains_key(&full_key) {
                    return Err(Error::InvalidValue {
                        key: full_key,
                        message: "more than one value for this key".to_string(),
                    });
                }
                result.insert(full_key, s.clone());
            }
            other => {
                return Err(Error::InvalidValue {
                    key: full_key,
                    message: format!("expected a string or an object, found `{other}`"),
                });
            }
        }
    }
    Ok(())
}

/// Builds nested JSON objects from dot-path entries.
///
/// Where a value and a subtree share a location the subtree is kept.
pub fn unflatten(entries: &BTreeMap<String, String>) -> Value {
    let mut root = Map::new();
    for (key, value) in entries {
        insert_path(&mut root, key, value);
    }
    Value::Object(root)
}

fn insert_path(root: &mut Map<String, Value>, key: &str, value: &str) {
    let (parents, leaf) = match key.rsplit_once(keys::SEPARATOR) {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, key),
    };

    let mut node = root;
    for part in parents.into_iter().flat_map(keys::parts) {
        let slot = node
            .entry(part.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        let Value::Object(next) = slot else {
            return;
        };
        node = next;
    }

    match node.get(leaf) {
        Some(Value::Object(_)) => {}
        _ => {
            node.insert(leaf.to_string(), Value::String(value.to_string()));
        }
    }
}
