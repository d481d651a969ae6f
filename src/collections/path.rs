use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::HelperError;

/// Maximum nesting depth of a value.
///
/// Scalars have depth 0, a flat array or object has depth 1, and every
/// nested container adds one level.
pub fn depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(depth).max().unwrap_or(0),
        _ => 0,
    }
}

/// Set `value` at a dot-separated `path` inside `target`.
///
/// Missing objects along the way are created. A numeric segment indexes an
/// array when it is in bounds or equal to the length (append). Any other
/// intermediate value is replaced by an empty object. An empty path
/// replaces `target` entirely.
pub fn set_path(target: &mut Value, path: &str, value: Value) {
    if path.is_empty() {
        *target = value;
        return;
    }

    let mut current = target;
    for segment in path.split('.') {
        let index = match (&*current, segment.parse::<usize>()) {
            (Value::Array(items), Ok(i)) if i <= items.len() => Some(i),
            _ => None,
        };
        current = match (current, index) {
            (Value::Array(items), Some(i)) => {
                if i == items.len() {
                    items.push(Value::Null);
                }
                &mut items[i]
            }
            (other, _) => {
                if !other.is_object() {
                    *other = Value::Object(Map::new());
                }
                // Inserts null for a missing key.
                &mut other[segment]
            }
        };
    }
    *current = value;
}

/// By-value variant of [`set_path`].
pub fn with_path(mut target: Value, path: &str, value: Value) -> Value {
    set_path(&mut target, path, value);
    target
}

/// Convert any serializable value into plain JSON data, recursively.
pub fn to_plain_value<T: Serialize + ?Sized>(data: &T) -> Result<Value, HelperError> {
    Ok(serde_json::to_value(data)?)
}
