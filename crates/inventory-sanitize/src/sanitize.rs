use serde_json::Value;

use crate::keys::is_numeric_key;
use crate::number::try_number;

/// Walks `value` in place, coercing every object entry whose key is a numeric
/// key and descending into everything else.
///
/// Array elements are only walked, never coerced themselves. A value sitting
/// directly under a numeric key is handed to [`try_number`] and not walked
/// further, even when it is a container.
pub fn sanitize(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, entry) in map.iter_mut() {
                if is_numeric_key(key) {
                    *entry = try_number(std::mem::take(entry));
                } else {
                    sanitize(entry);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(sanitize),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}

/// Owning form of [`sanitize`].
pub fn sanitized(mut value: Value) -> Value {
    sanitize(&mut value);
    value
}
