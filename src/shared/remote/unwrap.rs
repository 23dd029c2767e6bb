//! Lenient unwrapping of JSON documents served by hosted JSON stores.
//!
//! Such stores wrap the payload as `{ "record": ... }` and, when a wrapped
//! document was uploaded again, as `{ "record": { "record": ... } }`.

use serde_json::{Map, Value};

/// Finds the record array in `data`.
///
/// Checked in order: `record` as an array, `record.record` as an array, `data`
/// itself as an array. Any other shape yields an empty list.
pub fn unwrap_record_array(data: Value) -> Vec<Value> {
    match data {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("record") {
            Some(Value::Array(items)) => items,
            Some(Value::Object(mut inner)) => match inner.remove("record") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Finds the record object in `data`.
///
/// `record.record` wins when it is an object, then `record`, then `data`
/// itself. A non-object at the chosen level yields `None`.
pub fn unwrap_record_object(data: Value) -> Option<Map<String, Value>> {
    let Value::Object(mut map) = data else {
        return None;
    };

    match map.remove("record") {
        Some(Value::Object(mut record)) => match record.remove("record") {
            Some(Value::Object(inner)) => Some(inner),
            Some(other) => {
                record.insert("record".to_string(), other);
                Some(record)
            }
            None => Some(record),
        },
        Some(other) => {
            map.insert("record".to_string(), other);
            Some(map)
        }
        None => Some(map),
    }
}
