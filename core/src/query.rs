//! Flattening of typed parameter structs into query pairs.
//!
//! Params are serialized through `serde_json` and flattened one level:
//! scalars become their string form, arrays repeat the key once per item
//! (the panel reads `tags[]=a&tags[]=b`), and `null` is skipped. Keys are
//! passed through untouched, so namespaced keys such as `filter[email]`
//! reach the panel exactly as named.

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::Value;

pub fn to_pairs<T: Serialize + ?Sized>(params: &T) -> Result<Vec<(String, String)>, serde_json::Error> {
    let mut pairs = Vec::new();
    match serde_json::to_value(params)? {
        Value::Null => {}
        Value::Object(map) => {
            for (key, value) in map {
                push_value(&mut pairs, &key, value);
            }
        }
        other => {
            return Err(serde_json::Error::custom(format!(
                "query parameters must serialize to an object, got {other}"
            )))
        }
    }
    Ok(pairs)
}

fn push_value(pairs: &mut Vec<(String, String)>, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => pairs.push((key.to_string(), flag.to_string())),
        Value::Number(number) => pairs.push((key.to_string(), number.to_string())),
        Value::String(text) => pairs.push((key.to_string(), text)),
        Value::Array(items) => {
            for item in items {
                push_value(pairs, key, item);
            }
        }
        object @ Value::Object(_) => pairs.push((key.to_string(), object.to_string())),
    }
}
