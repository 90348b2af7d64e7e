//! `application/x-www-form-urlencoded` bodies for write operations.
//!
//! Every field is sent, zero values included: `null` becomes an empty value,
//! `0` and `false` are sent as-is. Nested objects and lists are flattened into
//! key paths joined with [`DELIMITER`], e.g. `vod|offset=10` or `tags|0=en`.
//!
//! An empty value cannot be told apart from `null` once encoded, so an
//! `Option<String>` holding `Some("")` decodes back as `None`. Skip such
//! fields with `skip_serializing_if` when the distinction matters.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{TwitchError, decode};

/// Separator between the segments of a nested key path.
pub const DELIMITER: char = '|';

/// Encode `body` as a form. The body must serialize to a map or struct.
pub fn to_string<T: Serialize + ?Sized>(body: &T) -> Result<String, TwitchError> {
    let value = serde_json::to_value(body).map_err(|e| TwitchError::FormEncode(e.to_string()))?;
    let Value::Object(map) = value else {
        return Err(TwitchError::FormEncode(
            "form body must be a struct or map".into(),
        ));
    };

    let mut pairs = Vec::new();
    for (key, value) in map {
        flatten(key, value, &mut pairs);
    }

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(pairs);
    Ok(serializer.finish())
}

/// Decode a form produced by [`to_string`] back into `T`.
///
/// Values arrive as strings and are coerced through the response decoder.
/// An object whose keys are exactly `0..n` is read back as a list.
pub fn from_str<T: DeserializeOwned>(body: &str) -> Result<T, TwitchError> {
    let mut root = Map::new();
    for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
        let segments: Vec<&str> = key.split(DELIMITER).collect();
        insert_path(&mut root, &segments, value.into_owned());
    }
    decode::from_value(restore_lists(Value::Object(root)))
}

fn flatten(key: String, value: Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (child, value) in map {
                flatten(format!("{key}{DELIMITER}{child}"), value, out);
            }
        }
        Value::Array(items) => {
            for (i, value) in items.into_iter().enumerate() {
                flatten(format!("{key}{DELIMITER}{i}"), value, out);
            }
        }
        Value::Null => out.push((key, String::new())),
        Value::Bool(b) => out.push((key, b.to_string())),
        Value::Number(n) => out.push((key, n.to_string())),
        Value::String(s) => out.push((key, s)),
    }
}

fn insert_path(map: &mut Map<String, Value>, segments: &[&str], value: String) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };
    if rest.is_empty() {
        map.insert((*head).to_owned(), Value::String(value));
        return;
    }

    let child = map
        .entry((*head).to_owned())
        .or_insert_with(|| Value::Object(Map::new()));
    if !child.is_object() {
        *child = Value::Object(Map::new());
    }
    if let Value::Object(child) = child {
        insert_path(child, rest, value);
    }
}

fn restore_lists(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let is_list = !map.is_empty()
                && (0..map.len()).all(|i| map.contains_key(i.to_string().as_str()));
            if is_list {
                let mut map = map;
                let items = (0..map.len())
                    .filter_map(|i| map.remove(i.to_string().as_str()))
                    .map(restore_lists)
                    .collect();
                Value::Array(items)
            } else {
                Value::Object(
                    map.into_iter()
                        .map(|(k, v)| (k, restore_lists(v)))
                        .collect(),
                )
            }
        }
        other => other,
    }
}
