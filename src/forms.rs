//! Decoding for HTML form bodies with bracketed names, the shape posted by
//! the listing and review forms: `listing[title]=Villa`,
//! `listing[geometry][coordinates][0]=73.8`. Pairs become a nested
//! `serde_json::Value` so form and JSON bodies deserialize identically.

use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Parse an urlencoded body into a nested JSON object.
///
/// Empty values are skipped entirely, so an untouched optional form field
/// behaves the same as an absent one.
pub fn parse_form(body: &str) -> Value {
    let mut root = Value::Object(Map::new());
    for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        let path = split_key(&key);
        if path.is_empty() {
            continue;
        }
        insert_path(&mut root, &path, Value::String(value.into_owned()));
    }
    root
}

/// "listing[geometry][coordinates][0]" -> ["listing", "geometry", "coordinates", "0"]
fn split_key(key: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut rest = key;
    if let Some(open) = rest.find('[') {
        segments.push(rest[..open].to_string());
        rest = &rest[open..];
        while let Some(stripped) = rest.strip_prefix('[') {
            let Some(close) = stripped.find(']') else {
                return Vec::new();
            };
            segments.push(stripped[..close].to_string());
            rest = &stripped[close + 1..];
        }
        if !rest.is_empty() {
            return Vec::new();
        }
        segments.retain(|s| !s.is_empty());
    } else {
        segments.push(rest.to_string());
    }
    segments
}

fn insert_path(node: &mut Value, path: &[String], value: Value) {
    let segment = &path[0];
    match segment.parse::<usize>() {
        Ok(index) => {
            if !node.is_array() {
                *node = Value::Array(Vec::new());
            }
            let arr = node.as_array_mut().expect("coerced to array above");
            while arr.len() <= index {
                arr.push(Value::Null);
            }
            if path.len() == 1 {
                arr[index] = value;
            } else {
                insert_path(&mut arr[index], &path[1..], value);
            }
        }
        Err(_) => {
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            let obj = node.as_object_mut().expect("coerced to object above");
            if path.len() == 1 {
                obj.insert(segment.clone(), value);
            } else {
                let child = obj.entry(segment.clone()).or_insert(Value::Null);
                insert_path(child, &path[1..], value);
            }
        }
    }
}

/// Accepts a JSON number or a numeric string ("100" from a form field).
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => number_from(&value).map(Some),
    }
}

/// Like [`opt_f64`] but requires an integral value.
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| DeError::custom(format!("'{n}' is not an integer"))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| DeError::custom(format!("'{s}' is not an integer"))),
        Some(other) => Err(DeError::custom(format!("'{other}' is not an integer"))),
    }
}

/// Coordinate arrays may arrive as numbers (JSON) or strings (forms).
pub fn opt_f64_vec<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| number_from::<D::Error>(item))
            .collect::<Result<Vec<f64>, _>>()
            .map(Some),
        Some(other) => Err(DeError::custom(format!("'{other}' is not an array"))),
    }
}

fn number_from<E: DeError>(value: &Value) -> Result<f64, E> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| E::custom(format!("'{n}' is not a number"))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("'{s}' is not a number"))),
        other => Err(E::custom(format!("'{other}' is not a number"))),
    }
}
