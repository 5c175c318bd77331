//! Tolerant field readers shared by the decoders.
//!
//! Each reader takes an optional JSON value and yields either a usable value
//! or `None`/a default; none of them fail.

use serde_json::{Map, Value};

/// Reads a string, stringifying numbers.
pub(super) fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Reads a string, refusing every other JSON type.
pub(super) fn strict_text(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}

/// Reads a millisecond timestamp.
///
/// Integers are taken as-is, floats are truncated toward zero and numeric
/// strings are parsed. Everything else reads as 0.
pub(super) fn millis(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(truncate))
            .unwrap_or_default(),
        Some(Value::String(text)) => text
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| text.trim().parse::<f64>().ok().map(truncate))
            .unwrap_or_default(),
        _ => 0,
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float timestamps are truncated to whole milliseconds; the cast saturates"
)]
const fn truncate(value: f64) -> i64 {
    value as i64
}

/// Reads a non-negative integer that fits in `u32`.
pub(super) fn small_unsigned(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Reads an object, treating anything else as empty.
pub(super) fn object(value: Option<&Value>) -> Map<String, Value> {
    match value {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    }
}

/// Inserts a field only when it is present.
pub(super) fn put_opt(map: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(present) = value {
        map.insert(key.to_owned(), present);
    }
}

/// Inserts an extension mapping only when it is non-empty.
pub(super) fn put_extension(
    map: &mut Map<String, Value>,
    key: &str,
    extension: &Map<String, Value>,
) {
    if !extension.is_empty() {
        map.insert(key.to_owned(), Value::Object(extension.clone()));
    }
}
