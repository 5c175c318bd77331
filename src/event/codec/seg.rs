//! Wire form of content units.

use super::fields;
use crate::event::domain::{SEGLIST_KIND, Seg, TEXT_KIND, UNKNOWN_KIND};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

impl Seg {
    /// Builds a unit from a kind and an arbitrary payload, coercing the
    /// payload to the shape the kind requires.
    ///
    /// - `text`: strings are kept, a mapping contributes its string `text`
    ///   field, `null` becomes `""` and anything else becomes its JSON text.
    /// - `seglist`: an array keeps its object elements as children; anything
    ///   else yields an empty list.
    /// - every other kind: a mapping is kept, `null` becomes `{}` and anything
    ///   else is wrapped as `{"value": payload}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use aicarus_protocol::event::domain::Seg;
    /// use serde_json::json;
    ///
    /// assert_eq!(Seg::new("text", json!({"text": "hi"})), Seg::text("hi"));
    /// assert_eq!(Seg::new("face", json!(14)).get("value"), Some(&json!(14)));
    /// ```
    #[must_use]
    pub fn new(kind: impl Into<String>, payload: Value) -> Self {
        let kind_tag = kind.into();
        match kind_tag.as_str() {
            TEXT_KIND => Self::Text(text_payload(payload)),
            SEGLIST_KIND => Self::List(seglist_payload(payload)),
            _ => Self::Data {
                data: mapping_payload(&kind_tag, payload),
                kind: kind_tag,
            },
        }
    }

    /// Encodes the unit as `{"type": kind, "data": payload}`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let data = match self {
            Self::Text(text) => Value::String(text.clone()),
            Self::List(children) => Value::Array(children.iter().map(Self::to_value).collect()),
            Self::Data { data, .. } => Value::Object(data.clone()),
        };
        let mut unit = Map::new();
        unit.insert("type".to_owned(), Value::String(self.kind().to_owned()));
        unit.insert("data".to_owned(), data);
        Value::Object(unit)
    }

    /// Decodes a unit, returning `None` when the value is not a JSON object.
    ///
    /// A missing or non-string `type` reads as `unknown`; the payload is
    /// coerced as described on [`Seg::new`].
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut unit) = value else {
            return None;
        };
        let kind = match unit.remove("type") {
            Some(Value::String(kind)) => kind,
            _ => UNKNOWN_KIND.to_owned(),
        };
        let payload = unit.remove("data").unwrap_or(Value::Null);
        Some(Self::new(kind, payload))
    }
}

fn text_payload(payload: Value) -> String {
    match payload {
        Value::String(text) => text,
        Value::Null => String::new(),
        Value::Object(ref map) if map.get("text").is_some_and(Value::is_string) => {
            fields::strict_text(map.get("text")).unwrap_or_default()
        }
        other => {
            debug!(payload = %other, "rendered non-string text payload as JSON");
            other.to_string()
        }
    }
}

fn seglist_payload(payload: Value) -> Vec<Seg> {
    match payload {
        Value::Array(items) => {
            let total = items.len();
            let children: Vec<Seg> = items.into_iter().filter_map(Seg::from_value).collect();
            let dropped = total.saturating_sub(children.len());
            if dropped > 0 {
                debug!(dropped, "dropped non-object seglist children");
            }
            children
        }
        Value::Null => Vec::new(),
        other => {
            debug!(payload = %other, "replaced non-array seglist payload with an empty list");
            Vec::new()
        }
    }
}

fn mapping_payload(kind: &str, payload: Value) -> Map<String, Value> {
    match payload {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            debug!(kind, "wrapped non-mapping payload under \"value\"");
            let mut wrapped = Map::new();
            wrapped.insert("value".to_owned(), other);
            wrapped
        }
    }
}

impl Serialize for Seg {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Seg {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value)
            .ok_or_else(|| D::Error::custom("content unit must be a JSON object"))
    }
}
