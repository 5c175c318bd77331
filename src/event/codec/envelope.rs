//! Wire form of the event envelope.

use super::fields;
use crate::event::domain::{
    ConversationInfo, Event, EventId, Seg, UNKNOWN_BOT_ID, UNKNOWN_EVENT_TYPE, UserInfo,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

impl Event {
    /// Encodes the envelope. Absent optional descriptors are omitted.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "event_id".to_owned(),
            Value::String(self.event_id().as_str().to_owned()),
        );
        map.insert(
            "event_type".to_owned(),
            Value::String(self.event_type().to_owned()),
        );
        map.insert("time".to_owned(), Value::from(self.time()));
        map.insert("bot_id".to_owned(), Value::String(self.bot_id().to_owned()));
        map.insert(
            "content".to_owned(),
            Value::Array(self.content().iter().map(Seg::to_value).collect()),
        );
        fields::put_opt(&mut map, "user_info", self.user_info().map(UserInfo::to_value));
        fields::put_opt(
            &mut map,
            "conversation_info",
            self.conversation_info().map(ConversationInfo::to_value),
        );
        fields::put_opt(
            &mut map,
            "raw_data",
            self.raw_data().map(|raw| Value::String(raw.to_owned())),
        );
        Value::Object(map)
    }

    /// Decodes an envelope from any JSON value. Never fails.
    ///
    /// Missing or ill-typed fields take defaults: `event_id` reads as
    /// `unknown_event`, `event_type` as `unknown.unknown.unknown`, `time` as
    /// 0 and `bot_id` as `unknown`. Non-object content items are dropped and
    /// empty or ill-typed descriptors read as absent. A non-object value
    /// decodes as an envelope made entirely of defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use aicarus_protocol::event::domain::Event;
    /// use serde_json::json;
    ///
    /// let event = Event::from_value(json!({"event_type": "notice.qq.poke", "time": 12.9}));
    /// assert!(event.event_id().is_unknown());
    /// assert_eq!(event.time(), 12);
    /// assert_eq!(event.bot_id(), "unknown");
    /// ```
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                debug!(value = %other, "decoded non-object envelope as defaults");
                Map::new()
            }
        };
        let event_id =
            fields::text(map.get("event_id")).map_or_else(EventId::unknown, EventId::from);
        let event_type = fields::strict_text(map.get("event_type"))
            .unwrap_or_else(|| UNKNOWN_EVENT_TYPE.to_owned());
        let time = fields::millis(map.get("time"));
        let bot_id = fields::text(map.get("bot_id")).unwrap_or_else(|| UNKNOWN_BOT_ID.to_owned());
        let content = decode_content(map.remove("content"));

        let mut event = Self::new(event_id, event_type, time, bot_id, content);
        if let Some(user_info) = map.get("user_info").and_then(UserInfo::from_value) {
            event = event.with_user_info(user_info);
        }
        if let Some(conversation_info) = map
            .get("conversation_info")
            .and_then(ConversationInfo::from_value)
        {
            event = event.with_conversation_info(conversation_info);
        }
        if let Some(raw_data) = fields::strict_text(map.get("raw_data")) {
            event = event.with_raw_data(raw_data);
        }
        event
    }
}

fn decode_content(value: Option<Value>) -> Vec<Seg> {
    match value {
        Some(Value::Array(items)) => {
            let total = items.len();
            let content: Vec<Seg> = items.into_iter().filter_map(Seg::from_value).collect();
            let dropped = total.saturating_sub(content.len());
            if dropped > 0 {
                debug!(dropped, "dropped non-object content items");
            }
            content
        }
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            debug!(content = %other, "replaced non-array content with an empty list");
            Vec::new()
        }
    }
}

impl Serialize for Event {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}
