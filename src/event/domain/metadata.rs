//! Structured payloads that builders turn into content units.

use super::{MESSAGE_METADATA_KIND, Seg};
use serde_json::{Map, Value};

/// Payload of the `message_metadata` unit that heads every message event.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event::domain::MessageMetadata;
/// use serde_json::json;
///
/// let unit = MessageMetadata::new("platform-msg-789")
///     .with_field("sub_type", json!("normal"))
///     .into_seg();
/// assert_eq!(unit.kind(), "message_metadata");
/// assert_eq!(unit.get("message_id"), Some(&json!("platform-msg-789")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MessageMetadata {
    /// Platform message identifier.
    pub message_id: String,
    /// Extra platform fields (font, sub type, anonymity, ...).
    pub fields: Map<String, Value>,
}

impl MessageMetadata {
    /// Creates metadata for a platform message id.
    #[must_use]
    pub fn new(message_id: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            fields: Map::new(),
        }
    }

    /// Adds an extra field. A `message_id` key is ignored when encoding.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Converts the metadata into its content unit.
    #[must_use]
    pub fn into_seg(self) -> Seg {
        let mut data = self.fields;
        data.insert("message_id".to_owned(), Value::String(self.message_id));
        Seg::data(MESSAGE_METADATA_KIND, data)
    }
}

/// Outcome details carried by an action response.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event::domain::ActionOutcome;
/// use serde_json::json;
///
/// let outcome = ActionOutcome::new()
///     .with_status_code(200)
///     .with_message("sent")
///     .with_data(json!({"message_id": "m-1"}));
/// assert_eq!(outcome.status_code, Some(200));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionOutcome {
    /// Platform or protocol status code.
    pub status_code: Option<i64>,
    /// Human-readable status message.
    pub message: Option<String>,
    /// Structured result data.
    pub data: Option<Value>,
}

impl ActionOutcome {
    /// Creates an empty outcome.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status code.
    #[must_use]
    pub const fn with_status_code(mut self, status_code: i64) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Sets the status message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the result data.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}
