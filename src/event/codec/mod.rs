//! JSON encoding and tolerant decoding of envelopes and their parts.
//!
//! Encoding produces the canonical wire shape and omits absent optional
//! fields rather than writing `null`. Decoding never rejects a
//! well-formed JSON document: missing or ill-typed fields fall back to
//! defaults, so peers running a newer protocol revision stay readable.
//!
//! The `Serialize` and `Deserialize` implementations of [`Event`], [`Seg`],
//! [`UserInfo`] and [`ConversationInfo`] delegate to the `to_value` and
//! `from_value` methods defined here.
//!
//! [`Seg`]: crate::event::domain::Seg
//! [`UserInfo`]: crate::event::domain::UserInfo
//! [`ConversationInfo`]: crate::event::domain::ConversationInfo
//!
//! # Example
//!
//! ```
//! use aicarus_protocol::event::codec::{from_json_str, to_json_string};
//!
//! let text = r#"{"event_type":"message.qq.group","content":[{"type":"text","data":"hi"}]}"#;
//! let event = from_json_str(text)?;
//! assert_eq!(event.text_content(), "hi");
//! let encoded = to_json_string(&event)?;
//! assert!(encoded.contains(r#""event_id":"unknown_event""#));
//! # Ok::<(), aicarus_protocol::event::codec::CodecError>(())
//! ```

mod descriptors;
mod envelope;
mod fields;
mod seg;

use crate::event::domain::Event;
use serde_json::Value;
use thiserror::Error;

/// Errors raised when converting between envelopes and JSON text.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input is not JSON, or the serializer failed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decodes an envelope from JSON text.
///
/// # Errors
///
/// Returns [`CodecError::Json`] only when the text is not JSON; any JSON
/// document decodes.
pub fn from_json_str(text: &str) -> Result<Event, CodecError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(Event::from_value(value))
}

/// Decodes an envelope from JSON bytes.
///
/// # Errors
///
/// Returns [`CodecError::Json`] only when the bytes are not JSON.
pub fn from_json_slice(bytes: &[u8]) -> Result<Event, CodecError> {
    let value: Value = serde_json::from_slice(bytes)?;
    Ok(Event::from_value(value))
}

/// Encodes an envelope as compact JSON text.
///
/// # Errors
///
/// Returns [`CodecError::Json`] if the serializer fails.
pub fn to_json_string(event: &Event) -> Result<String, CodecError> {
    Ok(serde_json::to_string(&event.to_value())?)
}
