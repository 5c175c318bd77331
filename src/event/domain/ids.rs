//! Event identifier newtype.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier substituted when an incoming envelope carries none.
pub const UNKNOWN_EVENT_ID: &str = "unknown_event";

/// Opaque identifier of an event envelope.
///
/// Identifiers minted by the builders are random UUIDs; identifiers decoded
/// from the wire are kept verbatim, whatever their shape.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event::domain::EventId;
///
/// let first = EventId::generate();
/// let second = EventId::generate();
/// assert_ne!(first, second);
/// assert_eq!(EventId::new("evt-1").as_str(), "evt-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Wraps an existing identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Creates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the sentinel used for envelopes decoded without an identifier.
    #[must_use]
    pub fn unknown() -> Self {
        Self(UNKNOWN_EVENT_ID.to_owned())
    }

    /// Returns `true` if this is the decoding sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_EVENT_ID
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
