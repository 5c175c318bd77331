//! Descriptor of the conversation an event belongs to.

use serde_json::{Map, Value};
use std::fmt;

/// Identifier substituted when a decoded descriptor names no conversation.
pub const UNKNOWN_CONVERSATION_ID: &str = "unknown_conversation";

/// Kind of conversation.
///
/// The well-known kinds have dedicated variants; anything else a platform
/// reports is kept verbatim in [`ConversationType::Other`]. An `Other` value
/// can only be obtained through [`ConversationType::from_wire`], so it never
/// holds one of the well-known strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ConversationType {
    /// One-to-one chat.
    Private,
    /// Group chat.
    Group,
    /// Channel within a guild or server.
    Channel,
    /// Kind not reported.
    #[default]
    Unknown,
    /// Platform-specific kind.
    Other(CustomConversationType),
}

/// A platform-specific conversation kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CustomConversationType(String);

impl CustomConversationType {
    /// Returns the kind as reported by the platform.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ConversationType {
    /// Returns the wire form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Private => "private",
            Self::Group => "group",
            Self::Channel => "channel",
            Self::Unknown => "unknown",
            Self::Other(custom) => custom.as_str(),
        }
    }

    /// Maps a wire string onto a variant. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use aicarus_protocol::event::domain::ConversationType;
    ///
    /// assert_eq!(ConversationType::from_wire("group"), ConversationType::Group);
    /// assert_eq!(ConversationType::from_wire("thread").as_str(), "thread");
    /// ```
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "private" => Self::Private,
            "group" => Self::Group,
            "channel" => Self::Channel,
            "unknown" => Self::Unknown,
            other => Self::Other(CustomConversationType(other.to_owned())),
        }
    }
}

impl From<&str> for ConversationType {
    fn from(value: &str) -> Self {
        Self::from_wire(value)
    }
}

impl fmt::Display for ConversationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Conversation details.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event::domain::{ConversationInfo, ConversationType};
///
/// let group = ConversationInfo::new("group-1", ConversationType::Group).with_name("Rustaceans");
/// assert_eq!(group.conversation_type.as_str(), "group");
/// assert_eq!(group.name.as_deref(), Some("Rustaceans"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationInfo {
    /// Platform conversation identifier.
    pub conversation_id: String,
    /// Kind of conversation, encoded as `type`.
    pub conversation_type: ConversationType,
    /// Display name.
    pub name: Option<String>,
    /// Identifier of the enclosing conversation, e.g. a guild.
    pub parent_id: Option<String>,
    /// Platform fields without a dedicated slot.
    pub extra: Map<String, Value>,
}

impl ConversationInfo {
    /// Creates a descriptor with the required fields.
    #[must_use]
    pub fn new(conversation_id: impl Into<String>, conversation_type: ConversationType) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            conversation_type,
            name: None,
            parent_id: None,
            extra: Map::new(),
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the parent conversation.
    #[must_use]
    pub fn with_parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Adds an extension field.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
