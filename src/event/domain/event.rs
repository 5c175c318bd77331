//! The event envelope: the top-level message exchanged between the core and
//! its adapters.

use super::{ConversationInfo, EventId, MESSAGE_METADATA_KIND, Seg, UserInfo};
use crate::event_type::domain::EventCategory;
use chrono::{DateTime, Utc};

/// Event type substituted when an incoming envelope carries none.
///
/// It has three segments so that platform derivation still works, and its
/// leading segment matches no category.
pub const UNKNOWN_EVENT_TYPE: &str = "unknown.unknown.unknown";
/// Bot identifier substituted when an incoming envelope carries none.
pub const UNKNOWN_BOT_ID: &str = "unknown";

/// Top-level protocol message.
///
/// Envelopes are immutable once built. The platform is never stored; it is
/// the second segment of the event type.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event::domain::{Event, EventId, Seg};
///
/// let event = Event::new(
///     EventId::new("evt-1"),
///     "message.qq.group",
///     1_700_000_000_000,
///     "bot-1",
///     vec![Seg::message_metadata("m-1"), Seg::text("Hello, "), Seg::text("world")],
/// );
/// assert_eq!(event.platform(), Some("qq"));
/// assert!(event.is_message());
/// assert_eq!(event.text_content(), "Hello, world");
/// assert_eq!(event.message_id(), Some("m-1"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    event_id: EventId,
    event_type: String,
    time: i64,
    bot_id: String,
    content: Vec<Seg>,
    user_info: Option<UserInfo>,
    conversation_info: Option<ConversationInfo>,
    raw_data: Option<String>,
}

impl Event {
    /// Creates an envelope without optional descriptors.
    ///
    /// `time` is in Unix milliseconds. The type string is stored as given;
    /// see [`crate::event::validation`] for checking it.
    #[must_use]
    pub fn new(
        event_id: EventId,
        event_type: impl Into<String>,
        time: i64,
        bot_id: impl Into<String>,
        content: Vec<Seg>,
    ) -> Self {
        Self {
            event_id,
            event_type: event_type.into(),
            time,
            bot_id: bot_id.into(),
            content,
            user_info: None,
            conversation_info: None,
            raw_data: None,
        }
    }

    /// Attaches a user descriptor.
    ///
    /// A descriptor with no field set carries nothing on the wire and is
    /// stored as absent.
    #[must_use]
    pub fn with_user_info(mut self, user_info: UserInfo) -> Self {
        self.user_info = (!user_info.is_empty()).then_some(user_info);
        self
    }

    /// Attaches a conversation descriptor.
    #[must_use]
    pub fn with_conversation_info(mut self, conversation_info: ConversationInfo) -> Self {
        self.conversation_info = Some(conversation_info);
        self
    }

    /// Attaches the raw platform payload.
    #[must_use]
    pub fn with_raw_data(mut self, raw_data: impl Into<String>) -> Self {
        self.raw_data = Some(raw_data.into());
        self
    }

    /// Returns the event identifier.
    #[must_use]
    pub const fn event_id(&self) -> &EventId {
        &self.event_id
    }

    /// Returns the type string.
    #[must_use]
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Returns the creation time in Unix milliseconds.
    #[must_use]
    pub const fn time(&self) -> i64 {
        self.time
    }

    /// Returns the creation time, if representable.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time)
    }

    /// Returns the bot identifier.
    #[must_use]
    pub fn bot_id(&self) -> &str {
        &self.bot_id
    }

    /// Returns the content units.
    #[must_use]
    pub fn content(&self) -> &[Seg] {
        &self.content
    }

    /// Returns the user descriptor.
    #[must_use]
    pub const fn user_info(&self) -> Option<&UserInfo> {
        self.user_info.as_ref()
    }

    /// Returns the conversation descriptor.
    #[must_use]
    pub const fn conversation_info(&self) -> Option<&ConversationInfo> {
        self.conversation_info.as_ref()
    }

    /// Returns the raw platform payload.
    #[must_use]
    pub fn raw_data(&self) -> Option<&str> {
        self.raw_data.as_deref()
    }

    /// Returns the platform token, the second segment of the type string.
    #[must_use]
    pub fn platform(&self) -> Option<&str> {
        self.event_type
            .split('.')
            .nth(1)
            .filter(|segment| !segment.is_empty())
    }

    /// Returns the category the type string starts with.
    #[must_use]
    pub fn category(&self) -> Option<EventCategory> {
        EventCategory::of(&self.event_type)
    }

    fn has_prefix(&self, category: EventCategory) -> bool {
        self.event_type.starts_with(category.prefix())
    }

    /// Returns `true` for `message.` events.
    #[must_use]
    pub fn is_message(&self) -> bool {
        self.has_prefix(EventCategory::Message)
    }

    /// Returns `true` for `notice.` events.
    #[must_use]
    pub fn is_notice(&self) -> bool {
        self.has_prefix(EventCategory::Notice)
    }

    /// Returns `true` for `request.` events.
    #[must_use]
    pub fn is_request(&self) -> bool {
        self.has_prefix(EventCategory::Request)
    }

    /// Returns `true` for `action.` events.
    #[must_use]
    pub fn is_action(&self) -> bool {
        self.has_prefix(EventCategory::Action)
    }

    /// Returns `true` for `action_response.` events.
    #[must_use]
    pub fn is_action_response(&self) -> bool {
        self.has_prefix(EventCategory::ActionResponse)
    }

    /// Returns `true` for `meta.` events.
    #[must_use]
    pub fn is_meta(&self) -> bool {
        self.has_prefix(EventCategory::Meta)
    }

    /// Concatenates the top-level text units in order.
    ///
    /// Text nested inside `seglist` units is not included.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.content.iter().filter_map(Seg::as_text).collect()
    }

    /// Returns the platform message id from the first `message_metadata` unit.
    #[must_use]
    pub fn message_id(&self) -> Option<&str> {
        self.find_seg(MESSAGE_METADATA_KIND)
            .and_then(|seg| seg.get("message_id"))
            .and_then(serde_json::Value::as_str)
    }

    /// Returns the first top-level unit of the given kind.
    #[must_use]
    pub fn find_seg(&self, kind: &str) -> Option<&Seg> {
        self.content.iter().find(|seg| seg.is_kind(kind))
    }

    /// Returns every top-level unit of the given kind, in order.
    pub fn filter_segs<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Seg> + 'a {
        self.content.iter().filter(move |seg| seg.is_kind(kind))
    }
}
