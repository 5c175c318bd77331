//! Factories for well-formed envelopes.
//!
//! [`EventBuilder`] borrows a clock and hands out [`EventDraft`]s, one per
//! event category. A draft takes the optional descriptors and is finished
//! with [`EventDraft::build`], which stamps a fresh identifier and the
//! clock's current time.
//!
//! Type strings are not enforced here: a type that fails the grammar, or
//! whose category does not match the factory, is logged at `warn` and the
//! event is built anyway so that adapters can still forward it.

use super::domain::{
    ActionOutcome, ConversationInfo, Event, EventId, MessageMetadata, Seg, UserInfo,
};
use crate::event_type::domain::{EventCategory, validate_event_type};
use mockable::Clock;
use serde_json::{Map, Value};
use tracing::warn;

/// Platform token used when an action response answers an event whose
/// platform cannot be derived.
const UNKNOWN_PLATFORM: &str = "unknown";

/// Creates envelopes stamped by the borrowed clock.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event::builder::EventBuilder;
/// use aicarus_protocol::event::domain::{MessageMetadata, Seg, UserInfo};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let builder = EventBuilder::new(&clock);
/// let event = builder
///     .message(
///         "message.qq.group",
///         "bot-1",
///         MessageMetadata::new("m-1"),
///         vec![Seg::text("hello")],
///     )
///     .with_user_info(UserInfo::new().with_user_id("42"))
///     .build();
///
/// assert_eq!(event.message_id(), Some("m-1"));
/// assert_eq!(event.content().len(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EventBuilder<'a, C: Clock> {
    clock: &'a C,
}

impl<'a, C: Clock> EventBuilder<'a, C> {
    /// Creates a builder that reads time from `clock`.
    #[must_use]
    pub const fn new(clock: &'a C) -> Self {
        Self { clock }
    }

    /// Starts a message event. The metadata unit is placed before `content`.
    pub fn message(
        &self,
        event_type: &str,
        bot_id: &str,
        metadata: MessageMetadata,
        content: Vec<Seg>,
    ) -> EventDraft<'a, C> {
        check_type(event_type, EventCategory::Message);
        let mut units = Vec::with_capacity(content.len().saturating_add(1));
        units.push(metadata.into_seg());
        units.extend(content);
        self.draft(event_type, bot_id, units)
    }

    /// Starts a notice event carrying one unit whose kind is the type string.
    pub fn notice(
        &self,
        event_type: &str,
        bot_id: &str,
        data: Map<String, Value>,
    ) -> EventDraft<'a, C> {
        check_type(event_type, EventCategory::Notice);
        self.single_unit(event_type, bot_id, data)
    }

    /// Starts a request event carrying one unit whose kind is the type string.
    pub fn request(
        &self,
        event_type: &str,
        bot_id: &str,
        data: Map<String, Value>,
    ) -> EventDraft<'a, C> {
        check_type(event_type, EventCategory::Request);
        self.single_unit(event_type, bot_id, data)
    }

    /// Starts a meta event carrying one unit whose kind is the type string.
    pub fn meta(
        &self,
        event_type: &str,
        bot_id: &str,
        data: Map<String, Value>,
    ) -> EventDraft<'a, C> {
        check_type(event_type, EventCategory::Meta);
        self.single_unit(event_type, bot_id, data)
    }

    /// Starts an action event with the given content.
    pub fn action(&self, event_type: &str, bot_id: &str, content: Vec<Seg>) -> EventDraft<'a, C> {
        check_type(event_type, EventCategory::Action);
        self.draft(event_type, bot_id, content)
    }

    /// Starts the response to a previously issued action.
    ///
    /// The type is `action_response.{platform}.{response_kind}`, where the
    /// platform comes from `original` (or `unknown` when it has none). The
    /// bot identifier is copied from `original`, and the single content unit
    /// records the original event id and type plus whatever `outcome` holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use aicarus_protocol::event::builder::EventBuilder;
    /// use aicarus_protocol::event::domain::{ActionOutcome, Seg};
    /// use mockable::DefaultClock;
    ///
    /// let clock = DefaultClock;
    /// let builder = EventBuilder::new(&clock);
    /// let action = builder
    ///     .action("action.qq.send_group_msg", "bot-1", vec![Seg::text("hi")])
    ///     .build();
    /// let response = builder
    ///     .action_response(&action, "success", ActionOutcome::new().with_status_code(200))
    ///     .build();
    ///
    /// assert_eq!(response.event_type(), "action_response.qq.success");
    /// assert_eq!(response.bot_id(), "bot-1");
    /// ```
    pub fn action_response(
        &self,
        original: &Event,
        response_kind: &str,
        outcome: ActionOutcome,
    ) -> EventDraft<'a, C> {
        let platform = original.platform().unwrap_or(UNKNOWN_PLATFORM);
        let event_type = format!(
            "{}{platform}.{response_kind}",
            EventCategory::ActionResponse.prefix()
        );
        check_type(&event_type, EventCategory::ActionResponse);

        let mut data = Map::new();
        data.insert(
            "original_event_id".to_owned(),
            Value::String(original.event_id().as_str().to_owned()),
        );
        data.insert(
            "original_action_type".to_owned(),
            Value::String(original.event_type().to_owned()),
        );
        if let Some(status_code) = outcome.status_code {
            data.insert("status_code".to_owned(), Value::from(status_code));
        }
        if let Some(message) = outcome.message {
            data.insert("message".to_owned(), Value::String(message));
        }
        if let Some(result) = outcome.data {
            data.insert("data".to_owned(), result);
        }
        let unit = Seg::data(event_type.clone(), data);
        self.draft(&event_type, original.bot_id(), vec![unit])
    }

    fn single_unit(
        &self,
        event_type: &str,
        bot_id: &str,
        data: Map<String, Value>,
    ) -> EventDraft<'a, C> {
        self.draft(event_type, bot_id, vec![Seg::data(event_type, data)])
    }

    fn draft(&self, event_type: &str, bot_id: &str, content: Vec<Seg>) -> EventDraft<'a, C> {
        EventDraft {
            clock: self.clock,
            event_id: None,
            event_type: event_type.to_owned(),
            bot_id: bot_id.to_owned(),
            content,
            user_info: None,
            conversation_info: None,
            raw_data: None,
        }
    }
}

fn check_type(event_type: &str, expected: EventCategory) {
    if validate_event_type(event_type) {
        if !event_type.starts_with(expected.prefix()) {
            warn!(
                event_type,
                expected = expected.as_str(),
                "building event whose type does not match its category"
            );
        }
    } else {
        warn!(event_type, "building event with a malformed type string");
    }
}

/// An envelope awaiting its optional descriptors.
#[derive(Debug, Clone)]
#[must_use = "a draft does nothing until `build` is called"]
pub struct EventDraft<'a, C: Clock> {
    clock: &'a C,
    event_id: Option<EventId>,
    event_type: String,
    bot_id: String,
    content: Vec<Seg>,
    user_info: Option<UserInfo>,
    conversation_info: Option<ConversationInfo>,
    raw_data: Option<String>,
}

impl<C: Clock> EventDraft<'_, C> {
    /// Uses a specific identifier instead of a fresh one.
    pub fn with_event_id(mut self, event_id: EventId) -> Self {
        self.event_id = Some(event_id);
        self
    }

    /// Attaches a user descriptor.
    pub fn with_user_info(mut self, user_info: UserInfo) -> Self {
        self.user_info = Some(user_info);
        self
    }

    /// Attaches a conversation descriptor.
    pub fn with_conversation_info(mut self, conversation_info: ConversationInfo) -> Self {
        self.conversation_info = Some(conversation_info);
        self
    }

    /// Attaches the raw platform payload.
    pub fn with_raw_data(mut self, raw_data: impl Into<String>) -> Self {
        self.raw_data = Some(raw_data.into());
        self
    }

    /// Finishes the envelope, stamping the clock's current time.
    #[must_use]
    pub fn build(self) -> Event {
        let event_id = self.event_id.unwrap_or_else(EventId::generate);
        let time = self.clock.utc().timestamp_millis();
        let mut event = Event::new(event_id, self.event_type, time, self.bot_id, self.content);
        if let Some(user_info) = self.user_info {
            event = event.with_user_info(user_info);
        }
        if let Some(conversation_info) = self.conversation_info {
            event = event.with_conversation_info(conversation_info);
        }
        if let Some(raw_data) = self.raw_data {
            event = event.with_raw_data(raw_data);
        }
        event
    }
}
