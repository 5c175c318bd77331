//! Built-in event types shared by every adapter.
//!
//! Core types live under the `core` platform token so they satisfy the same
//! grammar as adapter-specific types. Anything platform-specific goes through
//! the registry instead of this enumeration.

use super::EventCategory;
use std::fmt;

/// Platform token used for the built-in types and the registry default.
pub const CORE_PLATFORM: &str = "core";

/// The fixed set of built-in event types.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event_type::domain::{CoreEventType, EventCategory, validate_event_type};
///
/// let heartbeat = CoreEventType::MetaHeartbeat;
/// assert_eq!(heartbeat.as_str(), "meta.core.heartbeat");
/// assert_eq!(heartbeat.category(), EventCategory::Meta);
/// assert!(validate_event_type(heartbeat.as_str()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoreEventType {
    /// Generic outgoing message.
    MessageSend,
    /// Generic incoming message.
    MessageReceive,
    /// Generic membership change notice.
    NoticeMemberChange,
    /// Generic message edit or recall notice.
    NoticeMessageUpdate,
    /// Generic authorization request.
    RequestAuthorization,
    /// Generic send action.
    ActionSend,
    /// Generic management action.
    ActionManage,
    /// An action completed successfully.
    ActionResponseSuccess,
    /// An action failed.
    ActionResponseFailure,
    /// Adapter lifecycle transition.
    MetaLifecycle,
    /// Adapter heartbeat.
    MetaHeartbeat,
}

impl CoreEventType {
    /// Every built-in type, in registration order.
    pub const ALL: [Self; 11] = [
        Self::MessageSend,
        Self::MessageReceive,
        Self::NoticeMemberChange,
        Self::NoticeMessageUpdate,
        Self::RequestAuthorization,
        Self::ActionSend,
        Self::ActionManage,
        Self::ActionResponseSuccess,
        Self::ActionResponseFailure,
        Self::MetaLifecycle,
        Self::MetaHeartbeat,
    ];

    /// Returns the type string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MessageSend => "message.core.send",
            Self::MessageReceive => "message.core.receive",
            Self::NoticeMemberChange => "notice.core.member_change",
            Self::NoticeMessageUpdate => "notice.core.message_update",
            Self::RequestAuthorization => "request.core.authorization",
            Self::ActionSend => "action.core.send",
            Self::ActionManage => "action.core.manage",
            Self::ActionResponseSuccess => "action_response.core.success",
            Self::ActionResponseFailure => "action_response.core.failure",
            Self::MetaLifecycle => "meta.core.lifecycle",
            Self::MetaHeartbeat => "meta.core.heartbeat",
        }
    }

    /// Returns the human-readable description registered alongside the type.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MessageSend => "Send a message (generic)",
            Self::MessageReceive => "Receive a message (generic)",
            Self::NoticeMemberChange => "Member change notice (generic)",
            Self::NoticeMessageUpdate => "Message update notice (generic)",
            Self::RequestAuthorization => "Authorization request (generic)",
            Self::ActionSend => "Send action (generic)",
            Self::ActionManage => "Management action (generic)",
            Self::ActionResponseSuccess => "Action succeeded",
            Self::ActionResponseFailure => "Action failed",
            Self::MetaLifecycle => "Lifecycle event",
            Self::MetaHeartbeat => "Heartbeat event",
        }
    }

    /// Returns the category of the type.
    #[must_use]
    pub const fn category(self) -> EventCategory {
        match self {
            Self::MessageSend | Self::MessageReceive => EventCategory::Message,
            Self::NoticeMemberChange | Self::NoticeMessageUpdate => EventCategory::Notice,
            Self::RequestAuthorization => EventCategory::Request,
            Self::ActionSend | Self::ActionManage => EventCategory::Action,
            Self::ActionResponseSuccess | Self::ActionResponseFailure => {
                EventCategory::ActionResponse
            }
            Self::MetaLifecycle | Self::MetaHeartbeat => EventCategory::Meta,
        }
    }

    /// Looks up the built-in type with the given type string.
    #[must_use]
    pub fn from_type_str(event_type: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|core| core.as_str() == event_type)
    }
}

impl fmt::Display for CoreEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
