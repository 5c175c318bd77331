//! Event categories: the leading segment of every event type string.

use super::ParseCategoryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six top-level event categories.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event_type::domain::EventCategory;
///
/// let category: EventCategory = "action_response".parse().expect("known category");
/// assert_eq!(category, EventCategory::ActionResponse);
/// assert_eq!(category.prefix(), "action_response.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// A chat message received from or sent to a platform.
    Message,
    /// A platform notification (membership change, recall, ...).
    Notice,
    /// A request that awaits a decision (friend request, join request, ...).
    Request,
    /// A command issued by the core to an adapter.
    Action,
    /// The outcome of a previously issued action.
    ActionResponse,
    /// Lifecycle and heartbeat traffic about the connection itself.
    Meta,
}

impl EventCategory {
    /// Every category, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Message,
        Self::Notice,
        Self::Request,
        Self::Action,
        Self::ActionResponse,
        Self::Meta,
    ];

    /// Returns the wire spelling of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Notice => "notice",
            Self::Request => "request",
            Self::Action => "action",
            Self::ActionResponse => "action_response",
            Self::Meta => "meta",
        }
    }

    /// Returns the routing prefix (`"{category}."`) used by the envelope predicates.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Message => "message.",
            Self::Notice => "notice.",
            Self::Request => "request.",
            Self::Action => "action.",
            Self::ActionResponse => "action_response.",
            Self::Meta => "meta.",
        }
    }

    /// Returns the category whose prefix the type string starts with.
    ///
    /// This is a prefix check only; the rest of the string is not validated.
    #[must_use]
    pub fn of(event_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| event_type.starts_with(category.prefix()))
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}
