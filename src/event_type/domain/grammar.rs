//! The event type grammar: `{category}.{platform}.{subtype...}`.
//!
//! A type string is well-formed when its leading segment is one of the six
//! categories, it has a platform segment and at least one subtype segment,
//! and every segment is a non-empty run of `[A-Za-z0-9_]`.

use super::{EventCategory, EventTypeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returns `true` if the string is a well-formed event type.
///
/// Pure and total; never panics.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event_type::domain::validate_event_type;
///
/// assert!(validate_event_type("message.qq.group"));
/// assert!(!validate_event_type("message.group"));
/// assert!(!validate_event_type("message..group"));
/// ```
#[must_use]
pub fn validate_event_type(event_type: &str) -> bool {
    check(event_type).is_ok()
}

fn check(value: &str) -> Result<EventCategory, EventTypeError> {
    if value.is_empty() {
        return Err(EventTypeError::Empty);
    }

    let mut segments = value.split('.');
    let head = segments.next().unwrap_or_default();
    let category = head
        .parse::<EventCategory>()
        .map_err(|_| EventTypeError::UnknownCategory(head.to_owned()))?;

    let mut tail_segments = 0_usize;
    for (index, segment) in segments.enumerate().map(|(offset, s)| (offset + 1, s)) {
        if segment.is_empty() {
            return Err(EventTypeError::EmptySegment {
                value: value.to_owned(),
                index,
            });
        }
        if let Some(character) = segment.chars().find(|c| !is_token_char(*c)) {
            return Err(EventTypeError::InvalidCharacter {
                value: value.to_owned(),
                index,
                character,
            });
        }
        tail_segments += 1;
    }

    match tail_segments {
        0 => Err(EventTypeError::MissingPlatform(value.to_owned())),
        1 => Err(EventTypeError::MissingSubtype(value.to_owned())),
        _ => Ok(category),
    }
}

const fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A validated event type string.
///
/// Holding an `EventType` proves the string passed [`validate_event_type`].
/// Envelopes keep their type as a plain string because tolerant decoding may
/// produce malformed values; use this type at the edges where a valid type is
/// required.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event_type::domain::{EventCategory, EventType};
///
/// let event_type = EventType::parse("action.qq.send_group_msg").expect("valid type");
/// assert_eq!(event_type.category(), EventCategory::Action);
/// assert_eq!(event_type.platform(), "qq");
/// assert_eq!(event_type.subtypes().collect::<Vec<_>>(), vec!["send_group_msg"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventType {
    value: String,
    category: EventCategory,
}

impl EventType {
    /// Parses and validates an event type string.
    ///
    /// # Errors
    ///
    /// Returns the first [`EventTypeError`] found while scanning the segments.
    pub fn parse(value: impl Into<String>) -> Result<Self, EventTypeError> {
        let text: String = value.into();
        let category = check(&text)?;
        Ok(Self {
            value: text,
            category,
        })
    }

    /// Assembles `{category}.{platform}.{subtype}` and validates the result.
    ///
    /// `subtype` may itself contain dots to produce deeper types.
    ///
    /// # Errors
    ///
    /// Returns [`EventTypeError`] if the assembled string is malformed.
    pub fn from_parts(
        category: EventCategory,
        platform: &str,
        subtype: &str,
    ) -> Result<Self, EventTypeError> {
        Self::parse(format!("{category}.{platform}.{subtype}"))
    }

    /// Returns the category segment.
    #[must_use]
    pub const fn category(&self) -> EventCategory {
        self.category
    }

    /// Returns the platform token (second segment).
    #[must_use]
    pub fn platform(&self) -> &str {
        self.value.split('.').nth(1).unwrap_or_default()
    }

    /// Returns the segments after the platform token.
    pub fn subtypes(&self) -> impl Iterator<Item = &str> {
        self.value.split('.').skip(2)
    }

    /// Returns the full type string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl FromStr for EventType {
    type Err = EventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EventType {
    type Error = EventTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EventType> for String {
    fn from(event_type: EventType) -> Self {
        event_type.value
    }
}

impl AsRef<str> for EventType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
