//! Error types for envelope validation.
//!
//! Uses `thiserror` for typed variants that callers can inspect.

use crate::event_type::domain::EventTypeError;
use thiserror::Error;

/// Reasons an envelope fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The type string does not follow the grammar.
    #[error("invalid event type: {0}")]
    InvalidEventType(#[from] EventTypeError),

    /// The envelope carries no content units.
    #[error("event must contain at least one content unit")]
    EmptyContent,

    /// The envelope carries more content units than allowed.
    #[error("event has {actual} content units, exceeds limit of {max}")]
    TooManyContentUnits {
        /// The configured maximum.
        max: usize,
        /// The actual number of units.
        actual: usize,
    },

    /// A message event does not start with a `message_metadata` unit.
    #[error("message event must start with a message_metadata unit")]
    MissingMessageMetadata,

    /// An `action_response` unit does not name the action it answers.
    #[error("action response unit at index {index} is missing original_event_id")]
    MissingOriginalEventId {
        /// Index of the offending unit.
        index: usize,
    },

    /// The catalog rejects the type for the envelope's platform.
    #[error("event type '{event_type}' is not accepted for platform '{platform}'")]
    UnsupportedForPlatform {
        /// The rejected type string.
        event_type: String,
        /// The platform derived from it.
        platform: String,
    },

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Combines validation errors into one.
    ///
    /// A single error is returned unwrapped. Returns `None` when `errors` is
    /// empty.
    #[must_use]
    pub fn combine(mut errors: Vec<Self>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }

    /// Returns `true` if this error represents multiple validation failures.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the individual errors, a single error being its own list.
    #[must_use]
    pub fn errors(&self) -> &[Self] {
        match self {
            Self::Multiple(errors) => errors,
            single => std::slice::from_ref(single),
        }
    }
}
