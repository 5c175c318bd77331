//! Error types for event type parsing.

use thiserror::Error;

/// Reasons a string is not a well-formed event type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventTypeError {
    /// The string is empty.
    #[error("event type must not be empty")]
    Empty,

    /// The leading segment is not one of the six categories.
    #[error("unknown event category '{0}'")]
    UnknownCategory(String),

    /// Only the category segment is present.
    #[error("event type '{0}' is missing a platform segment")]
    MissingPlatform(String),

    /// The platform segment is not followed by at least one subtype segment.
    #[error("event type '{0}' needs at least one segment after the platform")]
    MissingSubtype(String),

    /// A segment between dots is empty (leading, trailing or doubled dot).
    #[error("event type '{value}' has an empty segment at position {index}")]
    EmptySegment {
        /// The rejected string.
        value: String,
        /// Zero-based segment position.
        index: usize,
    },

    /// A segment contains a character outside `[A-Za-z0-9_]`.
    #[error("segment {index} of event type '{value}' contains invalid character '{character}'")]
    InvalidCharacter {
        /// The rejected string.
        value: String,
        /// Zero-based segment position.
        index: usize,
        /// The first offending character.
        character: char,
    },
}

/// Error returned when a string does not name an event category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event category: {0}")]
pub struct ParseCategoryError(pub String);
