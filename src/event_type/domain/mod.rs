//! Domain types for the event type system.
//!
//! Pure values with no shared state: the grammar, the category enumeration
//! and the built-in core types.

mod category;
mod core_types;
mod error;
mod grammar;

pub use category::EventCategory;
pub use core_types::{CORE_PLATFORM, CoreEventType};
pub use error::{EventTypeError, ParseCategoryError};
pub use grammar::{EventType, validate_event_type};
