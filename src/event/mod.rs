//! Event envelopes: the messages exchanged between the core and adapters.
//!
//! # Architecture
//!
//! - **Domain**: immutable values ([`domain::Event`], [`domain::Seg`], [`domain::UserInfo`],
//!   [`domain::ConversationInfo`])
//! - **Codec**: canonical JSON encoding and tolerant decoding ([`codec`])
//! - **Builder**: clock-stamped factories per category ([`builder::EventBuilder`])
//! - **Ports**: the validator interface ([`ports::EventValidator`])
//! - **Validation**: rules and the default validator ([`validation::DefaultEventValidator`])
//!
//! # Example
//!
//! ```
//! use aicarus_protocol::event::builder::EventBuilder;
//! use aicarus_protocol::event::codec::{from_json_str, to_json_string};
//! use aicarus_protocol::event::domain::{MessageMetadata, Seg};
//! use aicarus_protocol::event::ports::EventValidator;
//! use aicarus_protocol::event::validation::DefaultEventValidator;
//! use mockable::DefaultClock;
//!
//! let clock = DefaultClock;
//! let event = EventBuilder::new(&clock)
//!     .message("message.qq.group", "bot-1", MessageMetadata::new("m-1"), vec![Seg::text("hi")])
//!     .build();
//! DefaultEventValidator::new().validate(&event)?;
//!
//! let decoded = from_json_str(&to_json_string(&event)?)?;
//! assert_eq!(decoded, event);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod codec;
pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

#[cfg(test)]
mod tests;

/// Protocol revision implemented by this crate.
pub const PROTOCOL_VERSION: &str = "1.6.0";
