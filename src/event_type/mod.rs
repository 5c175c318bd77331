//! Namespace-based event type system.
//!
//! Every event carries a type string of the form
//! `{category}.{platform}.{subtype...}`. This module validates those strings,
//! enumerates the built-in core types and provides the registry through which
//! adapters add their own types without central coordination.
//!
//! # Architecture
//!
//! - **Domain**: the grammar, [`domain::EventCategory`] and [`domain::CoreEventType`]
//! - **Ports**: [`ports::EventTypeCatalog`], the read-only catalog view
//! - **Registry**: [`registry::EventTypeRegistry`], the explicit, lock-guarded catalog
//!
//! # Example
//!
//! ```
//! use aicarus_protocol::event_type::registry::{EventTypeRegistry, PlatformSchema};
//!
//! let registry = EventTypeRegistry::new();
//! let schema = PlatformSchema::new()
//!     .with_type("action.qq.send_group_msg", "Send a group message")
//!     .with_type("message.qq.group", "Group message");
//! registry.register_platform_schema("qq", schema);
//!
//! let ranked = registry.suggest("qq", "send", "group");
//! assert_eq!(ranked.first().map(String::as_str), Some("action.qq.send_group_msg"));
//! ```

pub mod domain;
pub mod ports;
pub mod registry;

#[cfg(test)]
mod tests;
