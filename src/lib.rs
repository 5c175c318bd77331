//! AIcarus protocol: the event wire protocol spoken between a central core
//! and its platform adapters.
//!
//! Every exchange is an [`event::domain::Event`] whose type string follows
//! the `{category}.{platform}.{subtype...}` grammar. Adapters describe their
//! own types through an [`event_type::registry::EventTypeRegistry`] without
//! any central coordination.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: pure values with no shared state
//! - **Ports**: trait interfaces consumed by validators and adapters
//! - **Registry**: the one piece of mutable, lock-guarded state
//!
//! # Modules
//!
//! - [`event_type`]: type grammar, categories, core types and the registry
//! - [`event`]: envelopes, content units, codec, builders and validation

pub mod event;
pub mod event_type;
