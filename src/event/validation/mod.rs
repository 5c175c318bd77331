//! Envelope validation.
//!
//! The individual rules and the composite validator service. Decoding is
//! deliberately tolerant; this is where an orchestrator decides whether a
//! decoded envelope is fit to route.

pub mod rules;
pub mod service;

pub use service::DefaultEventValidator;
