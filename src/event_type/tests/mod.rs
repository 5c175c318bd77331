//! Unit tests for the event type module.
//!
//! Tests are organised by concept: the grammar and core types, the
//! registry catalog, platform schemas and relevance-ranked suggestions.

mod grammar_tests;
mod registry_tests;
