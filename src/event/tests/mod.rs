//! Unit tests for the event module.
//!
//! Covers the domain values, the tolerant codec, the builders and the
//! validator, including the decoding edge cases peers rely on.

mod builder_tests;
