//! Port trait for components that consult the type catalog.
//!
//! Validators and adapters depend on this trait rather than on the concrete
//! registry, so tests can supply a fixed catalog.

/// Read-only view of a type catalog.
pub trait EventTypeCatalog {
    /// Returns `true` if the exact type string is registered.
    fn is_registered(&self, event_type: &str) -> bool;

    /// Returns `true` if the type string is acceptable for the platform.
    fn validate_for_platform(&self, event_type: &str, platform: &str) -> bool;
}
