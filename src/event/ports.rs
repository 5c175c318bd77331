//! Validator port for envelopes.
//!
//! Defines the abstract interface for checking envelopes before they are
//! routed, together with its configuration.

use super::{domain::Event, error::ValidationError};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for envelope validation.
///
/// Implementations collect every failure before returning rather than
/// stopping at the first, and combine them with [`ValidationError::combine`].
pub trait EventValidator: Send + Sync {
    /// Validates an envelope against all rules.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any rule fails; several failures are
    /// combined into `ValidationError::Multiple`.
    fn validate(&self, event: &Event) -> ValidationResult<()>;

    /// Validates the type string and, if a catalog is attached, its platform.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the type string is rejected.
    fn validate_type(&self, event: &Event) -> ValidationResult<()>;

    /// Validates the content units.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the content breaks a structural rule.
    fn validate_content(&self, event: &Event) -> ValidationResult<()>;
}

/// Configuration for validation rules.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event::ports::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert!(!config.allow_empty_content);
///
/// let lenient = ValidationConfig::lenient();
/// assert!(lenient.allow_empty_content);
/// assert!(!lenient.require_message_metadata);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Maximum number of top-level content units.
    pub max_content_units: usize,
    /// Whether an envelope may carry no content.
    pub allow_empty_content: bool,
    /// Whether message events must start with a `message_metadata` unit.
    pub require_message_metadata: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_content_units: 100,
            allow_empty_content: false,
            require_message_metadata: true,
        }
    }
}

impl ValidationConfig {
    /// Creates a lenient configuration for traffic from loosely conforming
    /// peers: empty content and bare message events are accepted.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            allow_empty_content: true,
            require_message_metadata: false,
            ..Default::default()
        }
    }

    /// Creates a strict configuration with a reduced unit limit.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_content_units: 20,
            allow_empty_content: false,
            require_message_metadata: true,
        }
    }
}
