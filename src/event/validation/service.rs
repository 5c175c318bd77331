//! Validation service implementation.
//!
//! Provides the default implementation of the [`EventValidator`] port,
//! combining the individual rules and collecting every failure.

use crate::event::{
    domain::Event,
    error::ValidationError,
    ports::{EventValidator, ValidationConfig, ValidationResult},
    validation::rules,
};
use crate::event_type::ports::EventTypeCatalog;
use std::fmt;

/// Default envelope validator.
///
/// Without a catalog only the grammar and content rules apply; attaching a
/// catalog with [`DefaultEventValidator::with_catalog`] also checks that the
/// type is accepted for the envelope's platform.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event::domain::{Event, EventId, Seg};
/// use aicarus_protocol::event::ports::EventValidator;
/// use aicarus_protocol::event::validation::DefaultEventValidator;
/// use aicarus_protocol::event_type::registry::EventTypeRegistry;
///
/// let registry = EventTypeRegistry::new();
/// let validator = DefaultEventValidator::new().with_catalog(&registry);
///
/// let event = Event::new(
///     EventId::generate(),
///     "message.qq.group",
///     0,
///     "bot-1",
///     vec![Seg::message_metadata("m-1"), Seg::text("hi")],
/// );
/// assert!(validator.validate(&event).is_ok());
/// ```
#[derive(Clone, Default)]
pub struct DefaultEventValidator<'a> {
    config: ValidationConfig,
    catalog: Option<&'a (dyn EventTypeCatalog + Sync)>,
}

impl<'a> DefaultEventValidator<'a> {
    /// Creates a validator with the default configuration and no catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with a custom configuration and no catalog.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self {
            config,
            catalog: None,
        }
    }

    /// Attaches a catalog for per-platform checks.
    #[must_use]
    pub fn with_catalog(mut self, catalog: &'a (dyn EventTypeCatalog + Sync)) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Returns the current configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl fmt::Debug for DefaultEventValidator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultEventValidator")
            .field("config", &self.config)
            .field("has_catalog", &self.catalog.is_some())
            .finish()
    }
}

impl EventValidator for DefaultEventValidator<'_> {
    fn validate(&self, event: &Event) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = self.validate_type(event) {
            collect_errors(&mut errors, e);
        }

        if let Err(e) = self.validate_content(event) {
            collect_errors(&mut errors, e);
        }

        ValidationError::combine(errors).map_or(Ok(()), Err)
    }

    fn validate_type(&self, event: &Event) -> ValidationResult<()> {
        rules::validate_event_type(event)?;
        if let Some(catalog) = self.catalog {
            rules::validate_platform(event, catalog)?;
        }
        Ok(())
    }

    fn validate_content(&self, event: &Event) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = rules::validate_content_not_empty(event, &self.config) {
            errors.push(e);
        }

        if let Err(e) = rules::validate_content_units_count(event, &self.config) {
            errors.push(e);
        }

        if let Err(e) = rules::validate_message_metadata(event, &self.config) {
            errors.push(e);
        }

        if let Err(e) = rules::validate_action_responses(event) {
            collect_errors(&mut errors, e);
        }

        ValidationError::combine(errors).map_or(Ok(()), Err)
    }
}

/// Collects an error, flattening `Multiple` variants.
fn collect_errors(errors: &mut Vec<ValidationError>, error: ValidationError) {
    match error {
        ValidationError::Multiple(inner) => errors.extend(inner),
        other => errors.push(other),
    }
}
