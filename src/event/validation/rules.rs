//! Individual validation rules.
//!
//! Each rule is a pure function checking one aspect of an envelope; it
//! returns `Ok(())` or the specific [`ValidationError`].

use crate::event::{
    domain::{Event, MESSAGE_METADATA_KIND},
    error::ValidationError,
    ports::ValidationConfig,
};
use crate::event_type::{
    domain::{EventCategory, EventType},
    ports::EventTypeCatalog,
};

/// Validates the type string against the grammar.
///
/// # Errors
///
/// Returns `ValidationError::InvalidEventType` naming the first violation.
pub fn validate_event_type(event: &Event) -> Result<(), ValidationError> {
    EventType::parse(event.event_type())?;
    Ok(())
}

/// Validates that the catalog accepts the type for the envelope's platform.
///
/// Envelopes whose platform cannot be derived are left to
/// [`validate_event_type`].
///
/// # Errors
///
/// Returns `ValidationError::UnsupportedForPlatform` if the catalog rejects it.
pub fn validate_platform<K>(event: &Event, catalog: &K) -> Result<(), ValidationError>
where
    K: EventTypeCatalog + ?Sized,
{
    let Some(platform) = event.platform() else {
        return Ok(());
    };
    if catalog.validate_for_platform(event.event_type(), platform) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedForPlatform {
            event_type: event.event_type().to_owned(),
            platform: platform.to_owned(),
        })
    }
}

/// Validates that the envelope carries content, unless configured otherwise.
///
/// # Errors
///
/// Returns `ValidationError::EmptyContent` if the content list is empty.
pub fn validate_content_not_empty(
    event: &Event,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    if event.content().is_empty() && !config.allow_empty_content {
        return Err(ValidationError::EmptyContent);
    }
    Ok(())
}

/// Validates the number of top-level content units.
///
/// # Errors
///
/// Returns `ValidationError::TooManyContentUnits` above the configured limit.
pub fn validate_content_units_count(
    event: &Event,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let actual = event.content().len();
    if actual > config.max_content_units {
        return Err(ValidationError::TooManyContentUnits {
            max: config.max_content_units,
            actual,
        });
    }
    Ok(())
}

/// Validates that a message event starts with its `message_metadata` unit.
///
/// Other categories pass unchanged.
///
/// # Errors
///
/// Returns `ValidationError::MissingMessageMetadata` if the first unit is
/// missing or of another kind.
pub fn validate_message_metadata(
    event: &Event,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    if !config.require_message_metadata || !event.is_message() {
        return Ok(());
    }
    match event.content().first() {
        Some(first) if first.is_kind(MESSAGE_METADATA_KIND) => Ok(()),
        _ => Err(ValidationError::MissingMessageMetadata),
    }
}

/// Validates that every `action_response` unit names the action it answers.
///
/// A unit counts as an action response when its kind starts with
/// `action_response.`; it must carry a non-empty string `original_event_id`.
///
/// # Errors
///
/// Returns `ValidationError::MissingOriginalEventId` for the first offending
/// unit, or `ValidationError::Multiple` when several units fail.
pub fn validate_action_responses(event: &Event) -> Result<(), ValidationError> {
    let prefix = EventCategory::ActionResponse.prefix();
    let errors: Vec<ValidationError> = event
        .content()
        .iter()
        .enumerate()
        .filter(|(_, seg)| seg.kind().starts_with(prefix))
        .filter(|(_, seg)| {
            !seg.get("original_event_id")
                .and_then(serde_json::Value::as_str)
                .is_some_and(|id| !id.is_empty())
        })
        .map(|(index, _)| ValidationError::MissingOriginalEventId { index })
        .collect();
    ValidationError::combine(errors).map_or(Ok(()), Err)
}
