//! Behavioural integration tests for the adapter and core exchange.
//!
//! These tests walk an envelope through the whole path: an adapter builds
//! and sends it, the core decodes and validates it, then answers actions
//! with action responses the adapter can correlate.

use aicarus_protocol::event::{
    PROTOCOL_VERSION,
    builder::EventBuilder,
    codec::{from_json_str, to_json_string},
    domain::{ActionOutcome, ConversationInfo, ConversationType, MessageMetadata, Seg, UserInfo},
    error::ValidationError,
    ports::EventValidator,
    validation::DefaultEventValidator,
};
use aicarus_protocol::event_type::registry::{EventTypeRegistry, PlatformSchema, SchemaRules};
use eyre::Result;
use mockable::DefaultClock;
use serde_json::json;

fn qq_registry() -> EventTypeRegistry {
    let registry = EventTypeRegistry::new();
    let rules = SchemaRules::new()
        .with_allowed_prefix("message.qq")
        .with_allowed_prefix("action.qq")
        .with_allowed_prefix("action_response.qq");
    registry.register_platform_schema(
        "qq",
        PlatformSchema::new()
            .with_type("message.qq.group", "Group message")
            .with_type("action.qq.send_group_msg", "Send a group message")
            .with_validation_rules(rules),
    );
    registry
}

// ============================================================================
// Scenario: Inbound message reaches the core intact
// ============================================================================

/// When an adapter forwards a group message, the core decodes an envelope
/// that passes validation against the adapter's schema.
#[test]
fn inbound_message_is_decoded_and_validated() -> Result<()> {
    // Arrange
    let clock = DefaultClock;
    let registry = qq_registry();
    let validator = DefaultEventValidator::new().with_catalog(&registry);
    let sent = EventBuilder::new(&clock)
        .message(
            "message.qq.group",
            "10001",
            MessageMetadata::new("m-77"),
            vec![Seg::at("42", "@Alice"), Seg::text(" ping")],
        )
        .with_user_info(UserInfo::new().with_user_id("7").with_user_nickname("Bob"))
        .with_conversation_info(ConversationInfo::new("g-1", ConversationType::Group))
        .build();

    // Act
    let wire = to_json_string(&sent)?;
    let received = from_json_str(&wire)?;

    // Assert
    assert_eq!(received, sent);
    assert!(validator.validate(&received).is_ok());
    assert_eq!(received.platform(), Some("qq"));
    assert_eq!(received.message_id(), Some("m-77"));
    assert_eq!(received.text_content(), " ping");
    assert_eq!(received.filter_segs("at").count(), 1);
    Ok(())
}

// ============================================================================
// Scenario: Core action is answered by the adapter
// ============================================================================

/// When the core sends an action, the adapter's response names the action
/// it answers and validates on the core side.
#[test]
fn action_round_trip_correlates_response() -> Result<()> {
    // Arrange
    let clock = DefaultClock;
    let registry = qq_registry();
    let validator = DefaultEventValidator::new().with_catalog(&registry);
    let builder = EventBuilder::new(&clock);
    let mut target = serde_json::Map::new();
    target.insert("group_id".to_owned(), json!("g-1"));
    let action = builder
        .action(
            "action.qq.send_group_msg",
            "10001",
            vec![Seg::data("action.qq.send_group_msg", target), Seg::text("pong")],
        )
        .build();

    // Act
    let adapter_view = from_json_str(&to_json_string(&action)?)?;
    let response = builder
        .action_response(
            &adapter_view,
            "success",
            ActionOutcome::new()
                .with_status_code(0)
                .with_data(json!({"message_id": "m-78"})),
        )
        .build();
    let core_view = from_json_str(&to_json_string(&response)?)?;

    // Assert
    assert!(validator.validate(&action).is_ok());
    assert!(validator.validate(&core_view).is_ok());
    assert!(core_view.is_action_response());
    let unit = core_view
        .find_seg("action_response.qq.success")
        .expect("response unit present");
    assert_eq!(
        unit.get("original_event_id"),
        Some(&json!(action.event_id().as_str()))
    );
    assert_eq!(
        unit.get("original_action_type"),
        Some(&json!("action.qq.send_group_msg"))
    );
    Ok(())
}

// ============================================================================
// Scenario: The core rejects traffic outside an adapter's schema
// ============================================================================

/// An envelope whose type the platform schema does not allow fails
/// validation with a platform error.
#[test]
fn out_of_schema_event_is_rejected() -> Result<()> {
    // Arrange
    let registry = qq_registry();
    let validator = DefaultEventValidator::new().with_catalog(&registry);
    let wire = json!({
        "event_id": "evt-9",
        "event_type": "notice.qq.group_decrease",
        "time": 1,
        "bot_id": "10001",
        "content": [{"type": "notice.qq.group_decrease", "data": {"user_id": "42"}}]
    });

    // Act
    let received = from_json_str(&wire.to_string())?;
    let result = validator.validate(&received);

    // Assert
    assert_eq!(
        result,
        Err(ValidationError::UnsupportedForPlatform {
            event_type: "notice.qq.group_decrease".to_owned(),
            platform: "qq".to_owned(),
        })
    );
    Ok(())
}

/// The protocol revision is exposed for handshakes.
#[test]
fn protocol_version_is_published() {
    assert_eq!(PROTOCOL_VERSION, "1.6.0");
}
