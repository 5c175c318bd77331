//! Unit tests for the envelope builders.

use crate::event::{
    builder::EventBuilder,
    domain::{
        ActionOutcome, ConversationInfo, ConversationType, Event, EventId, MessageMetadata, Seg,
        UserInfo,
    },
};
use chrono::Utc;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Map, Value, json};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn payload(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

// ============================================================================
// Message events
// ============================================================================

#[rstest]
fn message_prepends_metadata_unit(clock: DefaultClock) {
    let event = EventBuilder::new(&clock)
        .message(
            "message.qq.group",
            "bot-1",
            MessageMetadata::new("m-1").with_field("sub_type", json!("normal")),
            vec![Seg::text("Hello"), Seg::face("14")],
        )
        .build();

    let kinds: Vec<&str> = event.content().iter().map(Seg::kind).collect();
    assert_eq!(kinds, vec!["message_metadata", "text", "face"]);
    assert_eq!(event.message_id(), Some("m-1"));
    assert_eq!(event.bot_id(), "bot-1");
    assert!(event.is_message());
}

#[rstest]
fn build_stamps_fresh_id_and_current_time(clock: DefaultClock) {
    let builder = EventBuilder::new(&clock);
    let before = Utc::now().timestamp_millis();
    let first = builder.action("action.qq.poke", "bot-1", Vec::new()).build();
    let second = builder.action("action.qq.poke", "bot-1", Vec::new()).build();
    let after = Utc::now().timestamp_millis();

    assert_ne!(first.event_id(), second.event_id());
    assert!(uuid::Uuid::parse_str(first.event_id().as_str()).is_ok());
    assert!((before..=after).contains(&first.time()));
}

#[rstest]
fn draft_accepts_optional_descriptors(clock: DefaultClock) {
    let event = EventBuilder::new(&clock)
        .message("message.qq.group", "bot-1", MessageMetadata::new("m-1"), Vec::new())
        .with_event_id(EventId::new("fixed"))
        .with_user_info(UserInfo::new().with_user_id("42"))
        .with_conversation_info(ConversationInfo::new("g-1", ConversationType::Group))
        .with_raw_data("raw")
        .build();

    assert_eq!(event.event_id().as_str(), "fixed");
    assert!(event.user_info().is_some());
    assert!(event.conversation_info().is_some());
    assert_eq!(event.raw_data(), Some("raw"));
}

// ============================================================================
// Single-unit events
// ============================================================================

#[rstest]
#[case("notice.qq.group_increase")]
#[case("request.qq.friend_add")]
#[case("meta.qq.heartbeat")]
fn single_unit_events_use_type_as_kind(clock: DefaultClock, #[case] event_type: &str) {
    let builder = EventBuilder::new(&clock);
    let data = payload(json!({"user_id": "42"}));
    let draft = match event_type.split('.').next() {
        Some("notice") => builder.notice(event_type, "bot-1", data),
        Some("request") => builder.request(event_type, "bot-1", data),
        _ => builder.meta(event_type, "bot-1", data),
    };
    let event = draft.build();

    assert_eq!(event.content().len(), 1);
    let unit = event.content().first().expect("one unit");
    assert_eq!(unit.kind(), event_type);
    assert_eq!(unit.get("user_id"), Some(&json!("42")));
}

#[rstest]
fn mismatched_category_still_builds(clock: DefaultClock) {
    let event = EventBuilder::new(&clock)
        .notice("message.qq.group", "bot-1", Map::new())
        .build();

    assert_eq!(event.event_type(), "message.qq.group");
}

#[rstest]
fn malformed_type_still_builds(clock: DefaultClock) {
    let event = EventBuilder::new(&clock)
        .action("action.qq", "bot-1", vec![Seg::text("x")])
        .build();

    assert_eq!(event.event_type(), "action.qq");
    assert_eq!(event.platform(), Some("qq"));
}

// ============================================================================
// Action responses
// ============================================================================

#[rstest]
fn action_response_answers_original(clock: DefaultClock) {
    let builder = EventBuilder::new(&clock);
    let action = builder
        .action(
            "action.qq.send_group_msg",
            "bot-7",
            vec![Seg::data(
                "action.qq.send_group_msg",
                payload(json!({"group_id": "g-1"})),
            )],
        )
        .build();

    let response = builder
        .action_response(
            &action,
            "success",
            ActionOutcome::new()
                .with_status_code(200)
                .with_message("sent")
                .with_data(json!({"message_id": "m-5"})),
        )
        .build();

    assert_eq!(response.event_type(), "action_response.qq.success");
    assert_eq!(response.bot_id(), "bot-7");
    assert!(response.is_action_response());
    let unit = response.content().first().expect("one unit");
    assert_eq!(unit.kind(), "action_response.qq.success");
    assert_eq!(
        unit.data_map().cloned().map(Value::Object),
        Some(json!({
            "original_event_id": action.event_id().as_str(),
            "original_action_type": "action.qq.send_group_msg",
            "status_code": 200,
            "message": "sent",
            "data": {"message_id": "m-5"}
        }))
    );
}

#[rstest]
fn action_response_omits_absent_outcome_fields(clock: DefaultClock) {
    let builder = EventBuilder::new(&clock);
    let action = builder.action("action.discord.kick", "bot-1", Vec::new()).build();
    let response = builder
        .action_response(&action, "failure", ActionOutcome::new())
        .build();

    let unit = response.content().first().expect("one unit");
    assert_eq!(unit.data_map().map(Map::len), Some(2));
    assert!(unit.get("status_code").is_none());
}

#[rstest]
fn action_response_to_platformless_event_uses_unknown(clock: DefaultClock) {
    let original = Event::from_value(json!({"event_type": "action", "bot_id": "b"}));
    let response = EventBuilder::new(&clock)
        .action_response(&original, "failure", ActionOutcome::new())
        .build();

    assert_eq!(response.event_type(), "action_response.unknown.failure");
    assert_eq!(response.platform(), Some("unknown"));
}
