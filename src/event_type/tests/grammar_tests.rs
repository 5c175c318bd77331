//! Unit tests for the type grammar, categories and core types.

use crate::event_type::domain::{
    CORE_PLATFORM, CoreEventType, EventCategory, EventType, EventTypeError, validate_event_type,
};
use rstest::rstest;

// ============================================================================
// Grammar
// ============================================================================

#[rstest]
#[case("message.qq.group")]
#[case("notice.discord.member_join")]
#[case("request.qq.friend_add")]
#[case("action.qq.send_group_msg")]
#[case("action_response.qq.success")]
#[case("meta.core.heartbeat")]
#[case("message.qq.group.anonymous")]
#[case("action.Discord.Send_2")]
fn accepts_well_formed_types(#[case] event_type: &str) {
    assert!(validate_event_type(event_type), "{event_type} should be valid");
}

#[rstest]
#[case("")]
#[case("message")]
#[case("message.qq")]
#[case("message..group")]
#[case(".message.qq.group")]
#[case("message.qq.group.")]
#[case("chat.qq.group")]
#[case("Message.qq.group")]
#[case("message.qq.group-1")]
#[case("message.qq.gr oup")]
#[case("message.qq.grüße")]
fn rejects_malformed_types(#[case] event_type: &str) {
    assert!(!validate_event_type(event_type), "{event_type} should be invalid");
}

#[rstest]
#[case("", EventTypeError::Empty)]
#[case("chat.qq.group", EventTypeError::UnknownCategory("chat".to_owned()))]
#[case("message", EventTypeError::MissingPlatform("message".to_owned()))]
#[case("message.qq", EventTypeError::MissingSubtype("message.qq".to_owned()))]
#[case(
    "message..group",
    EventTypeError::EmptySegment { value: "message..group".to_owned(), index: 1 }
)]
#[case(
    "message.qq.group-1",
    EventTypeError::InvalidCharacter {
        value: "message.qq.group-1".to_owned(),
        index: 2,
        character: '-',
    }
)]
fn parse_reports_first_violation(#[case] input: &str, #[case] expected: EventTypeError) {
    assert_eq!(EventType::parse(input), Err(expected));
}

#[rstest]
fn parse_exposes_segments() {
    let event_type = EventType::parse("message.qq.group.anonymous").expect("valid type");

    assert_eq!(event_type.category(), EventCategory::Message);
    assert_eq!(event_type.platform(), "qq");
    assert_eq!(
        event_type.subtypes().collect::<Vec<_>>(),
        vec!["group", "anonymous"]
    );
    assert_eq!(event_type.to_string(), "message.qq.group.anonymous");
}

#[rstest]
fn from_parts_assembles_and_validates() {
    let event_type =
        EventType::from_parts(EventCategory::Notice, "discord", "member_join").expect("valid");
    assert_eq!(event_type.as_str(), "notice.discord.member_join");

    assert!(EventType::from_parts(EventCategory::Notice, "", "member_join").is_err());
}

#[rstest]
fn event_type_serde_rejects_malformed_strings() {
    let parsed: EventType =
        serde_json::from_str("\"action.qq.send_group_msg\"").expect("valid type deserializes");
    assert_eq!(parsed.platform(), "qq");
    assert_eq!(
        serde_json::to_string(&parsed).expect("serializes"),
        "\"action.qq.send_group_msg\""
    );

    let rejected: Result<EventType, _> = serde_json::from_str("\"message.qq\"");
    assert!(rejected.is_err());
}

// ============================================================================
// Categories
// ============================================================================

#[rstest]
#[case(EventCategory::Message, "message")]
#[case(EventCategory::Notice, "notice")]
#[case(EventCategory::Request, "request")]
#[case(EventCategory::Action, "action")]
#[case(EventCategory::ActionResponse, "action_response")]
#[case(EventCategory::Meta, "meta")]
fn category_spelling_round_trips(#[case] category: EventCategory, #[case] spelling: &str) {
    assert_eq!(category.as_str(), spelling);
    assert_eq!(category.prefix(), format!("{spelling}."));
    assert_eq!(spelling.parse::<EventCategory>(), Ok(category));
}

#[rstest]
#[case("action_response.qq.success", Some(EventCategory::ActionResponse))]
#[case("action.qq.send", Some(EventCategory::Action))]
#[case("message.qq", Some(EventCategory::Message))]
#[case("messages.qq.group", None)]
#[case("unknown.unknown.unknown", None)]
fn category_of_uses_prefix(#[case] event_type: &str, #[case] expected: Option<EventCategory>) {
    assert_eq!(EventCategory::of(event_type), expected);
}

#[rstest]
fn unknown_category_does_not_parse() {
    assert!("system".parse::<EventCategory>().is_err());
}

// ============================================================================
// Core types
// ============================================================================

#[rstest]
fn every_core_type_is_well_formed() {
    for core in CoreEventType::ALL {
        let parsed = EventType::parse(core.as_str()).expect("core type follows the grammar");
        assert_eq!(parsed.platform(), CORE_PLATFORM);
        assert_eq!(parsed.category(), core.category());
        assert!(!core.description().is_empty());
    }
}

#[rstest]
fn core_types_round_trip_through_their_strings() {
    for core in CoreEventType::ALL {
        assert_eq!(CoreEventType::from_type_str(core.as_str()), Some(core));
    }
    assert_eq!(CoreEventType::from_type_str("message.qq.group"), None);
}

#[rstest]
fn core_types_cover_every_category() {
    for category in EventCategory::ALL {
        assert!(
            CoreEventType::ALL
                .iter()
                .any(|core| core.category() == category),
            "no core type for {category}"
        );
    }
}
