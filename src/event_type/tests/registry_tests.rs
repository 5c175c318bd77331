//! Unit tests for the event type registry catalog.

use crate::event_type::{
    domain::{CORE_PLATFORM, CoreEventType, EventCategory},
    ports::EventTypeCatalog,
    registry::EventTypeRegistry,
};
use chrono::Utc;
use rstest::{fixture, rstest};
use std::collections::BTreeMap;

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
fn registry() -> EventTypeRegistry {
    EventTypeRegistry::new()
}

#[fixture]
fn empty_registry() -> EventTypeRegistry {
    EventTypeRegistry::empty()
}

// ============================================================================
// Seeding
// ============================================================================

#[rstest]
fn new_registry_is_seeded_with_core_types(registry: EventTypeRegistry) {
    let expected: Vec<String> = CoreEventType::ALL
        .iter()
        .map(|core| core.as_str().to_owned())
        .collect();

    assert_eq!(registry.types_for_platform(CORE_PLATFORM), expected);
    assert_eq!(registry.platforms(), vec![CORE_PLATFORM]);
    assert_eq!(
        registry.describe("meta.core.heartbeat"),
        CoreEventType::MetaHeartbeat.description()
    );
}

#[rstest]
fn empty_registry_has_no_types(empty_registry: EventTypeRegistry) {
    assert!(empty_registry.all_types().is_empty());
    assert!(empty_registry.platforms().is_empty());
}

// ============================================================================
// Registration
// ============================================================================

#[rstest]
fn register_accepts_valid_type(empty_registry: EventTypeRegistry) {
    let before = Utc::now();
    assert!(empty_registry.register("message.qq.group", "Group message", "qq"));
    let after = Utc::now();

    assert!(empty_registry.is_registered("message.qq.group"));
    let record = empty_registry
        .record("message.qq.group")
        .expect("registered type has a record");
    assert_eq!(record.description(), "Group message");
    assert_eq!(record.platform(), "qq");
    assert!(record.registered_at() >= before && record.registered_at() <= after);
}

#[rstest]
#[case("message.qq")]
#[case("message..group")]
#[case("chat.qq.group")]
#[case("")]
fn register_rejects_malformed_type_without_mutation(
    empty_registry: EventTypeRegistry,
    #[case] event_type: &str,
) {
    assert!(!empty_registry.register(event_type, "bad", "qq"));

    assert!(!empty_registry.is_registered(event_type));
    assert!(empty_registry.types_for_platform("qq").is_empty());
    assert!(empty_registry.platforms().is_empty());
}

#[rstest]
fn reregistration_overwrites_description_without_duplicate_listing(
    empty_registry: EventTypeRegistry,
) {
    assert!(empty_registry.register("notice.qq.poke", "first", "qq"));
    assert!(empty_registry.register("notice.qq.poke", "second", "qq"));

    assert_eq!(empty_registry.describe("notice.qq.poke"), "second");
    assert_eq!(empty_registry.types_for_platform("qq"), vec!["notice.qq.poke"]);
    assert_eq!(empty_registry.all_types(), vec!["notice.qq.poke"]);
}

#[rstest]
fn register_core_uses_core_platform(empty_registry: EventTypeRegistry) {
    assert!(empty_registry.register_core("meta.core.reconnect", "Adapter reconnected"));

    assert_eq!(
        empty_registry.types_for_platform(CORE_PLATFORM),
        vec!["meta.core.reconnect"]
    );
}

#[rstest]
fn batch_registration_skips_invalid_entries_in_order(empty_registry: EventTypeRegistry) {
    let accepted = empty_registry.register_platform_types(
        "discord",
        [
            ("message.discord.guild", "Guild message"),
            ("message.discord", "missing subtype"),
            ("notice.discord.member_join", "Member joined"),
            ("bogus", "not a type"),
        ],
    );

    assert_eq!(
        accepted,
        vec!["message.discord.guild", "notice.discord.member_join"]
    );
    assert_eq!(empty_registry.types_for_platform("discord"), accepted);
}

#[rstest]
fn batch_registration_accepts_map_references(empty_registry: EventTypeRegistry) {
    let mut types = BTreeMap::new();
    types.insert("request.qq.friend_add".to_owned(), "Friend request".to_owned());
    types.insert("message.qq.private".to_owned(), "Private message".to_owned());

    let accepted = empty_registry.register_platform_types("qq", &types);

    assert_eq!(
        accepted,
        vec!["message.qq.private", "request.qq.friend_add"]
    );
}

// ============================================================================
// Queries
// ============================================================================

#[rstest]
fn describe_unknown_type_is_empty(registry: EventTypeRegistry) {
    assert_eq!(registry.describe("message.qq.nothing"), "");
    assert!(registry.record("message.qq.nothing").is_none());
}

#[rstest]
fn types_for_unknown_platform_is_empty(registry: EventTypeRegistry) {
    assert!(registry.types_for_platform("telegram").is_empty());
}

#[rstest]
fn platforms_keep_first_registration_order(empty_registry: EventTypeRegistry) {
    empty_registry.register("message.qq.group", "", "qq");
    empty_registry.register("message.discord.guild", "", "discord");
    empty_registry.register("notice.qq.poke", "", "qq");

    assert_eq!(empty_registry.platforms(), vec!["qq", "discord"]);
}

#[rstest]
fn types_for_category_filters_by_dotted_prefix(registry: EventTypeRegistry) {
    registry.register("action.qq.send_group_msg", "", "qq");
    registry.register("action_response.qq.ok", "", "qq");

    let actions = registry.types_for_category(EventCategory::Action);

    assert_eq!(
        actions,
        vec!["action.core.send", "action.core.manage", "action.qq.send_group_msg"]
    );
}

#[rstest]
fn types_with_prefix_spans_segments(registry: EventTypeRegistry) {
    registry.register("message.qq.group", "", "qq");
    registry.register("message.qq.private", "", "qq");
    registry.register("message.qqguild.channel", "", "qqguild");

    assert_eq!(
        registry.types_with_prefix("message.qq"),
        vec!["message.qq.group", "message.qq.private"]
    );
}

// ============================================================================
// Platform validation without schema
// ============================================================================

#[rstest]
#[case("message.telegram.text", true)]
#[case("message.telegram", false)]
fn validation_without_schema_falls_back_to_grammar(
    registry: EventTypeRegistry,
    #[case] event_type: &str,
    #[case] expected: bool,
) {
    assert_eq!(registry.validate_for_platform(event_type, "telegram"), expected);
}

#[rstest]
fn registry_serves_as_catalog(registry: EventTypeRegistry) {
    fn check(catalog: &dyn EventTypeCatalog) -> (bool, bool) {
        (
            catalog.is_registered("message.core.send"),
            catalog.validate_for_platform("message.qq.group", "qq"),
        )
    }

    assert_eq!(check(&registry), (true, true));
}

#[rstest]
fn debug_output_summarises_state(registry: EventTypeRegistry) {
    let rendered = format!("{registry:?}");
    assert!(rendered.contains("EventTypeRegistry"));
    assert!(rendered.contains("core"));
}
