//! The event type registry.
//!
//! One registry instance is created by the embedding process and shared by
//! reference (or `Arc`) with every component that needs it. Catalog and
//! suggestion cache sit behind a single reader/writer lock held only for the
//! duration of a call.

use super::schema::{CompiledRules, PlatformSchema};
use super::suggestion::{RelevanceScore, SuggestionConfig};
use crate::event_type::domain::{CORE_PLATFORM, CoreEventType, EventCategory, validate_event_type};
use crate::event_type::ports::EventTypeCatalog;
use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// Catalog entry for a registered type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRecord {
    description: String,
    platform: String,
    registered_at: DateTime<Utc>,
}

impl TypeRecord {
    /// Returns the description supplied at registration.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the platform the type was last registered under.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Returns when the type was last registered.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }
}

#[derive(Debug, Clone)]
struct SchemaEntry {
    schema: PlatformSchema,
    rules: Option<CompiledRules>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SuggestionKey {
    platform: String,
    action: String,
    context: String,
}

impl SuggestionKey {
    fn new(platform: &str, action: &str, context: &str) -> Self {
        Self {
            platform: platform.to_owned(),
            action: action.to_owned(),
            context: context.to_owned(),
        }
    }
}

#[derive(Debug, Default)]
struct RegistryState {
    records: HashMap<String, TypeRecord>,
    registration_order: Vec<String>,
    platform_types: HashMap<String, Vec<String>>,
    platform_order: Vec<String>,
    schemas: HashMap<String, SchemaEntry>,
    suggestions: HashMap<SuggestionKey, Vec<String>>,
}

impl RegistryState {
    fn insert(&mut self, event_type: &str, description: &str, platform: &str, at: DateTime<Utc>) {
        let record = TypeRecord {
            description: description.to_owned(),
            platform: platform.to_owned(),
            registered_at: at,
        };
        if self.records.insert(event_type.to_owned(), record).is_none() {
            self.registration_order.push(event_type.to_owned());
        }

        if !self.platform_types.contains_key(platform) {
            self.platform_order.push(platform.to_owned());
        }
        let listed = self.platform_types.entry(platform.to_owned()).or_default();
        if !listed.iter().any(|known| known == event_type) {
            listed.push(event_type.to_owned());
        }

        self.invalidate_suggestions(platform);
    }

    fn invalidate_suggestions(&mut self, platform: &str) {
        let before = self.suggestions.len();
        self.suggestions.retain(|key, _| key.platform != platform);
        let dropped = before.saturating_sub(self.suggestions.len());
        if dropped > 0 {
            debug!(platform, dropped, "invalidated cached suggestions");
        }
    }

    fn platform_types(&self, platform: &str) -> &[String] {
        self.platform_types
            .get(platform)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Catalog of known event types, platform schemas and cached suggestions.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event_type::registry::EventTypeRegistry;
///
/// let registry = EventTypeRegistry::new();
/// assert!(registry.register("message.qq.poke", "QQ poke", "qq"));
/// assert!(!registry.register("message.qq", "missing subtype", "qq"));
/// assert_eq!(registry.types_for_platform("qq"), vec!["message.qq.poke"]);
/// assert_eq!(registry.suggest("qq", "poke", ""), vec!["message.qq.poke"]);
/// ```
pub struct EventTypeRegistry<C = DefaultClock> {
    state: RwLock<RegistryState>,
    config: SuggestionConfig,
    clock: C,
}

impl EventTypeRegistry<DefaultClock> {
    /// Creates a registry seeded with the [`CoreEventType`] set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(DefaultClock)
    }

    /// Creates a registry with no types at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::empty_with_clock(DefaultClock)
    }
}

impl Default for EventTypeRegistry<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> EventTypeRegistry<C> {
    /// Creates a registry seeded with the core types, stamping registrations
    /// with the given clock.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        let registry = Self::empty_with_clock(clock);
        for core in CoreEventType::ALL {
            registry.register(core.as_str(), core.description(), CORE_PLATFORM);
        }
        registry
    }

    /// Creates an empty registry using the given clock.
    #[must_use]
    pub fn empty_with_clock(clock: C) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            config: SuggestionConfig::default(),
            clock,
        }
    }

    /// Replaces the suggestion configuration and drops every cached
    /// suggestion.
    #[must_use]
    pub fn with_config(mut self, config: SuggestionConfig) -> Self {
        self.config = config;
        self.write().suggestions.clear();
        self
    }

    /// Returns the suggestion configuration.
    #[must_use]
    pub const fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a type string under a platform.
    ///
    /// Returns `false` without touching the catalog when the string fails the
    /// grammar. Re-registering a type overwrites its description and
    /// timestamp but never duplicates it in the platform listing.
    pub fn register(&self, event_type: &str, description: &str, platform: &str) -> bool {
        if !validate_event_type(event_type) {
            warn!(event_type, platform, "rejected malformed event type");
            return false;
        }
        let registered_at = self.clock.utc();
        self.write()
            .insert(event_type, description, platform, registered_at);
        debug!(event_type, platform, "registered event type");
        true
    }

    /// Registers a type string under the `core` platform.
    pub fn register_core(&self, event_type: &str, description: &str) -> bool {
        self.register(event_type, description, CORE_PLATFORM)
    }

    /// Registers a batch of types for one platform.
    ///
    /// Invalid entries are skipped; the accepted type strings are returned in
    /// input order.
    pub fn register_platform_types<I, K, V>(&self, platform: &str, types: I) -> Vec<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let registered_at = self.clock.utc();
        let mut state = self.write();
        let mut accepted = Vec::new();
        for (type_key, description) in types {
            let event_type = type_key.as_ref();
            if validate_event_type(event_type) {
                state.insert(event_type, description.as_ref(), platform, registered_at);
                accepted.push(event_type.to_owned());
            } else {
                warn!(event_type, platform, "skipped malformed event type in batch");
            }
        }
        debug!(platform, accepted = accepted.len(), "registered platform types");
        accepted
    }

    /// Stores a platform schema and registers the types it defines.
    ///
    /// Schema storage itself never fails, so this always returns `true`; the
    /// individual type definitions are still subject to the grammar.
    pub fn register_platform_schema(&self, platform: &str, schema: PlatformSchema) -> bool {
        let rules = schema
            .validation_rules
            .as_ref()
            .and_then(|rules| CompiledRules::compile(platform, rules));
        let types = schema.types.clone();
        debug!(platform, version = schema.version(), "registered platform schema");
        self.write()
            .schemas
            .insert(platform.to_owned(), SchemaEntry { schema, rules });
        self.register_platform_types(platform, &types);
        true
    }

    /// Returns `true` if the exact type string has been registered.
    #[must_use]
    pub fn is_registered(&self, event_type: &str) -> bool {
        self.read().records.contains_key(event_type)
    }

    /// Returns the registered description, or an empty string if unknown.
    #[must_use]
    pub fn describe(&self, event_type: &str) -> String {
        self.read()
            .records
            .get(event_type)
            .map(|record| record.description.clone())
            .unwrap_or_default()
    }

    /// Returns the catalog entry for a type string.
    #[must_use]
    pub fn record(&self, event_type: &str) -> Option<TypeRecord> {
        self.read().records.get(event_type).cloned()
    }

    /// Returns the types registered under a platform, in registration order.
    #[must_use]
    pub fn types_for_platform(&self, platform: &str) -> Vec<String> {
        self.read().platform_types(platform).to_vec()
    }

    /// Returns every registered type of a category, in registration order.
    #[must_use]
    pub fn types_for_category(&self, category: EventCategory) -> Vec<String> {
        self.types_with_prefix(category.as_str())
    }

    /// Returns every registered type starting with `prefix + "."`.
    ///
    /// `prefix` may span several segments, e.g. `"message.qq"`.
    #[must_use]
    pub fn types_with_prefix(&self, prefix: &str) -> Vec<String> {
        let dotted = format!("{prefix}.");
        self.read()
            .registration_order
            .iter()
            .filter(|event_type| event_type.starts_with(dotted.as_str()))
            .cloned()
            .collect()
    }

    /// Returns every registered type, in registration order.
    #[must_use]
    pub fn all_types(&self) -> Vec<String> {
        self.read().registration_order.clone()
    }

    /// Returns the platform keys in first-registration order.
    #[must_use]
    pub fn platforms(&self) -> Vec<String> {
        self.read().platform_order.clone()
    }

    /// Returns the schema stored for a platform.
    #[must_use]
    pub fn platform_schema(&self, platform: &str) -> Option<PlatformSchema> {
        self.read()
            .schemas
            .get(platform)
            .map(|entry| entry.schema.clone())
    }

    /// Returns the capabilities declared by a platform's schema.
    #[must_use]
    pub fn platform_capabilities(&self, platform: &str) -> Vec<String> {
        self.read()
            .schemas
            .get(platform)
            .map(|entry| entry.schema.capabilities.clone())
            .unwrap_or_default()
    }

    /// Resolves a schema alias (e.g. `send_group_message`) to its type string.
    #[must_use]
    pub fn resolve_alias(&self, platform: &str, alias: &str) -> Option<String> {
        self.read()
            .schemas
            .get(platform)
            .and_then(|entry| entry.schema.type_mapping.get(alias).cloned())
    }

    /// Checks whether a type string is acceptable for a platform.
    ///
    /// - no schema, or an empty one: the plain grammar check;
    /// - schema with rules: the pattern, or failing that the prefix list;
    /// - schema without rules: membership in the platform's registered types.
    #[must_use]
    pub fn validate_for_platform(&self, event_type: &str, platform: &str) -> bool {
        let state = self.read();
        let Some(entry) = state
            .schemas
            .get(platform)
            .filter(|entry| !entry.schema.is_empty())
        else {
            return validate_event_type(event_type);
        };
        match &entry.rules {
            Some(rules) => rules.permits(event_type),
            None => state
                .platform_types(platform)
                .iter()
                .any(|known| known == event_type),
        }
    }

    /// Scores a type string with the registry's configuration.
    #[must_use]
    pub fn relevance(&self, event_type: &str, action: &str, context: &str) -> RelevanceScore {
        self.config.score(event_type, action, context)
    }

    /// Suggests types of a platform ranked by relevance to an action and
    /// optional context.
    ///
    /// Results are cached per `(platform, action, context)` until the next
    /// registration under that platform.
    #[must_use]
    pub fn suggest(&self, platform: &str, action: &str, context: &str) -> Vec<String> {
        let key = SuggestionKey::new(platform, action, context);
        {
            let state = self.read();
            if let Some(cached) = state.suggestions.get(&key) {
                return cached.clone();
            }
        }

        let mut state = self.write();
        if let Some(cached) = state.suggestions.get(&key) {
            return cached.clone();
        }
        let ranked = self.config.rank(
            state.platform_types(platform).iter().map(String::as_str),
            action,
            context,
        );
        debug!(platform, action, context, matches = ranked.len(), "computed suggestions");
        state.suggestions.insert(key, ranked.clone());
        ranked
    }
}

impl<C: Clock> EventTypeCatalog for EventTypeRegistry<C> {
    fn is_registered(&self, event_type: &str) -> bool {
        Self::is_registered(self, event_type)
    }

    fn validate_for_platform(&self, event_type: &str, platform: &str) -> bool {
        Self::validate_for_platform(self, event_type, platform)
    }
}

impl<C> fmt::Debug for EventTypeRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("EventTypeRegistry")
            .field("types", &state.records.len())
            .field("platforms", &state.platform_order)
            .field("schemas", &state.schemas.len())
            .field("cached_suggestions", &state.suggestions.len())
            .finish_non_exhaustive()
    }
}
