//! Platform schemas: per-platform bundles of type definitions, validation
//! rules and capability metadata.
//!
//! # Wire shape
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "platform": "qq",
//!   "types": { "message.qq.group": "Group message" },
//!   "validation_rules": { "pattern": "^message\\.qq\\.", "allowed_prefixes": ["message.qq"] },
//!   "capabilities": ["text", "image"],
//!   "type_mapping": { "send_group_message": "action.qq.send_group_msg" }
//! }
//! ```

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Schema version assumed when a schema does not declare one.
pub const DEFAULT_SCHEMA_VERSION: &str = "1.0.0";

/// A platform-supplied schema.
///
/// Every field is optional on the wire. Type definitions and alias mappings
/// keep the order they were written in, and batch registration from a schema
/// follows that order.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event_type::registry::{PlatformSchema, SchemaRules};
///
/// let schema = PlatformSchema::new()
///     .with_version("2.1.0")
///     .with_type("message.qq.group", "Group message")
///     .with_capability("image")
///     .with_validation_rules(SchemaRules::new().with_allowed_prefix("message.qq"));
/// assert_eq!(schema.version(), "2.1.0");
/// assert_eq!(schema.types.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformSchema {
    /// Schema version string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Platform token the schema describes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Type strings and their descriptions.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub types: IndexMap<String, String>,
    /// Rules applied by platform-scoped validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_rules: Option<SchemaRules>,
    /// Content capabilities the platform supports (e.g. `image`, `poke`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,
    /// Free-text aliases mapped to concrete type strings.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub type_mapping: IndexMap<String, String>,
}

impl PlatformSchema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no field is set.
    ///
    /// Platform-scoped validation treats an empty schema as no schema.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Returns the declared version or [`DEFAULT_SCHEMA_VERSION`].
    #[must_use]
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_SCHEMA_VERSION)
    }

    /// Sets the schema version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the platform token.
    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// Adds a type definition.
    #[must_use]
    pub fn with_type(
        mut self,
        event_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.types.insert(event_type.into(), description.into());
        self
    }

    /// Sets the validation rules.
    #[must_use]
    pub fn with_validation_rules(mut self, rules: SchemaRules) -> Self {
        self.validation_rules = Some(rules);
        self
    }

    /// Adds a capability.
    #[must_use]
    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.push(capability.into());
        self
    }

    /// Adds an alias for a type string.
    #[must_use]
    pub fn with_type_mapping(
        mut self,
        alias: impl Into<String>,
        event_type: impl Into<String>,
    ) -> Self {
        self.type_mapping.insert(alias.into(), event_type.into());
        self
    }
}

/// Validation rules carried by a platform schema.
///
/// When both are present the pattern decides and the prefix list is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaRules {
    /// Regular expression matched from the start of the type string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Accepted type string prefixes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_prefixes: Option<Vec<String>>,
}

impl SchemaRules {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pattern rule.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Appends an allowed prefix.
    #[must_use]
    pub fn with_allowed_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.allowed_prefixes
            .get_or_insert_with(Vec::new)
            .push(prefix.into());
        self
    }

    /// Returns `true` if neither rule is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.pattern.is_none() && self.allowed_prefixes.is_none()
    }
}

/// Schema rules prepared for repeated evaluation.
#[derive(Debug, Clone)]
pub(super) enum CompiledRules {
    Pattern(Regex),
    /// The pattern failed to compile; nothing is accepted.
    BrokenPattern,
    Prefixes(Vec<String>),
}

impl CompiledRules {
    /// Compiles a rule set, returning `None` when it has no rules.
    pub(super) fn compile(platform: &str, rules: &SchemaRules) -> Option<Self> {
        if let Some(pattern) = &rules.pattern {
            return Some(match Regex::new(pattern) {
                Ok(regex) => Self::Pattern(regex),
                Err(err) => {
                    warn!(
                        platform,
                        pattern,
                        error = %err,
                        "platform schema pattern does not compile"
                    );
                    Self::BrokenPattern
                }
            });
        }
        rules.allowed_prefixes.clone().map(Self::Prefixes)
    }

    pub(super) fn permits(&self, event_type: &str) -> bool {
        match self {
            Self::Pattern(regex) => regex.find(event_type).is_some_and(|m| m.start() == 0),
            Self::BrokenPattern => false,
            Self::Prefixes(prefixes) => prefixes
                .iter()
                .any(|prefix| event_type.starts_with(prefix.as_str())),
        }
    }
}
