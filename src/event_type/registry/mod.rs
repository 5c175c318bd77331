//! The event type registry: catalog, platform schemas and suggestions.

mod schema;
mod store;
mod suggestion;

pub use schema::{DEFAULT_SCHEMA_VERSION, PlatformSchema, SchemaRules};
pub use store::{EventTypeRegistry, TypeRecord};
pub use suggestion::{KeywordHint, RelevanceScore, SuggestionConfig};
