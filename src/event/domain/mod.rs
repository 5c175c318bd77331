//! Domain types for event envelopes.
//!
//! Immutable values: the envelope, its content units and the optional user
//! and conversation descriptors.

mod conversation_info;
mod event;
mod ids;
mod metadata;
mod seg;
mod user_info;

pub use conversation_info::{
    ConversationInfo, ConversationType, CustomConversationType, UNKNOWN_CONVERSATION_ID,
};
pub use event::{Event, UNKNOWN_BOT_ID, UNKNOWN_EVENT_TYPE};
pub use ids::{EventId, UNKNOWN_EVENT_ID};
pub use metadata::{ActionOutcome, MessageMetadata};
pub use seg::{MESSAGE_METADATA_KIND, SEGLIST_KIND, Seg, TEXT_KIND, UNKNOWN_KIND};
pub use user_info::UserInfo;
