//! Content units ("segs"): the atomic, tagged building blocks of event content.
//!
//! Most units carry a string-keyed mapping of JSON values. Two kinds are
//! special: `text` carries a plain string and `seglist` carries an ordered
//! list of nested units.

use serde_json::{Map, Value};

/// Kind tag of a text unit.
pub const TEXT_KIND: &str = "text";
/// Kind tag of a nested list unit.
pub const SEGLIST_KIND: &str = "seglist";
/// Kind tag of the metadata unit that heads message events.
pub const MESSAGE_METADATA_KIND: &str = "message_metadata";
/// Kind substituted when a decoded unit carries no tag.
pub const UNKNOWN_KIND: &str = "unknown";

/// A single content unit.
///
/// # Serialisation
///
/// Every unit encodes as `{"type": kind, "data": payload}`:
///
/// ```json
/// { "type": "text", "data": "Hello" }
/// { "type": "seglist", "data": [ { "type": "face", "data": { "id": "14" } } ] }
/// { "type": "at", "data": { "user_id": "42", "display_name": "@Ann" } }
/// ```
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event::domain::Seg;
///
/// let unit = Seg::seglist([Seg::text("hi "), Seg::at("42", "@Ann")]);
/// assert_eq!(unit.kind(), "seglist");
/// assert_eq!(unit.as_seglist().map(<[Seg]>::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Seg {
    /// Plain text.
    Text(String),
    /// Ordered nested units.
    List(Vec<Seg>),
    /// Any other kind, with a mapping payload.
    Data {
        /// Kind tag, e.g. `image` or `action.qq.send_group_msg`.
        kind: String,
        /// Payload fields.
        data: Map<String, Value>,
    },
}

impl Seg {
    /// Creates a text unit.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a nested list unit.
    #[must_use]
    pub fn seglist(children: impl IntoIterator<Item = Self>) -> Self {
        Self::List(children.into_iter().collect())
    }

    /// Creates a unit with a mapping payload.
    ///
    /// The special kinds `text` and `seglist` are coerced the way the decoder
    /// coerces them, so a `Data` unit never carries either tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use aicarus_protocol::event::domain::Seg;
    /// use serde_json::{Map, json};
    ///
    /// let mut data = Map::new();
    /// data.insert("text".to_owned(), json!("hi"));
    /// assert_eq!(Seg::data("text", data), Seg::text("hi"));
    /// ```
    #[must_use]
    pub fn data(kind: impl Into<String>, data: Map<String, Value>) -> Self {
        let kind_tag = kind.into();
        match kind_tag.as_str() {
            TEXT_KIND | SEGLIST_KIND => Self::new(kind_tag, Value::Object(data)),
            _ => Self::Data {
                kind: kind_tag,
                data,
            },
        }
    }

    /// Creates an `@` mention.
    #[must_use]
    pub fn at(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::data(
            "at",
            fields([
                ("user_id", Value::String(user_id.into())),
                ("display_name", Value::String(display_name.into())),
            ]),
        )
    }

    /// Creates an image reference.
    #[must_use]
    pub fn image(url: impl Into<String>, file_id: impl Into<String>) -> Self {
        Self::data(
            "image",
            fields([
                ("url", Value::String(url.into())),
                ("file_id", Value::String(file_id.into())),
            ]),
        )
    }

    /// Creates a reply marker pointing at a platform message.
    #[must_use]
    pub fn reply(message_id: impl Into<String>) -> Self {
        Self::data(
            "reply",
            fields([("message_id", Value::String(message_id.into()))]),
        )
    }

    /// Creates a platform emoji.
    #[must_use]
    pub fn face(face_id: impl Into<String>) -> Self {
        Self::data("face", fields([("id", Value::String(face_id.into()))]))
    }

    /// Creates a `message_metadata` unit carrying only a message id.
    #[must_use]
    pub fn message_metadata(message_id: impl Into<String>) -> Self {
        super::MessageMetadata::new(message_id).into_seg()
    }

    /// Returns the kind tag.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Text(_) => TEXT_KIND,
            Self::List(_) => SEGLIST_KIND,
            Self::Data { kind, .. } => kind,
        }
    }

    /// Returns the text of a text unit.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the children of a list unit.
    #[must_use]
    pub fn as_seglist(&self) -> Option<&[Self]> {
        match self {
            Self::List(children) => Some(children),
            _ => None,
        }
    }

    /// Returns the payload of a mapping unit.
    #[must_use]
    pub const fn data_map(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Data { data, .. } => Some(data),
            _ => None,
        }
    }

    /// Returns a payload field of a mapping unit.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data_map().and_then(|data| data.get(key))
    }

    /// Returns `true` if the unit has the given kind.
    #[must_use]
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind() == kind
    }
}

fn fields<const N: usize>(entries: [(&str, Value); N]) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}
