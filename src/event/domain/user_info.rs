//! Descriptor of the user an event concerns.

use serde_json::{Map, Value};

/// Platform user details. Every field is optional.
///
/// # Examples
///
/// ```
/// use aicarus_protocol::event::domain::UserInfo;
///
/// let user = UserInfo::new()
///     .with_user_id("12345")
///     .with_user_nickname("Ann")
///     .with_age(30);
/// assert_eq!(user.user_id.as_deref(), Some("12345"));
/// assert!(!user.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserInfo {
    /// Platform user identifier.
    pub user_id: Option<String>,
    /// Account nickname.
    pub user_nickname: Option<String>,
    /// Group card name.
    pub user_cardname: Option<String>,
    /// Group title.
    pub user_titlename: Option<String>,
    /// Permission level within the conversation (e.g. `owner`, `admin`).
    pub permission_level: Option<String>,
    /// Role within the conversation.
    pub role: Option<String>,
    /// Platform level.
    pub level: Option<String>,
    /// Sex as reported by the platform.
    pub sex: Option<String>,
    /// Age in years.
    pub age: Option<u32>,
    /// Area or region.
    pub area: Option<String>,
    /// Platform fields without a dedicated slot.
    pub additional_data: Map<String, Value>,
}

impl UserInfo {
    /// Creates an empty descriptor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Sets the user identifier.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Sets the nickname.
    #[must_use]
    pub fn with_user_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.user_nickname = Some(nickname.into());
        self
    }

    /// Sets the group card name.
    #[must_use]
    pub fn with_user_cardname(mut self, cardname: impl Into<String>) -> Self {
        self.user_cardname = Some(cardname.into());
        self
    }

    /// Sets the group title.
    #[must_use]
    pub fn with_user_titlename(mut self, titlename: impl Into<String>) -> Self {
        self.user_titlename = Some(titlename.into());
        self
    }

    /// Sets the permission level.
    #[must_use]
    pub fn with_permission_level(mut self, permission_level: impl Into<String>) -> Self {
        self.permission_level = Some(permission_level.into());
        self
    }

    /// Sets the role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the platform level.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Sets the sex.
    #[must_use]
    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = Some(sex.into());
        self
    }

    /// Sets the age.
    #[must_use]
    pub const fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Sets the area.
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    /// Adds an extension field.
    #[must_use]
    pub fn with_additional(mut self, key: impl Into<String>, value: Value) -> Self {
        self.additional_data.insert(key.into(), value);
        self
    }
}
