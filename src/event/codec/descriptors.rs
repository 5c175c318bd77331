//! Wire form of the user and conversation descriptors.

use super::fields;
use crate::event::domain::{
    ConversationInfo, ConversationType, UNKNOWN_CONVERSATION_ID, UserInfo,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

impl UserInfo {
    /// Encodes the descriptor, omitting unset fields and an empty
    /// `additional_data`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        let strings = [
            ("user_id", &self.user_id),
            ("user_nickname", &self.user_nickname),
            ("user_cardname", &self.user_cardname),
            ("user_titlename", &self.user_titlename),
            ("permission_level", &self.permission_level),
            ("role", &self.role),
            ("level", &self.level),
            ("sex", &self.sex),
        ];
        for (key, field) in strings {
            fields::put_opt(&mut map, key, field.clone().map(Value::String));
        }
        fields::put_opt(&mut map, "age", self.age.map(Value::from));
        fields::put_opt(&mut map, "area", self.area.clone().map(Value::String));
        fields::put_extension(&mut map, "additional_data", &self.additional_data);
        Value::Object(map)
    }

    /// Decodes a descriptor.
    ///
    /// Returns `None` for anything but a JSON object, and for an object that
    /// yields no field. Numeric values of string fields are stringified;
    /// unknown keys are ignored.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        let info = Self {
            user_id: fields::text(map.get("user_id")),
            user_nickname: fields::text(map.get("user_nickname")),
            user_cardname: fields::text(map.get("user_cardname")),
            user_titlename: fields::text(map.get("user_titlename")),
            permission_level: fields::text(map.get("permission_level")),
            role: fields::text(map.get("role")),
            level: fields::text(map.get("level")),
            sex: fields::text(map.get("sex")),
            age: fields::small_unsigned(map.get("age")),
            area: fields::text(map.get("area")),
            additional_data: fields::object(map.get("additional_data")),
        };
        (!info.is_empty()).then_some(info)
    }
}

impl ConversationInfo {
    /// Encodes the descriptor, omitting unset fields and an empty `extra`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "conversation_id".to_owned(),
            Value::String(self.conversation_id.clone()),
        );
        map.insert(
            "type".to_owned(),
            Value::String(self.conversation_type.as_str().to_owned()),
        );
        fields::put_opt(&mut map, "name", self.name.clone().map(Value::String));
        fields::put_opt(&mut map, "parent_id", self.parent_id.clone().map(Value::String));
        fields::put_extension(&mut map, "extra", &self.extra);
        Value::Object(map)
    }

    /// Decodes a descriptor.
    ///
    /// Returns `None` for anything but a non-empty JSON object. A missing
    /// identifier reads as `unknown_conversation` and a missing type as
    /// `unknown`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object().filter(|map| !map.is_empty())?;
        Some(Self {
            conversation_id: fields::text(map.get("conversation_id"))
                .unwrap_or_else(|| UNKNOWN_CONVERSATION_ID.to_owned()),
            conversation_type: fields::strict_text(map.get("type"))
                .map_or(ConversationType::Unknown, |kind| {
                    ConversationType::from_wire(&kind)
                }),
            name: fields::text(map.get("name")),
            parent_id: fields::text(map.get("parent_id")),
            extra: fields::object(map.get("extra")),
        })
    }
}

impl Serialize for UserInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UserInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value).unwrap_or_default())
    }
}

impl Serialize for ConversationInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConversationInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value).unwrap_or_default())
    }
}
