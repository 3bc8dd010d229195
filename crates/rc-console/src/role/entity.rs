//! Role entity and identifiers.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Role identifier.
///
/// The remote may serve role ids as JSON numbers or as strings; either
/// form is accepted and carried as a string key, so a numeric id survives
/// the round trip without precision loss. Non-integer numeric ids are
/// rejected outright.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoleKey(String);

impl RoleKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoleKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for RoleKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<u64> for RoleKey {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for RoleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

struct RoleKeyVisitor;

impl<'de> Visitor<'de> for RoleKeyVisitor {
    type Value = RoleKey;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or integer role id")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<RoleKey, E> {
        Ok(RoleKey(value.to_string()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<RoleKey, E> {
        Ok(RoleKey(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<RoleKey, E> {
        Ok(RoleKey(value.to_string()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<RoleKey, E> {
        Err(E::custom(format!("non-integer role id: {value}")))
    }
}

impl<'de> Deserialize<'de> for RoleKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RoleKeyVisitor)
    }
}

/// A named permission grouping assignable to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Absent until the role has been persisted.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<RoleKey>,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<RoleKey>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Two roles are the same entity iff both ids are present and equal.
    pub fn same_entity(&self, other: &Role) -> bool {
        matches!((&self.id, &other.id), (Some(a), Some(b)) if a == b)
    }
}

/// Payload for creating a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRole {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

/// Payload for updating an existing role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleChange {
    pub id: RoleKey,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_key_accepts_numbers_and_strings() {
        let from_number: RoleKey = serde_json::from_str("42").unwrap();
        assert_eq!(from_number.as_str(), "42");

        let from_string: RoleKey = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, from_string);

        let large: RoleKey = serde_json::from_str("9007199254740993").unwrap();
        assert_eq!(large.as_str(), "9007199254740993");
    }

    #[test]
    fn test_role_key_rejects_floats() {
        let result: Result<RoleKey, _> = serde_json::from_str("1.5");
        assert!(result.is_err());
    }

    #[test]
    fn test_role_key_serializes_as_string() {
        let key = RoleKey::from(7u64);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"7\"");
    }

    #[test]
    fn test_role_wire_shape() {
        let role: Role =
            serde_json::from_str(r#"{"id": 3, "name": "Admin", "description": "Full access"}"#)
                .unwrap();
        assert_eq!(role.id, Some(RoleKey::from("3")));

        let unsaved = Role::new("Viewer");
        let json = serde_json::to_value(&unsaved).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_same_entity_requires_both_ids() {
        let a = Role::new("Admin").with_id("1");
        let b = Role::new("Renamed").with_id("1");
        let unsaved = Role::new("Admin");

        assert!(a.same_entity(&b));
        assert!(!a.same_entity(&unsaved));
        assert!(!unsaved.same_entity(&unsaved.clone()));
    }
}
