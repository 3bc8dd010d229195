//! User entity and mutation payloads.

use serde::{Deserialize, Serialize};

use crate::role::entity::RoleKey;

/// An operator account as served by the remote.
///
/// The password is write-only and therefore not part of the read model
/// at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,

    /// Immutable once the user exists.
    pub username: String,

    pub name: String,

    /// Assigned roles, as an ordered duplicate-free sequence of keys.
    #[serde(default)]
    pub role_ids: Vec<RoleKey>,
}

/// Payload for creating a user. The only place a password travels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub password: String,
    pub role_ids: Vec<RoleKey>,
}

/// Payload for updating a user.
///
/// Carries the username through unchanged and has no password field, so
/// an edit can never leak one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserChange {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    pub username: String,
    pub name: String,
    pub role_ids: Vec<RoleKey>,
}
