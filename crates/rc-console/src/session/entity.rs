//! Session entity.

use serde::{Deserialize, Serialize};

/// The authenticated identity of the current operator.
///
/// Opaque beyond the display name; owned by the session provider and
/// read-only from the screens' perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub name: String,
}

impl Session {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
