//! Roles catalog seam.

use async_trait::async_trait;

use rc_common::Result;

use super::entity::{NewRole, Role, RoleChange, RoleKey};

/// The full, non-paginated catalog of roles plus its mutations.
#[async_trait]
pub trait RoleDirectory: Send + Sync {
    /// Fetch the complete catalog.
    async fn list(&self) -> Result<Vec<Role>>;

    /// Delete a role. `Ok(false)` means the remote refused the deletion.
    async fn remove(&self, id: &RoleKey) -> Result<bool>;

    async fn create(&self, role: NewRole) -> Result<()>;

    async fn update(&self, role: RoleChange) -> Result<()>;
}
