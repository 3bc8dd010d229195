//! User mutation seam.

use async_trait::async_trait;

use rc_common::Result;

use super::entity::{NewUser, UserChange};

/// Mutations on the remote user store.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<()>;

    async fn update(&self, user: UserChange) -> Result<()>;
}
