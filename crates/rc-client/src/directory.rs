//! Remote roles catalog.

use async_trait::async_trait;
use tracing::debug;

use rc_common::Result;
use rc_console::{NewRole, Role, RoleChange, RoleDirectory, RoleKey};

use crate::client::RestClient;

const ROLES_PATH: &str = "/api/roles";

/// [`RoleDirectory`] backed by the admin API.
pub struct HttpRoleDirectory {
    client: RestClient,
}

impl HttpRoleDirectory {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RoleDirectory for HttpRoleDirectory {
    async fn list(&self) -> Result<Vec<Role>> {
        let roles: Vec<Role> = self.client.get_json(ROLES_PATH).await?;
        debug!(count = roles.len(), "fetched role catalog");
        Ok(roles)
    }

    async fn remove(&self, id: &RoleKey) -> Result<bool> {
        self.client
            .delete_json(&format!("{ROLES_PATH}/{id}"))
            .await
    }

    async fn create(&self, role: NewRole) -> Result<()> {
        self.client.post_json(ROLES_PATH, &role).await
    }

    async fn update(&self, role: RoleChange) -> Result<()> {
        self.client
            .put_json(&format!("{ROLES_PATH}/{}", role.id), &role)
            .await
    }
}
