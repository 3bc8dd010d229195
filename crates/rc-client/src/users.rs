//! Remote user mutations.

use async_trait::async_trait;

use rc_common::{ProviderError, Result};
use rc_console::{NewUser, UserChange, UserService};

use crate::client::RestClient;

const USERS_PATH: &str = "/api/users";

/// [`UserService`] backed by the admin API.
pub struct HttpUserService {
    client: RestClient,
}

impl HttpUserService {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserService for HttpUserService {
    async fn create(&self, user: NewUser) -> Result<()> {
        self.client.post_json(USERS_PATH, &user).await
    }

    async fn update(&self, user: UserChange) -> Result<()> {
        let id = user
            .id
            .as_deref()
            .ok_or_else(|| ProviderError::rejected(400, "user id is required for update"))?;
        self.client
            .put_json(&format!("{USERS_PATH}/{id}"), &user)
            .await
    }
}
