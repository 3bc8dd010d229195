//! Remote authenticator.

use async_trait::async_trait;
use serde::Serialize;

use rc_common::{ProviderError, Result};
use rc_console::{Authenticator, Session};

use crate::client::RestClient;

const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// [`Authenticator`] backed by the admin API.
///
/// A 401 or 403 reply means the credentials were rejected, not that the
/// call failed.
pub struct HttpAuthenticator {
    client: RestClient,
}

impl HttpAuthenticator {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    async fn login(&self, username: &str, password: &str) -> Result<Option<Session>> {
        let request = LoginRequest { username, password };
        match self
            .client
            .post_for_json::<_, Session>(LOGIN_PATH, &request)
            .await
        {
            Ok(session) => Ok(Some(session)),
            Err(ProviderError::Rejected { status, .. }) if status == 401 || status == 403 => {
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }
}
