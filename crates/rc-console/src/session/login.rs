//! Login flow.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use rc_common::Result;

use crate::navigation::{Navigator, ScreenRequest};
use crate::outcome::{FormError, SubmitOutcome};

use super::entity::Session;
use super::store::SessionStore;

/// Credential verification against the remote.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// `Ok(None)` means the credentials were rejected.
    async fn login(&self, username: &str, password: &str) -> Result<Option<Session>>;
}

/// Login screen: collects credentials, stores the resulting session, and
/// moves on to the home screen.
pub struct LoginScreen {
    auth: Arc<dyn Authenticator>,
    store: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl LoginScreen {
    pub fn new(
        auth: Arc<dyn Authenticator>,
        store: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            auth,
            store,
            navigator,
        }
    }

    pub async fn sign_in(&self, username: &str, password: &str) -> SubmitOutcome {
        if username.trim().is_empty() {
            return SubmitOutcome::Rejected(FormError::new("LOGIN_REQUIRED", "Login is required"));
        }
        if password.is_empty() {
            return SubmitOutcome::Rejected(FormError::new(
                "PASSWORD_REQUIRED",
                "Password is required",
            ));
        }

        match self.auth.login(username.trim(), password).await {
            Ok(Some(session)) => {
                info!(user = %session.name, "signed in");
                self.store.sign_in(session);
                self.navigator.navigate(ScreenRequest::Home);
                SubmitOutcome::Saved
            }
            Ok(None) => SubmitOutcome::Rejected(FormError::new(
                "INVALID_CREDENTIALS",
                "Invalid credentials",
            )),
            Err(error) => {
                error!(%error, "sign-in failed");
                SubmitOutcome::Failed(error)
            }
        }
    }
}
