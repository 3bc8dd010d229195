//! In-memory session store.

use async_trait::async_trait;
use parking_lot::RwLock;

use rc_common::Result;

use super::entity::Session;
use super::provider::SessionProvider;

/// Process-local session storage holding at most one session.
///
/// Doubles as the [`SessionProvider`] read side consumed by the guard.
#[derive(Default)]
pub struct SessionStore {
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, session: Session) {
        *self.current.write() = Some(session);
    }

    pub fn sign_out(&self) {
        *self.current.write() = None;
    }

    pub fn current(&self) -> Option<Session> {
        self.current.read().clone()
    }
}

#[async_trait]
impl SessionProvider for SessionStore {
    async fn get_session(&self) -> Result<Option<Session>> {
        Ok(self.current())
    }
}
