//! Session provider seam.

use async_trait::async_trait;

use rc_common::Result;

use super::entity::Session;

/// Read access to the current session.
///
/// Callers treat a failing provider exactly like an absent session, so
/// implementations never gate access open by erroring.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn get_session(&self) -> Result<Option<Session>>;
}
