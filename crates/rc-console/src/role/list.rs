//! Roles list screen.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::navigation::{FocusObserver, Navigator, ScreenRequest};
use crate::session::guard::{AccessDecision, SessionGuard};
use crate::session::provider::SessionProvider;

use super::entity::{Role, RoleKey};
use super::provider::RoleDirectory;

/// The session-gated roles list.
///
/// The catalog is refetched wholesale on every focus gain - first mount
/// and every return from a child screen alike. There is no cache between
/// focus events and no merging, so the list always reflects remote state
/// after a create, edit, or delete performed on a child screen.
pub struct RoleListScreen {
    guard: SessionGuard,
    directory: Arc<dyn RoleDirectory>,
    navigator: Arc<dyn Navigator>,
    roles: RwLock<Vec<Role>>,
    title: RwLock<String>,
}

impl RoleListScreen {
    pub fn new(
        sessions: Arc<dyn SessionProvider>,
        directory: Arc<dyn RoleDirectory>,
        navigator: Arc<dyn Navigator>,
    ) -> Arc<Self> {
        Arc::new(Self {
            guard: SessionGuard::new(sessions),
            directory,
            navigator,
            roles: RwLock::new(Vec::new()),
            title: RwLock::new("Roles".to_string()),
        })
    }

    /// Run the session gate. When denied, the guard has already reversed
    /// navigation and the host must not render the list.
    pub async fn on_mount(&self) -> AccessDecision {
        let decision = self.guard.check_access(self.navigator.as_ref()).await;
        if decision.allowed {
            *self.title.write() = decision.title();
        }
        decision
    }

    pub fn title(&self) -> String {
        self.title.read().clone()
    }

    /// The last-fetched catalog.
    pub fn roles(&self) -> Vec<Role> {
        self.roles.read().clone()
    }

    async fn fetch_roles(&self) {
        match self.directory.list().await {
            Ok(catalog) => {
                debug!(count = catalog.len(), "role catalog refreshed");
                *self.roles.write() = catalog;
            }
            Err(error) => warn!(%error, "failed to refresh role catalog"),
        }
    }

    /// Delete a role. A `true` reply triggers an immediate refetch; any
    /// other outcome leaves the current list in place.
    pub async fn remove(&self, id: &RoleKey) {
        match self.directory.remove(id).await {
            Ok(true) => self.fetch_roles().await,
            Ok(false) => warn!(role = %id, "delete refused by remote"),
            Err(error) => warn!(role = %id, %error, "delete failed"),
        }
    }

    pub fn add_role(&self) {
        self.navigator.navigate(ScreenRequest::RoleEditor { role: None });
    }

    pub fn edit_role(&self, role: Role) {
        self.navigator
            .navigate(ScreenRequest::RoleEditor { role: Some(role) });
    }
}

#[async_trait]
impl FocusObserver for RoleListScreen {
    async fn on_focus_gained(&self) {
        self.fetch_roles().await;
    }
}
