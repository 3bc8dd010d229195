//! Role editor screen.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::error;

use rc_common::MutationFailurePolicy;

use crate::navigation::Navigator;
use crate::outcome::{FormError, SubmitOutcome};

use super::entity::{NewRole, Role, RoleChange};
use super::provider::RoleDirectory;

/// Create or edit a single role.
pub struct RoleEditor {
    directory: Arc<dyn RoleDirectory>,
    navigator: Arc<dyn Navigator>,
    on_failure: MutationFailurePolicy,
    existing: Option<Role>,
    name: RwLock<String>,
    description: RwLock<String>,
}

impl RoleEditor {
    pub fn create(
        directory: Arc<dyn RoleDirectory>,
        navigator: Arc<dyn Navigator>,
        on_failure: MutationFailurePolicy,
    ) -> Self {
        Self {
            directory,
            navigator,
            on_failure,
            existing: None,
            name: RwLock::new(String::new()),
            description: RwLock::new(String::new()),
        }
    }

    pub fn edit(
        role: Role,
        directory: Arc<dyn RoleDirectory>,
        navigator: Arc<dyn Navigator>,
        on_failure: MutationFailurePolicy,
    ) -> Self {
        Self {
            directory,
            navigator,
            on_failure,
            name: RwLock::new(role.name.clone()),
            description: RwLock::new(role.description.clone().unwrap_or_default()),
            existing: Some(role),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.existing.is_some() {
            "Edit Role"
        } else {
            "New Role"
        }
    }

    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.write() = name.into();
    }

    pub fn set_description(&self, description: impl Into<String>) {
        *self.description.write() = description.into();
    }

    /// Validate and submit. Provider failures are logged, never retried,
    /// and handed back to the caller; the configured policy decides
    /// whether the screen also reverses navigation.
    pub async fn save(&self) -> SubmitOutcome {
        let name = self.name.read().trim().to_string();
        if name.is_empty() {
            return SubmitOutcome::Rejected(FormError::new("NAME_REQUIRED", "Name is required"));
        }

        let description = {
            let description = self.description.read().trim().to_string();
            (!description.is_empty()).then_some(description)
        };

        // A role that was never persisted falls back to the create path.
        let result = match self.existing.as_ref().and_then(|role| role.id.clone()) {
            Some(id) => {
                self.directory
                    .update(RoleChange {
                        id,
                        name,
                        description,
                    })
                    .await
            }
            None => self.directory.create(NewRole { name, description }).await,
        };

        match result {
            Ok(()) => {
                self.navigator.go_back();
                SubmitOutcome::Saved
            }
            Err(provider_error) => {
                error!(%provider_error, "failed to save role");
                if self.on_failure == MutationFailurePolicy::GoBack {
                    self.navigator.go_back();
                }
                SubmitOutcome::Failed(provider_error)
            }
        }
    }
}
