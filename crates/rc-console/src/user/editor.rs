//! User editor with role assignment.

use std::sync::Arc;

use indexmap::IndexSet;
use parking_lot::RwLock;
use tracing::{debug, error};

use rc_common::MutationFailurePolicy;

use crate::navigation::Navigator;
use crate::outcome::{FormError, SubmitOutcome};
use crate::role::entity::{Role, RoleKey};
use crate::role::provider::RoleDirectory;

use super::entity::{NewUser, User, UserChange};
use super::provider::UserService;

/// Externally visible editor lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    /// Role catalog not yet fetched.
    Loading,
    /// Catalog present, selection mutable.
    Ready,
    /// Validation passed, mutation in flight.
    Submitting,
}

#[derive(Default, Clone)]
struct UserForm {
    name: String,
    username: String,
    password: String,
    confirm_password: String,
}

/// Create or edit a user, including which roles are assigned.
///
/// The selection lives only as long as the editor: seeded from the user's
/// current roles in edit mode, empty in create mode, mutated exclusively
/// through [`toggle_role`](Self::toggle_role), and dropped with the
/// screen. Toggles arriving while the catalog is still loading simply
/// record the key; a key does not have to exist in the catalog to be
/// submitted later.
///
/// A hung catalog or mutation provider leaves the editor in `Loading` or
/// `Submitting` indefinitely; no timeout is applied here.
pub struct RoleAssignmentEditor {
    catalog: Arc<dyn RoleDirectory>,
    users: Arc<dyn UserService>,
    navigator: Arc<dyn Navigator>,
    on_failure: MutationFailurePolicy,
    existing: Option<User>,
    phase: RwLock<EditorPhase>,
    available: RwLock<Vec<Role>>,
    selection: RwLock<IndexSet<RoleKey>>,
    form: RwLock<UserForm>,
}

impl RoleAssignmentEditor {
    /// Editor for a brand-new user: empty form, empty selection.
    pub fn create(
        catalog: Arc<dyn RoleDirectory>,
        users: Arc<dyn UserService>,
        navigator: Arc<dyn Navigator>,
        on_failure: MutationFailurePolicy,
    ) -> Self {
        Self {
            catalog,
            users,
            navigator,
            on_failure,
            existing: None,
            phase: RwLock::new(EditorPhase::Loading),
            available: RwLock::new(Vec::new()),
            selection: RwLock::new(IndexSet::new()),
            form: RwLock::new(UserForm::default()),
        }
    }

    /// Editor for an existing user: form prefilled, selection seeded from
    /// the user's current roles. No password is collected on this path.
    pub fn edit(
        user: User,
        catalog: Arc<dyn RoleDirectory>,
        users: Arc<dyn UserService>,
        navigator: Arc<dyn Navigator>,
        on_failure: MutationFailurePolicy,
    ) -> Self {
        let selection: IndexSet<RoleKey> = user.role_ids.iter().cloned().collect();
        let form = UserForm {
            name: user.name.clone(),
            username: user.username.clone(),
            ..UserForm::default()
        };
        Self {
            catalog,
            users,
            navigator,
            on_failure,
            existing: Some(user),
            phase: RwLock::new(EditorPhase::Loading),
            available: RwLock::new(Vec::new()),
            selection: RwLock::new(selection),
            form: RwLock::new(form),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.existing.is_some() {
            "Edit User"
        } else {
            "New User"
        }
    }

    pub fn is_edit(&self) -> bool {
        self.existing.is_some()
    }

    /// The username field is read-only once the user exists.
    pub fn username_editable(&self) -> bool {
        self.existing.is_none()
    }

    pub fn phase(&self) -> EditorPhase {
        *self.phase.read()
    }

    /// The last-fetched catalog offered for assignment.
    pub fn available_roles(&self) -> Vec<Role> {
        self.available.read().clone()
    }

    /// Currently selected role keys, in toggle order.
    pub fn selected_roles(&self) -> Vec<RoleKey> {
        self.selection.read().iter().cloned().collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.read().len()
    }

    pub fn is_selected(&self, id: &RoleKey) -> bool {
        self.selection.read().contains(id)
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.form.write().name = name.into();
    }

    /// Ignored in edit mode; the username is immutable after creation.
    pub fn set_username(&self, username: impl Into<String>) {
        if self.existing.is_some() {
            debug!("ignoring username change on existing user");
            return;
        }
        self.form.write().username = username.into();
    }

    pub fn set_password(&self, password: impl Into<String>) {
        self.form.write().password = password.into();
    }

    pub fn set_confirm_password(&self, confirm: impl Into<String>) {
        self.form.write().confirm_password = confirm.into();
    }

    /// Fetch the role catalog, replacing any previous fetch. Failure is
    /// logged and the editor stays in `Loading`, indistinguishable from a
    /// fetch that has not resolved yet.
    pub async fn load_catalog(&self) {
        match self.catalog.list().await {
            Ok(roles) => {
                debug!(count = roles.len(), "assignment catalog loaded");
                *self.available.write() = roles;
                *self.phase.write() = EditorPhase::Ready;
            }
            Err(error) => error!(%error, "failed to load role catalog"),
        }
    }

    /// Symmetric-difference membership toggle: present keys are removed,
    /// absent keys appended.
    pub fn toggle_role(&self, id: &RoleKey) {
        let mut selection = self.selection.write();
        if !selection.shift_remove(id) {
            selection.insert(id.clone());
        }
    }

    fn validate(&self, form: &UserForm) -> Option<FormError> {
        if form.name.trim().is_empty() {
            return Some(FormError::new("NAME_REQUIRED", "Name is required"));
        }
        if self.existing.is_none() {
            if form.username.trim().is_empty() {
                return Some(FormError::new("LOGIN_REQUIRED", "Login is required"));
            }
            if form.password.is_empty() {
                return Some(FormError::new("PASSWORD_REQUIRED", "Password is required"));
            }
            if form.password != form.confirm_password {
                return Some(FormError::new("PASSWORD_MISMATCH", "Passwords do not match"));
            }
        }
        None
    }

    /// Validate and submit.
    ///
    /// Validation failures block before any provider call and leave the
    /// editor where it was. On success the editor navigates back, which
    /// is terminal for this instance. Provider failures are logged, never
    /// retried, returned to the caller, and the configured policy decides
    /// whether the screen additionally reverses navigation.
    pub async fn save(&self) -> SubmitOutcome {
        let form = self.form.read().clone();
        if let Some(validation) = self.validate(&form) {
            return SubmitOutcome::Rejected(validation);
        }

        let role_ids: Vec<RoleKey> = self.selection.read().iter().cloned().collect();
        *self.phase.write() = EditorPhase::Submitting;

        let result = match &self.existing {
            Some(user) => {
                self.users
                    .update(UserChange {
                        id: user.id.clone(),
                        username: user.username.clone(),
                        name: form.name.trim().to_string(),
                        role_ids,
                    })
                    .await
            }
            None => {
                self.users
                    .create(NewUser {
                        username: form.username.trim().to_string(),
                        name: form.name.trim().to_string(),
                        password: form.password,
                        role_ids,
                    })
                    .await
            }
        };

        match result {
            Ok(()) => {
                self.navigator.go_back();
                SubmitOutcome::Saved
            }
            Err(provider_error) => {
                error!(%provider_error, edit = self.existing.is_some(), "failed to save user");
                *self.phase.write() = EditorPhase::Ready;
                if self.on_failure == MutationFailurePolicy::GoBack {
                    self.navigator.go_back();
                }
                SubmitOutcome::Failed(provider_error)
            }
        }
    }
}
