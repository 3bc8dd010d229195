//! RoleCall Console Core
//!
//! Headless screens for administering users and roles:
//! - Session-gated access to the roles list
//! - Role create/edit
//! - User create/edit with a many-to-many role-assignment picker
//!
//! The screens hold no transport or rendering code. Remote collaborators
//! (session store, roles catalog, user service) and the navigation host
//! are injected through trait seams, and every mutating flow reports an
//! explicit [`SubmitOutcome`] instead of swallowing failures.
//!
//! ## Module Organization (Aggregate-based)
//!
//! Each aggregate contains:
//! - `entity` - domain types and wire payloads
//! - `provider` - the remote collaborator seam
//! - screen logic (list / editor)

pub mod navigation;
pub mod outcome;
pub mod role;
pub mod session;
pub mod user;

// Re-export the shared failure taxonomy
pub use rc_common::{MutationFailurePolicy, ProviderError, Result};

// Re-export main types for convenience
pub use navigation::{FocusNotifier, FocusObserver, Navigator, ScreenRequest};
pub use outcome::{FormError, SubmitOutcome};
pub use role::editor::RoleEditor;
pub use role::entity::{NewRole, Role, RoleChange, RoleKey};
pub use role::list::RoleListScreen;
pub use role::provider::RoleDirectory;
pub use session::entity::Session;
pub use session::guard::{AccessDecision, SessionGuard};
pub use session::login::{Authenticator, LoginScreen};
pub use session::provider::SessionProvider;
pub use session::store::SessionStore;
pub use user::editor::{EditorPhase, RoleAssignmentEditor};
pub use user::entity::{NewUser, User, UserChange};
pub use user::provider::UserService;
