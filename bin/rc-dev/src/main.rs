//! RoleCall development driver.
//!
//! Runs the console screens against in-memory collaborators so the whole
//! flow - login gate, roles list, role editor, user editor with role
//! assignment - can be exercised without a remote API.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use parking_lot::Mutex;
use tracing::{info, warn};

use rc_common::logging::init_logging;
use rc_console::{
    Authenticator, FocusNotifier, FocusObserver, LoginScreen, Navigator, NewRole, NewUser,
    ProviderError, Role, RoleAssignmentEditor, RoleChange, RoleDirectory, RoleKey,
    RoleListScreen, ScreenRequest, Session, SessionStore, UserChange, UserService,
};

#[derive(Parser, Debug)]
#[command(name = "rc-dev", about = "RoleCall development driver")]
struct Args {
    /// Path to a config file (falls back to the standard search paths)
    #[arg(long, env = "ROLECALL_CONFIG")]
    config: Option<PathBuf>,

    /// Operator login used for the scripted walkthrough
    #[arg(long, default_value = "admin")]
    username: String,

    /// Operator password used for the scripted walkthrough
    #[arg(long, default_value = "admin")]
    password: String,
}

/// Navigator that narrates transitions instead of rendering screens.
#[derive(Default)]
struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, screen: ScreenRequest) {
        info!(screen = screen.name(), "navigate");
    }

    fn go_back(&self) {
        info!("navigate back");
    }
}

/// Role directory over a local catalog.
struct InMemoryRoles {
    roles: Mutex<Vec<Role>>,
}

impl InMemoryRoles {
    fn seeded() -> Self {
        Self {
            roles: Mutex::new(vec![
                Role::new("Admin").with_id("1").with_description("Full access"),
                Role::new("Auditor").with_id("2").with_description("Read-only"),
                Role::new("Operator").with_id("3"),
            ]),
        }
    }
}

#[async_trait]
impl RoleDirectory for InMemoryRoles {
    async fn list(&self) -> rc_console::Result<Vec<Role>> {
        Ok(self.roles.lock().clone())
    }

    async fn remove(&self, id: &RoleKey) -> rc_console::Result<bool> {
        let mut roles = self.roles.lock();
        let before = roles.len();
        roles.retain(|role| role.id.as_ref() != Some(id));
        Ok(roles.len() < before)
    }

    async fn create(&self, role: NewRole) -> rc_console::Result<()> {
        let mut roles = self.roles.lock();
        let id = RoleKey::from((roles.len() + 1) as u64);
        let mut created = Role::new(role.name).with_id(id);
        created.description = role.description;
        roles.push(created);
        Ok(())
    }

    async fn update(&self, change: RoleChange) -> rc_console::Result<()> {
        let mut roles = self.roles.lock();
        match roles.iter_mut().find(|r| r.id.as_ref() == Some(&change.id)) {
            Some(role) => {
                role.name = change.name;
                role.description = change.description;
                Ok(())
            }
            None => Err(ProviderError::rejected(404, "role not found")),
        }
    }
}

/// User service that keeps everything it is asked to persist.
#[derive(Default)]
struct InMemoryUsers {
    created: Mutex<Vec<NewUser>>,
    updated: Mutex<Vec<UserChange>>,
}

#[async_trait]
impl UserService for InMemoryUsers {
    async fn create(&self, user: NewUser) -> rc_console::Result<()> {
        info!(username = %user.username, roles = user.role_ids.len(), "user created");
        self.created.lock().push(user);
        Ok(())
    }

    async fn update(&self, user: UserChange) -> rc_console::Result<()> {
        info!(username = %user.username, roles = user.role_ids.len(), "user updated");
        self.updated.lock().push(user);
        Ok(())
    }
}

/// Accepts a single fixed credential pair.
struct FixedAuthenticator {
    username: String,
    password: String,
}

#[async_trait]
impl Authenticator for FixedAuthenticator {
    async fn login(&self, username: &str, password: &str) -> rc_console::Result<Option<Session>> {
        if username == self.username && password == self.password {
            Ok(Some(Session::new("Development Admin")))
        } else {
            Ok(None)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging("rc-dev");
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => rc_config::ConfigLoader::with_path(path).load()?,
        None => rc_config::ConfigLoader::new().load()?,
    };
    info!(policy = ?config.editor.on_mutation_failure, "configuration loaded");

    let navigator: Arc<dyn Navigator> = Arc::new(TracingNavigator);
    let sessions = Arc::new(SessionStore::new());
    let directory = Arc::new(InMemoryRoles::seeded());
    let users = Arc::new(InMemoryUsers::default());
    let focus = FocusNotifier::new();

    // Protected screen before sign-in: the guard must bounce us.
    let list = RoleListScreen::new(sessions.clone(), directory.clone(), navigator.clone());
    let decision = list.on_mount().await;
    if decision.allowed {
        warn!("expected the guard to deny access before sign-in");
    } else {
        info!("roles screen denied without a session");
    }

    // Sign in.
    let login = LoginScreen::new(
        Arc::new(FixedAuthenticator {
            username: args.username.clone(),
            password: args.password.clone(),
        }),
        sessions.clone(),
        navigator.clone(),
    );
    let outcome = login.sign_in(&args.username, &args.password).await;
    anyhow::ensure!(outcome.is_saved(), "sign-in failed: {outcome:?}");

    // Mount the roles list, now allowed, and watch focus refetches.
    let list = RoleListScreen::new(sessions.clone(), directory.clone(), navigator.clone());
    let decision = list.on_mount().await;
    info!(title = %list.title(), allowed = decision.allowed, "roles screen mounted");
    focus.subscribe(Arc::downgrade(&list) as std::sync::Weak<dyn FocusObserver>);
    focus.focus_gained().await;
    for role in list.roles() {
        info!(id = ?role.id, name = %role.name, "role");
    }

    // Create a user and assign a couple of roles.
    let editor = RoleAssignmentEditor::create(
        directory.clone(),
        users.clone(),
        navigator.clone(),
        config.editor.on_mutation_failure,
    );
    editor.load_catalog().await;
    editor.set_name("Grace Hopper");
    editor.set_username("grace");
    editor.set_password("hopper");
    editor.set_confirm_password("hopper");
    editor.toggle_role(&RoleKey::from("1"));
    editor.toggle_role(&RoleKey::from("3"));
    let outcome = editor.save().await;
    info!(saved = outcome.is_saved(), selected = editor.selected_count(), "user editor finished");

    // Delete a role; returning to the list refetches it.
    list.remove(&RoleKey::from("2")).await;
    focus.focus_gained().await;
    info!(remaining = list.roles().len(), "catalog after delete");

    Ok(())
}
