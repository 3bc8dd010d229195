//! Navigation surface.
//!
//! The host application supplies the [`Navigator`]; screens only know two
//! primitives: go back, and navigate to a named screen carrying at most
//! one typed parameter. Focus transitions are an explicit subscription on
//! a [`FocusNotifier`] rather than hidden global state.

use std::sync::{Arc, Weak};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::role::entity::Role;
use crate::user::entity::User;

/// A navigation request.
#[derive(Debug, Clone)]
pub enum ScreenRequest {
    Login,
    Home,
    RoleList,
    /// Role editor; `None` creates a new role.
    RoleEditor { role: Option<Role> },
    /// User editor; `None` creates a new user.
    UserEditor { user: Option<User> },
}

impl ScreenRequest {
    /// Stable screen name, used for logging and by test hosts.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Home => "home",
            Self::RoleList => "roles",
            Self::RoleEditor { .. } => "role",
            Self::UserEditor { .. } => "user",
        }
    }
}

/// The two primitives the screens require from their host.
pub trait Navigator: Send + Sync {
    fn navigate(&self, screen: ScreenRequest);
    fn go_back(&self);
}

/// Observer invoked on every focus-gained transition of its screen.
#[async_trait]
pub trait FocusObserver: Send + Sync {
    async fn on_focus_gained(&self);
}

/// Fan-out of focus-gained transitions to subscribed screens.
///
/// Subscriptions are weak: a screen that has been unmounted is skipped
/// and pruned on the next transition instead of being resurrected, so a
/// focus event racing an unmount is a harmless no-op.
#[derive(Default)]
pub struct FocusNotifier {
    observers: Mutex<Vec<Weak<dyn FocusObserver>>>,
}

impl FocusNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, observer: Weak<dyn FocusObserver>) {
        self.observers.lock().push(observer);
    }

    /// Deliver a focus-gained transition to every live subscriber.
    pub async fn focus_gained(&self) {
        let live: Vec<Arc<dyn FocusObserver>> = {
            let mut observers = self.observers.lock();
            observers.retain(|observer| observer.strong_count() > 0);
            observers.iter().filter_map(|observer| observer.upgrade()).collect()
        };
        for observer in live {
            observer.on_focus_gained().await;
        }
    }

    /// Number of live subscriptions.
    pub fn observer_count(&self) -> usize {
        let mut observers = self.observers.lock();
        observers.retain(|observer| observer.strong_count() > 0);
        observers.len()
    }
}
