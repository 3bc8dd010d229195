//! Session guard for protected screens.

use std::sync::Arc;

use tracing::warn;

use crate::navigation::Navigator;

use super::provider::SessionProvider;

/// Title shown when no usable display name is available.
const FALLBACK_TITLE: &str = "Welcome";

/// Result of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessDecision {
    pub allowed: bool,
    pub display_name: Option<String>,
}

impl AccessDecision {
    /// Personalized screen title, falling back to a generic one.
    pub fn title(&self) -> String {
        match &self.display_name {
            Some(name) => format!("Hello, {name}"),
            None => FALLBACK_TITLE.to_string(),
        }
    }

    fn denied() -> Self {
        Self {
            allowed: false,
            display_name: None,
        }
    }
}

/// Gates entry to protected screens on the presence of a session.
///
/// The check runs once per screen activation and does not block rendering
/// of content that is already mounted; when the session is absent the
/// guard reverses navigation immediately instead. The operator may see
/// the screen for the instant before the check resolves; that window is
/// accepted.
pub struct SessionGuard {
    sessions: Arc<dyn SessionProvider>,
}

impl SessionGuard {
    pub fn new(sessions: Arc<dyn SessionProvider>) -> Self {
        Self { sessions }
    }

    /// Query the session provider exactly once. An absent session, or a
    /// provider failure, denies access and issues exactly one
    /// back-navigation before returning.
    pub async fn check_access(&self, navigator: &dyn Navigator) -> AccessDecision {
        match self.sessions.get_session().await {
            Ok(Some(session)) => {
                let name = session.name.trim();
                AccessDecision {
                    allowed: true,
                    display_name: (!name.is_empty()).then(|| name.to_string()),
                }
            }
            Ok(None) => {
                navigator.go_back();
                AccessDecision::denied()
            }
            Err(error) => {
                warn!(%error, "session lookup failed, treating as signed out");
                navigator.go_back();
                AccessDecision::denied()
            }
        }
    }
}
