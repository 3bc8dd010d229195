//! Submission outcomes.
//!
//! Screens return an explicit outcome from their save paths so hosts must
//! consciously decide what to do with a failure instead of it vanishing
//! into a log line.

use rc_common::ProviderError;
use serde::{Deserialize, Serialize};

/// A user-correctable validation failure.
///
/// Blocks submission synchronously; no provider call is made while one of
/// these is outstanding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormError {
    /// Stable machine-readable code, e.g. `NAME_REQUIRED`.
    pub code: String,
    /// User-facing blocking message.
    pub message: String,
}

impl FormError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for FormError {}

/// Outcome of a save attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The mutation was accepted; the screen has already navigated back.
    Saved,
    /// Validation failed; the screen stays put and no provider was called.
    Rejected(FormError),
    /// The mutation provider failed; never retried automatically.
    Failed(ProviderError),
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The validation failure, if that is what happened.
    pub fn rejection(&self) -> Option<&FormError> {
        match self {
            Self::Rejected(error) => Some(error),
            _ => None,
        }
    }

    /// The provider failure, if that is what happened.
    pub fn failure(&self) -> Option<&ProviderError> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}
