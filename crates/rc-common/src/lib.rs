//! Shared types for the RoleCall console.
//!
//! Every remote collaborator (session store, roles catalog, user service)
//! reports failure through the same `ProviderError` taxonomy, so screens
//! can treat transport problems uniformly.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub mod logging;

/// Failure reported by a remote collaborator.
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ProviderError {
    /// The request never completed (connection refused, timeout, DNS).
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The remote answered with a non-success status.
    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The response arrived but its body could not be decoded.
    #[error("malformed response: {message}")]
    Decode { message: String },
}

impl ProviderError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Whether retrying the same call could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::Rejected { status, .. } => *status >= 500,
            Self::Decode { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// What an editor does with navigation after a mutation provider failure.
///
/// `Stay` keeps the screen in place so the operator can retry manually;
/// `GoBack` abandons the edit and reverses navigation anyway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MutationFailurePolicy {
    #[default]
    Stay,
    GoBack,
}

impl FromStr for MutationFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stay" => Ok(Self::Stay),
            "go-back" | "goback" => Ok(Self::GoBack),
            other => Err(format!("unknown mutation failure policy '{other}'")),
        }
    }
}
