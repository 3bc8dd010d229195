//! REST collaborators for the RoleCall console.
//!
//! Implements the console's provider seams against the remote admin API:
//! JSON bodies, camelCase fields, and status-code mapping into the shared
//! [`ProviderError`](rc_common::ProviderError) taxonomy.

mod auth;
mod client;
mod directory;
mod users;

pub use auth::HttpAuthenticator;
pub use client::RestClient;
pub use directory::HttpRoleDirectory;
pub use users::HttpUserService;
