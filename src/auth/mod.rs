//! Authentication for ServiceNow instances
//!
//! Supports OAuth bearer tokens and basic credentials from environment
//! variables.

mod credentials;

pub use credentials::{
    get_auth, resolve_auth, test_auth, AuthConfig, Credentials, PASSWORD_VAR, TOKEN_VAR,
    USERNAME_VAR,
};

/// Source of authentication credentials
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Bearer token from `SERVICENOW_TOKEN`
    TokenEnvVar,
    /// Username/password from `SERVICENOW_USERNAME` / `SERVICENOW_PASSWORD`
    BasicEnvVar,
}
