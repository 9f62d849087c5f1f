//! Credential resolution and header rendering

use crate::auth::AuthSource;
use crate::error::{Error, Result};
use crate::transport::Transport;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::env;
use std::fmt;

/// Environment variable holding an OAuth bearer token
pub const TOKEN_VAR: &str = "SERVICENOW_TOKEN";
/// Environment variable holding the basic-auth user name
pub const USERNAME_VAR: &str = "SERVICENOW_USERNAME";
/// Environment variable holding the basic-auth password
pub const PASSWORD_VAR: &str = "SERVICENOW_PASSWORD";

/// Credentials attached to every outbound call
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// `Authorization: Bearer <token>`
    Bearer(String),
    /// `Authorization: Basic base64(username:password)`
    Basic {
        /// User name
        username: String,
        /// Password
        password: String,
    },
}

impl Credentials {
    /// Render the credentials as HTTP headers
    pub fn headers(&self) -> Vec<(String, String)> {
        let value = match self {
            Self::Bearer(token) => format!("Bearer {token}"),
            Self::Basic { username, password } => {
                format!("Basic {}", BASE64.encode(format!("{username}:{password}")))
            }
        };
        vec![("Authorization".to_string(), value)]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"<redacted>").finish(),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

/// ServiceNow authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Resolved credentials
    pub credentials: Credentials,
    /// Where the credentials were obtained from
    pub source: AuthSource,
}

/// Get ServiceNow authentication from the process environment
///
/// Priority:
/// 1. `SERVICENOW_TOKEN` (bearer)
/// 2. `SERVICENOW_USERNAME` + `SERVICENOW_PASSWORD` (basic)
pub fn get_auth() -> Result<AuthConfig> {
    resolve_auth(|key| env::var(key).ok())
}

/// Resolve authentication through an arbitrary variable lookup
pub fn resolve_auth<F>(lookup: F) -> Result<AuthConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(token) = non_empty(TOKEN_VAR) {
        return Ok(AuthConfig {
            credentials: Credentials::Bearer(token.trim().to_string()),
            source: AuthSource::TokenEnvVar,
        });
    }

    match (non_empty(USERNAME_VAR), non_empty(PASSWORD_VAR)) {
        (Some(username), Some(password)) => Ok(AuthConfig {
            credentials: Credentials::Basic { username, password },
            source: AuthSource::BasicEnvVar,
        }),
        (Some(_), None) => Err(Error::Auth(format!(
            "{USERNAME_VAR} is set but {PASSWORD_VAR} is missing"
        ))),
        _ => Err(Error::Auth(format!(
            "No ServiceNow authentication found. Set {TOKEN_VAR}, or {USERNAME_VAR} and {PASSWORD_VAR}"
        ))),
    }
}

/// Test authentication against the instance
///
/// Returns the user name the instance resolved the credentials to.
pub async fn test_auth(transport: &dyn Transport) -> Result<String> {
    let body = transport
        .get("/api/now/ui/user/current_user", &[])
        .await
        .map_err(|e| match e {
            Error::Api { status: 401 | 403, message } => {
                Error::Auth(format!("Invalid credentials: {message}"))
            }
            other => other,
        })?;

    body.get("result")
        .and_then(|r| r.get("user_name"))
        .and_then(serde_json::Value::as_str)
        .map(String::from)
        .ok_or_else(|| Error::Auth("instance did not report a current user".to_string()))
}
