//! Instance configuration
//!
//! Resolves the base URL every endpoint path is joined onto.

use crate::error::{Error, Result};
use regex::Regex;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

/// Environment variable holding the instance URL
pub const INSTANCE_URL_VAR: &str = "SERVICENOW_INSTANCE_URL";

/// Environment variable holding the request timeout in seconds
pub const TIMEOUT_VAR: &str = "SERVICENOW_TIMEOUT_SECS";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const SERVICE_NOW_DOMAIN: &str = "service-now.com";

/// Connection settings for one ServiceNow instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceConfig {
    /// Base URL without trailing slash (e.g. `https://dev1.service-now.com`)
    pub instance_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl InstanceConfig {
    /// Build a config from a user-supplied instance reference
    pub fn new(instance: &str) -> Result<Self> {
        Ok(Self {
            instance_url: normalize_instance_url(instance)?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read configuration from the process environment
    ///
    /// `instance` takes precedence over `SERVICENOW_INSTANCE_URL`.
    pub fn from_env(instance: Option<&str>) -> Result<Self> {
        Self::from_lookup(instance, |key| env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(instance: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let instance = instance
            .map(String::from)
            .or_else(|| lookup(INSTANCE_URL_VAR))
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                Error::Config(format!(
                    "No ServiceNow instance configured. Pass --instance or set {INSTANCE_URL_VAR}"
                ))
            })?;

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                Error::Config(format!("{TIMEOUT_VAR} must be a whole number of seconds, got {raw:?}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self::new(&instance)?.with_timeout(Duration::from_secs(timeout_secs)))
    }

    /// Join an API path onto the instance URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.instance_url, path.trim_start_matches('/'))
    }
}

fn bare_instance_name() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9-]*$").expect("valid regex"))
}

/// Normalize an instance reference into a base URL
///
/// Accepts a full URL, a bare host (`dev1.service-now.com`) or just the
/// instance name (`dev1`).
pub fn normalize_instance_url(input: &str) -> Result<String> {
    let input = input.trim().trim_end_matches('/');
    if input.is_empty() {
        return Err(Error::Config("instance URL is empty".to_string()));
    }

    let candidate = if input.contains("://") {
        input.to_string()
    } else if bare_instance_name().is_match(input) {
        format!("https://{input}.{SERVICE_NOW_DOMAIN}")
    } else {
        format!("https://{input}")
    };

    let url = Url::parse(&candidate)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!(
            "unsupported scheme in instance URL: {}",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(Error::Config(format!("instance URL has no host: {input}")));
    }

    Ok(candidate)
}
