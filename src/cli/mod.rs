//! CLI commands
//!
//! Command implementations for the `sncat` binary. Every command prints its
//! outcome as JSON on stdout and a one-line status on stderr.

mod auth;
mod categories;
mod items;
mod output;
mod progress;
mod style;
mod submit;

pub use auth::{run_auth_setup, run_auth_test};
pub use categories::{run_categories_create, run_categories_list, run_categories_update};
pub use items::{run_items_get, run_items_list, run_items_move};
pub use submit::run_submit;

use sn_catalog::auth::get_auth;
use sn_catalog::error::Result;
use sn_catalog::instance::InstanceConfig;
use sn_catalog::transport::HttpTransport;

/// Build an authenticated transport from flags and environment
pub fn connect(instance: Option<&str>) -> Result<HttpTransport> {
    let config = InstanceConfig::from_env(instance)?;
    let auth = get_auth()?;
    tracing::debug!(instance = %config.instance_url, source = ?auth.source, "connecting");
    HttpTransport::new(config, &auth.credentials)
}
