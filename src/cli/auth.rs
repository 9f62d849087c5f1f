//! Auth command - test and explain authentication

use crate::cli::connect;
use crate::cli::style::{check, Stylize};
use anstream::{eprintln, println};
use sn_catalog::auth::{get_auth, test_auth, PASSWORD_VAR, TOKEN_VAR, USERNAME_VAR};
use sn_catalog::instance::INSTANCE_URL_VAR;
use sn_catalog::transport::Transport;

/// Run the auth test command
pub async fn run_auth_test(instance: Option<&str>) -> anyhow::Result<()> {
    let transport = connect(instance)?;
    let source = get_auth()?.source;
    eprintln!("Testing authentication against {}...", transport.instance_url().accent());

    let username = test_auth(&transport).await?;
    eprintln!("{} Authenticated as: {}", check(), username.emphasis());
    eprintln!("  {}", format!("Credential source: {source:?}").muted());
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("{}", "ServiceNow Authentication Setup".emphasis());
    println!();
    println!("Instance:");
    println!("  Set {INSTANCE_URL_VAR} (e.g. https://dev12345.service-now.com or just dev12345)");
    println!("  or pass --instance on every command");
    println!();
    println!("Option 1: OAuth token (recommended)");
    println!("  Set {TOKEN_VAR}");
    println!();
    println!("Option 2: Basic authentication");
    println!("  Set {USERNAME_VAR} and {PASSWORD_VAR}");
    println!();
    println!("Then run: sncat auth test");
}
