//! Categories commands - list, create and update catalog categories

use crate::cli::connect;
use crate::cli::output::{emit, record_url};
use crate::cli::style::{hyperlink_url, Stylize};
use anstream::eprintln;
use sn_catalog::catalog::{
    create_catalog_category, list_catalog_categories, update_catalog_category,
    CreateCategoryParams, ListCategoriesParams, UpdateCategoryParams,
};
use sn_catalog::transport::Transport;
use sn_catalog::types::{Category, OperationOutcome};
use std::process::ExitCode;

/// Run `categories list`
pub async fn run_categories_list(
    instance: Option<&str>,
    params: &ListCategoriesParams,
) -> anyhow::Result<ExitCode> {
    let transport = connect(instance)?;
    let outcome = list_catalog_categories(&transport, params).await;
    emit(&outcome)
}

/// Run `categories create`
pub async fn run_categories_create(
    instance: Option<&str>,
    params: &CreateCategoryParams,
) -> anyhow::Result<ExitCode> {
    let transport = connect(instance)?;
    let outcome = create_catalog_category(&transport, params).await;
    emit_category(&transport, &outcome)
}

/// Run `categories update`
pub async fn run_categories_update(
    instance: Option<&str>,
    params: &UpdateCategoryParams,
) -> anyhow::Result<ExitCode> {
    let transport = connect(instance)?;
    let outcome = update_catalog_category(&transport, params).await;
    emit_category(&transport, &outcome)
}

fn emit_category(
    transport: &dyn Transport,
    outcome: &OperationOutcome<Category>,
) -> anyhow::Result<ExitCode> {
    let code = emit(outcome)?;
    if let Some(category) = outcome.data.as_ref().filter(|c| !c.sys_id.is_empty()) {
        let url = record_url(transport.instance_url(), "sc_category", &category.sys_id);
        eprintln!("  {}", hyperlink_url(&url).muted());
    }
    Ok(code)
}
