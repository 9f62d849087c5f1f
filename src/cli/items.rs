//! Items commands - list, get and move catalog items

use crate::cli::connect;
use crate::cli::output::{emit, print_json, record_url, status_line};
use crate::cli::style::{hyperlink_url, Stylize};
use anstream::eprintln;
use sn_catalog::catalog::{
    get_catalog_item, list_catalog_items, move_catalog_items, ListItemsParams, MoveItemsParams,
};
use sn_catalog::transport::Transport;
use std::process::ExitCode;

/// Run `items list`
pub async fn run_items_list(
    instance: Option<&str>,
    params: &ListItemsParams,
) -> anyhow::Result<ExitCode> {
    let transport = connect(instance)?;
    let outcome = list_catalog_items(&transport, params).await;
    emit(&outcome)
}

/// Run `items get`
pub async fn run_items_get(instance: Option<&str>, item_id: &str) -> anyhow::Result<ExitCode> {
    let transport = connect(instance)?;
    let outcome = get_catalog_item(&transport, item_id).await;
    let code = emit(&outcome)?;

    if let Some(item) = outcome.data.as_ref().filter(|i| !i.sys_id.is_empty()) {
        let url = record_url(transport.instance_url(), "sc_cat_item", &item.sys_id);
        eprintln!("  {}", hyperlink_url(&url).muted());
    }
    Ok(code)
}

/// Run `items move`
pub async fn run_items_move(
    instance: Option<&str>,
    params: &MoveItemsParams,
) -> anyhow::Result<ExitCode> {
    let transport = connect(instance)?;
    let outcome = move_catalog_items(&transport, params).await;
    print_json(&outcome)?;

    let failures = outcome
        .data
        .as_ref()
        .map(|report| report.failed_items.as_slice())
        .unwrap_or_default();
    let code = status_line(outcome.success, &outcome.message, !failures.is_empty());
    for failed in failures {
        eprintln!("  {}: {}", failed.item_id.accent(), failed.error.muted());
    }
    Ok(code)
}
