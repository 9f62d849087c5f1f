//! Catalog item adapters: list, get, move

use crate::catalog::project::{is_present, raw_field, result_member, result_rows, text_field};
use crate::catalog::query::{page_params, EncodedQuery};
use crate::catalog::{path_segment, require, CATALOG_ITEM_TABLE, SERVICE_CATALOG_ITEMS};
use crate::error::{Error, Result};
use crate::transport::Transport;
use crate::types::{
    CatalogItem, CatalogItemDetail, FailedItem, ItemPage, MoveReport, OperationOutcome,
};
use serde_json::{json, Value};
use tracing::{error, info};

/// Parameters for listing catalog items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemsParams {
    /// Maximum number of items to return
    pub limit: u32,
    /// Offset for pagination
    pub offset: u32,
    /// Filter by category `sys_id`
    pub category: Option<String>,
    /// Search term matched against short description and name
    pub query: Option<String>,
    /// Only return active items
    pub active: bool,
}

impl Default for ListItemsParams {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
            category: None,
            query: None,
            active: true,
        }
    }
}

impl ListItemsParams {
    /// Encoded query for the present filters
    pub fn to_query(&self) -> EncodedQuery {
        let query = if self.active {
            EncodedQuery::new().eq("active", "true")
        } else {
            EncodedQuery::new()
        };
        query
            .eq_opt("category", self.category.as_deref())
            .like_any(&["short_description", "name"], self.query.as_deref())
    }
}

/// Parameters for moving catalog items to another category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveItemsParams {
    /// Items to move
    pub item_ids: Vec<String>,
    /// Destination category `sys_id`
    pub target_category_id: String,
}

/// List catalog items
pub async fn list_catalog_items(
    transport: &dyn Transport,
    params: &ListItemsParams,
) -> OperationOutcome<ItemPage> {
    info!("Listing service catalog items");

    match fetch_items(transport, params).await {
        Ok(items) => OperationOutcome::success(
            format!("Retrieved {} catalog items", items.len()),
            ItemPage {
                total: items.len(),
                items,
                limit: params.limit,
                offset: params.offset,
            },
        ),
        Err(e) => {
            error!("Error listing catalog items: {e}");
            OperationOutcome::failure_with(
                format!("Error listing catalog items: {e}"),
                ItemPage {
                    limit: params.limit,
                    offset: params.offset,
                    ..ItemPage::default()
                },
            )
        }
    }
}

async fn fetch_items(transport: &dyn Transport, params: &ListItemsParams) -> Result<Vec<CatalogItem>> {
    let query = page_params(params.limit, params.offset, &params.to_query());
    let body = transport.get(CATALOG_ITEM_TABLE, &query).await?;
    Ok(result_rows(&body).iter().map(project_item).collect())
}

fn project_item(record: &Value) -> CatalogItem {
    CatalogItem {
        sys_id: text_field(record, "sys_id"),
        name: text_field(record, "name"),
        short_description: text_field(record, "short_description"),
        category: text_field(record, "category"),
        price: text_field(record, "price"),
        picture: text_field(record, "picture"),
        active: text_field(record, "active"),
        order: text_field(record, "order"),
    }
}

/// Get a single catalog item with its variables, UI policies and client scripts
pub async fn get_catalog_item(
    transport: &dyn Transport,
    item_id: &str,
) -> OperationOutcome<CatalogItemDetail> {
    info!("Getting service catalog item: {item_id}");

    match fetch_item(transport, item_id).await {
        Ok(item) => OperationOutcome::success(format!("Retrieved catalog item: {}", item.name), item),
        Err(Error::NotFound(id)) => {
            OperationOutcome::failure(format!("Catalog item not found: {id}"))
        }
        Err(e) => {
            error!("Error getting catalog item: {e}");
            OperationOutcome::failure(format!("Error getting catalog item: {e}"))
        }
    }
}

async fn fetch_item(transport: &dyn Transport, item_id: &str) -> Result<CatalogItemDetail> {
    require("item_id", item_id)?;

    let path = format!("{SERVICE_CATALOG_ITEMS}/{}", path_segment(item_id));
    let query = [
        ("sysparm_display_value", "true".to_string()),
        ("sysparm_exclude_reference_link", "true".to_string()),
    ];
    let body = transport.get(&path, &query).await?;

    let record = result_member(&body);
    if !is_present(record) {
        return Err(Error::NotFound(item_id.to_string()));
    }
    Ok(project_item_detail(record))
}

fn project_item_detail(record: &Value) -> CatalogItemDetail {
    CatalogItemDetail {
        sys_id: text_field(record, "sys_id"),
        name: text_field(record, "name"),
        short_description: text_field(record, "short_description"),
        description: text_field(record, "description"),
        category: text_field(record, "category"),
        price: text_field(record, "price"),
        picture: text_field(record, "picture"),
        active: text_field(record, "active"),
        order: text_field(record, "order"),
        delivery_time: text_field(record, "delivery_time"),
        availability: text_field(record, "availability"),
        mandatory_attachment: text_field(record, "mandatory_attachment"),
        variables: raw_field(record, "variables"),
        ui_policies: raw_field(record, "ui_policy"),
        client_scripts: raw_field(record, "client_script"),
    }
}

/// Move catalog items to another category
///
/// Items are patched one at a time; a failure on one item does not stop
/// the rest. The outcome is a success if at least one item moved.
pub async fn move_catalog_items(
    transport: &dyn Transport,
    params: &MoveItemsParams,
) -> OperationOutcome<MoveReport> {
    info!(
        "Moving {} catalog items to category: {}",
        params.item_ids.len(),
        params.target_category_id
    );

    if let Err(e) = validate_move(params) {
        return OperationOutcome::failure(format!("Error moving catalog items: {e}"));
    }

    let body = json!({ "category": params.target_category_id });
    let mut report = MoveReport::default();

    for item_id in &params.item_ids {
        match move_item(transport, item_id, &body).await {
            Ok(()) => report.moved_items_count += 1,
            Err(e) => {
                error!("Error moving catalog item {item_id}: {e}");
                report.failed_items.push(FailedItem {
                    item_id: item_id.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    summarize_move(params, report)
}

fn validate_move(params: &MoveItemsParams) -> Result<()> {
    require("target_category_id", &params.target_category_id)?;
    if params.item_ids.is_empty() {
        return Err(Error::InvalidInput("item_ids must not be empty".to_string()));
    }
    Ok(())
}

async fn move_item(transport: &dyn Transport, item_id: &str, body: &Value) -> Result<()> {
    require("item_id", item_id)?;
    let path = format!("{CATALOG_ITEM_TABLE}/{}", path_segment(item_id));
    transport.patch(&path, body).await?;
    Ok(())
}

fn summarize_move(params: &MoveItemsParams, report: MoveReport) -> OperationOutcome<MoveReport> {
    let moved = report.moved_items_count;
    let failed = report.failed_items.len();

    if failed == 0 {
        OperationOutcome::success(
            format!(
                "Successfully moved {moved} catalog items to category {}",
                params.target_category_id
            ),
            report,
        )
    } else if moved > 0 {
        OperationOutcome::success(
            format!("Partially moved catalog items. {moved} succeeded, {failed} failed."),
            report,
        )
    } else {
        OperationOutcome::failure_with("Failed to move any catalog items", report)
    }
}
