//! Catalog category adapters: list, create, update

use crate::catalog::project::{result_member, result_rows, text_field};
use crate::catalog::query::{page_params, EncodedQuery};
use crate::catalog::{path_segment, require, CATEGORY_TABLE};
use crate::error::Result;
use crate::transport::Transport;
use crate::types::{Category, CategoryPage, OperationOutcome};
use serde_json::{Map, Value};
use tracing::{error, info};

/// Parameters for listing catalog categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCategoriesParams {
    /// Maximum number of categories to return
    pub limit: u32,
    /// Offset for pagination
    pub offset: u32,
    /// Search term matched against title and description
    pub query: Option<String>,
    /// Only return active categories
    pub active: bool,
}

impl Default for ListCategoriesParams {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
            query: None,
            active: true,
        }
    }
}

impl ListCategoriesParams {
    /// Encoded query for the present filters
    pub fn to_query(&self) -> EncodedQuery {
        let query = if self.active {
            EncodedQuery::new().eq("active", "true")
        } else {
            EncodedQuery::new()
        };
        query.like_any(&["title", "description"], self.query.as_deref())
    }
}

/// Parameters for creating a catalog category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryParams {
    /// Category title
    pub title: String,
    /// Description
    pub description: Option<String>,
    /// Parent category `sys_id`
    pub parent: Option<String>,
    /// Icon
    pub icon: Option<String>,
    /// Whether the category is active
    pub active: bool,
    /// Sort order
    pub order: Option<i64>,
}

impl CreateCategoryParams {
    /// New active category with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            parent: None,
            icon: None,
            active: true,
            order: None,
        }
    }

    /// Request body; optional fields are omitted when absent
    pub fn to_request_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("title".to_string(), Value::String(self.title.clone()));
        insert_common(
            &mut body,
            &CategoryFields {
                description: self.description.as_deref(),
                parent: self.parent.as_deref(),
                icon: self.icon.as_deref(),
                active: Some(self.active),
                order: self.order,
            },
        );
        Value::Object(body)
    }
}

/// Parameters for updating a catalog category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCategoryParams {
    /// Category to update
    pub category_id: String,
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New parent category `sys_id`
    pub parent: Option<String>,
    /// New icon
    pub icon: Option<String>,
    /// New active flag
    pub active: Option<bool>,
    /// New sort order
    pub order: Option<i64>,
}

impl UpdateCategoryParams {
    /// Request body holding only the fields being changed
    pub fn to_request_body(&self) -> Value {
        let mut body = Map::new();
        if let Some(title) = &self.title {
            body.insert("title".to_string(), Value::String(title.clone()));
        }
        insert_common(
            &mut body,
            &CategoryFields {
                description: self.description.as_deref(),
                parent: self.parent.as_deref(),
                icon: self.icon.as_deref(),
                active: self.active,
                order: self.order,
            },
        );
        Value::Object(body)
    }
}

struct CategoryFields<'a> {
    description: Option<&'a str>,
    parent: Option<&'a str>,
    icon: Option<&'a str>,
    active: Option<bool>,
    order: Option<i64>,
}

// The Table API takes booleans and numbers as strings.
fn insert_common(body: &mut Map<String, Value>, fields: &CategoryFields<'_>) {
    let text = [
        ("description", fields.description),
        ("parent", fields.parent),
        ("icon", fields.icon),
    ];
    for (key, value) in text {
        if let Some(value) = value {
            body.insert(key.to_string(), Value::String(value.to_string()));
        }
    }
    if let Some(active) = fields.active {
        body.insert("active".to_string(), Value::String(active.to_string()));
    }
    if let Some(order) = fields.order {
        body.insert("order".to_string(), Value::String(order.to_string()));
    }
}

fn project_category(record: &Value) -> Category {
    Category {
        sys_id: text_field(record, "sys_id"),
        title: text_field(record, "title"),
        description: text_field(record, "description"),
        parent: text_field(record, "parent"),
        icon: text_field(record, "icon"),
        active: text_field(record, "active"),
        order: text_field(record, "order"),
    }
}

/// List catalog categories
pub async fn list_catalog_categories(
    transport: &dyn Transport,
    params: &ListCategoriesParams,
) -> OperationOutcome<CategoryPage> {
    info!("Listing service catalog categories");

    let query = page_params(params.limit, params.offset, &params.to_query());
    match transport.get(CATEGORY_TABLE, &query).await {
        Ok(body) => {
            let categories: Vec<Category> = result_rows(&body).iter().map(project_category).collect();
            OperationOutcome::success(
                format!("Retrieved {} catalog categories", categories.len()),
                CategoryPage {
                    total: categories.len(),
                    categories,
                    limit: params.limit,
                    offset: params.offset,
                },
            )
        }
        Err(e) => {
            error!("Error listing catalog categories: {e}");
            OperationOutcome::failure_with(
                format!("Error listing catalog categories: {e}"),
                CategoryPage {
                    limit: params.limit,
                    offset: params.offset,
                    ..CategoryPage::default()
                },
            )
        }
    }
}

/// Create a catalog category
pub async fn create_catalog_category(
    transport: &dyn Transport,
    params: &CreateCategoryParams,
) -> OperationOutcome<Category> {
    info!("Creating new service catalog category");

    match post_category(transport, params).await {
        Ok(category) => OperationOutcome::success(
            format!("Created catalog category: {}", params.title),
            category,
        ),
        Err(e) => {
            error!("Error creating catalog category: {e}");
            OperationOutcome::failure(format!("Error creating catalog category: {e}"))
        }
    }
}

async fn post_category(transport: &dyn Transport, params: &CreateCategoryParams) -> Result<Category> {
    require("title", &params.title)?;
    let body = transport.post(CATEGORY_TABLE, &params.to_request_body()).await?;
    Ok(project_category(result_member(&body)))
}

/// Update a catalog category
pub async fn update_catalog_category(
    transport: &dyn Transport,
    params: &UpdateCategoryParams,
) -> OperationOutcome<Category> {
    info!("Updating service catalog category: {}", params.category_id);

    match patch_category(transport, params).await {
        Ok(category) => OperationOutcome::success(
            format!("Updated catalog category: {}", params.category_id),
            category,
        ),
        Err(e) => {
            error!("Error updating catalog category: {e}");
            OperationOutcome::failure(format!("Error updating catalog category: {e}"))
        }
    }
}

async fn patch_category(transport: &dyn Transport, params: &UpdateCategoryParams) -> Result<Category> {
    require("category_id", &params.category_id)?;
    let path = format!("{CATEGORY_TABLE}/{}", path_segment(&params.category_id));
    let body = transport.patch(&path, &params.to_request_body()).await?;
    Ok(project_category(result_member(&body)))
}
