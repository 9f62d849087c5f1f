//! Core types for sn-catalog

use serde::{Deserialize, Serialize};

/// Uniform result of every catalog operation
///
/// A failed outcome never carries record references in `data`; list
/// operations keep only their pagination context and Move Items its
/// per-item failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOutcome<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable description of the result
    pub message: String,
    /// Operation payload
    pub data: Option<T>,
}

impl<T> OperationOutcome<T> {
    /// Successful outcome with a payload
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Failed outcome without a payload
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Failed outcome that still reports context (pagination, failed ids)
    pub fn failure_with(message: impl Into<String>, data: T) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: Some(data),
        }
    }
}

/// What kind of catalog entry is being submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Regular catalog item, ordered through `order_now`
    #[default]
    Item,
    /// Record producer, submitted through `submit_producer`
    Producer,
}

/// The record a submission resolved to
///
/// Both fields always come from the same remote record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// `sys_id` of the resolved record
    pub record_id: Option<String>,
    /// Display number of the resolved record (e.g. `RITM0010001`)
    pub record_number: Option<String>,
}

impl SubmissionResult {
    /// Number if present, else id
    pub fn display_ref(&self) -> Option<&str> {
        self.record_number
            .as_deref()
            .or(self.record_id.as_deref())
    }
}

/// A catalog item as returned by List Items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Item `sys_id`
    pub sys_id: String,
    /// Item name
    pub name: String,
    /// Short description
    pub short_description: String,
    /// Category display value
    pub category: String,
    /// Price display value
    pub price: String,
    /// Picture reference
    pub picture: String,
    /// `"true"` / `"false"`
    pub active: String,
    /// Sort order
    pub order: String,
}

/// Full catalog item as returned by Get Item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItemDetail {
    /// Item `sys_id`
    pub sys_id: String,
    /// Item name
    pub name: String,
    /// Short description
    pub short_description: String,
    /// Long description (HTML)
    pub description: String,
    /// Category display value
    pub category: String,
    /// Price display value
    pub price: String,
    /// Picture reference
    pub picture: String,
    /// `"true"` / `"false"`
    pub active: String,
    /// Sort order
    pub order: String,
    /// Delivery time
    pub delivery_time: String,
    /// Availability (desktop, mobile, ...)
    pub availability: String,
    /// Whether an attachment is mandatory
    pub mandatory_attachment: String,
    /// Variable definitions, passed through as returned
    pub variables: serde_json::Value,
    /// UI policies, passed through as returned
    pub ui_policies: serde_json::Value,
    /// Client scripts, passed through as returned
    pub client_scripts: serde_json::Value,
}

/// A catalog category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category `sys_id`
    pub sys_id: String,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Parent category
    pub parent: String,
    /// Icon
    pub icon: String,
    /// `"true"` / `"false"`
    pub active: String,
    /// Sort order
    pub order: String,
}

/// One page of catalog items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPage {
    /// Projected items
    pub items: Vec<CatalogItem>,
    /// Number of items in this page
    pub total: usize,
    /// Requested page size
    pub limit: u32,
    /// Requested offset
    pub offset: u32,
}

/// One page of catalog categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPage {
    /// Projected categories
    pub categories: Vec<Category>,
    /// Number of categories in this page
    pub total: usize,
    /// Requested page size
    pub limit: u32,
    /// Requested offset
    pub offset: u32,
}

/// A catalog item that could not be moved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedItem {
    /// Item `sys_id`
    pub item_id: String,
    /// Transport error text
    pub error: String,
}

/// Result of moving items between categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Number of items moved
    pub moved_items_count: usize,
    /// Items that failed, in input order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed_items: Vec<FailedItem>,
}
