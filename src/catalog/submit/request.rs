//! Submission parameters and request body

use crate::catalog::{path_segment, SERVICE_CATALOG_ITEMS};
use crate::types::ItemType;
use serde_json::{Map, Value};

/// Parameters for submitting a catalog item or record producer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitParams {
    /// Catalog item or record producer `sys_id`
    pub item_id: String,
    /// Variable values, passed through untouched
    pub variables: Option<Map<String, Value>>,
    /// Item or producer
    pub item_type: ItemType,
    /// Quantity to order (items only)
    pub quantity: Option<u32>,
}

impl SubmitParams {
    /// Submit a catalog item with no variables
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            ..Self::default()
        }
    }

    /// Attach variable values
    #[must_use]
    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Set the submission kind
    #[must_use]
    pub const fn with_item_type(mut self, item_type: ItemType) -> Self {
        self.item_type = item_type;
        self
    }

    /// Set the order quantity
    #[must_use]
    pub const fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Submission endpoint path for the item type
    pub fn endpoint(&self) -> String {
        let action = match self.item_type {
            ItemType::Item => "order_now",
            ItemType::Producer => "submit_producer",
        };
        format!("{SERVICE_CATALOG_ITEMS}/{}/{action}", path_segment(&self.item_id))
    }

    /// Request body
    ///
    /// `variables` is left out entirely when absent or empty; the instance
    /// treats a missing key differently from an empty map.
    pub fn to_request_body(&self) -> Value {
        let mut body = Map::new();
        if let Some(variables) = self.variables.as_ref().filter(|v| !v.is_empty()) {
            body.insert("variables".to_string(), Value::Object(variables.clone()));
        }
        if let (ItemType::Item, Some(quantity)) = (self.item_type, self.quantity) {
            body.insert(
                "sysparm_quantity".to_string(),
                Value::String(quantity.to_string()),
            );
        }
        Value::Object(body)
    }
}
