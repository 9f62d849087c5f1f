//! Service Catalog adapters
//!
//! Every operation takes a [`Transport`](crate::transport::Transport),
//! performs its round trip(s) and folds the result, success or failure,
//! into an [`OperationOutcome`](crate::types::OperationOutcome). Errors never
//! escape an adapter.

mod categories;
mod items;
mod project;
mod query;
pub mod submit;

pub use categories::{
    create_catalog_category, list_catalog_categories, update_catalog_category,
    CreateCategoryParams, ListCategoriesParams, UpdateCategoryParams,
};
pub use items::{
    get_catalog_item, list_catalog_items, move_catalog_items, ListItemsParams, MoveItemsParams,
};
pub use query::EncodedQuery;
pub use submit::{submit_catalog_request, SubmitParams};

/// Table API path for catalog items
pub(crate) const CATALOG_ITEM_TABLE: &str = "/api/now/table/sc_cat_item";
/// Table API path for catalog categories
pub(crate) const CATEGORY_TABLE: &str = "/api/now/table/sc_category";
/// Table API path for requested items
pub(crate) const REQUESTED_ITEM_TABLE: &str = "/api/now/table/sc_req_item";
/// Service Catalog API path for items
pub(crate) const SERVICE_CATALOG_ITEMS: &str = "/api/sn_sc/servicecatalog/items";

/// Reject blank required identifiers before any call is made
pub(crate) fn require(field: &str, value: &str) -> crate::error::Result<()> {
    if value.trim().is_empty() {
        return Err(crate::error::Error::InvalidInput(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

/// Percent-encode an identifier for use as a path segment
pub(crate) fn path_segment(id: &str) -> String {
    urlencoding::encode(id.trim()).into_owned()
}
