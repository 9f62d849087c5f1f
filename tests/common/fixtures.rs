//! Test data factories for ServiceNow responses
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use serde_json::{json, Value};

pub const ORDER_NOW_ITM001: &str = "/api/sn_sc/servicecatalog/items/ITM001/order_now";
pub const SUBMIT_PRODUCER_PRD1: &str = "/api/sn_sc/servicecatalog/items/PRD1/submit_producer";
pub const REQ_ITEM_TABLE: &str = "/api/now/table/sc_req_item";
pub const CAT_ITEM_TABLE: &str = "/api/now/table/sc_cat_item";
pub const CATEGORY_TABLE: &str = "/api/now/table/sc_category";

/// `order_now` response for a created parent request
pub fn request_created(sys_id: &str, request_number: &str) -> Value {
    json!({
        "result": {
            "table": "sc_request",
            "sys_id": sys_id,
            "request_number": request_number,
            "request_id": sys_id,
        }
    })
}

/// `submit_producer` response for a directly created record
pub fn record_produced(table: &str, sys_id: &str, number: &str) -> Value {
    json!({
        "result": {
            "record": table,
            "sys_id": sys_id,
            "number": number,
            "table": "",
        }
    })
}

/// `sc_req_item` lookup response
pub fn requested_items(rows: &[(&str, &str)]) -> Value {
    let rows: Vec<Value> = rows
        .iter()
        .map(|(sys_id, number)| json!({"sys_id": sys_id, "number": number}))
        .collect();
    json!({ "result": rows })
}

/// A catalog item row with some extraneous fields
pub fn catalog_item_row(sys_id: &str, name: &str) -> Value {
    json!({
        "sys_id": sys_id,
        "name": name,
        "short_description": format!("{name} for staff"),
        "category": "Hardware",
        "price": "$1,200.00",
        "picture": "",
        "active": "true",
        "order": "100",
        "sys_updated_by": "admin",
        "sys_mod_count": "7",
    })
}

/// A category row
pub fn category_row(sys_id: &str, title: &str) -> Value {
    json!({
        "sys_id": sys_id,
        "title": title,
        "description": format!("{title} things"),
        "parent": "",
        "icon": "icon-box",
        "active": "true",
        "order": "10",
    })
}
