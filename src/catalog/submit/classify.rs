//! Shape classification of submission responses

use crate::catalog::project::{opt_text_field, text_field};
use serde_json::Value;

/// Table name reported when a parent request was created
pub const REQUEST_TABLE: &str = "sc_request";

/// What a submission created, inferred from the response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteRecordShape {
    /// A parent request (`sc_request`); the work item lives underneath it
    Request {
        /// `sys_id`, falling back to `request_id`
        request_id: Option<String>,
        /// `request_number`, falling back to `number`
        request_number: Option<String>,
    },
    /// The submission created the final record directly
    Direct {
        /// `sys_id`
        record_id: Option<String>,
        /// `number`, falling back to `request_number`
        record_number: Option<String>,
    },
}

/// Classify the `result` member of a submission response
///
/// `order_now` reports the created table in `table`, `submit_producer` in
/// `record`; either one naming `sc_request` marks a parent request.
/// Everything else, including a response with neither hint, is treated as
/// a direct record.
pub fn classify(result: &Value) -> RemoteRecordShape {
    let created_table = Some(text_field(result, "table"))
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| text_field(result, "record"));

    if created_table == REQUEST_TABLE {
        RemoteRecordShape::Request {
            request_id: opt_text_field(result, "sys_id")
                .or_else(|| opt_text_field(result, "request_id")),
            request_number: opt_text_field(result, "request_number")
                .or_else(|| opt_text_field(result, "number")),
        }
    } else {
        RemoteRecordShape::Direct {
            record_id: opt_text_field(result, "sys_id"),
            record_number: opt_text_field(result, "number")
                .or_else(|| opt_text_field(result, "request_number")),
        }
    }
}
