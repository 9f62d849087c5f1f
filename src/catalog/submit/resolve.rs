//! Resolution of a classified submission to a single record

use crate::catalog::project::opt_text_field;
use crate::catalog::submit::RemoteRecordShape;
use crate::error::{Error, Result};
use crate::types::SubmissionResult;
use serde_json::Value;

/// First requested item (`sc_req_item`) found under a parent request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedItem {
    /// `sys_id` of the requested item
    pub sys_id: Option<String>,
    /// Display number (e.g. `RITM0010001`)
    pub number: Option<String>,
}

impl RequestedItem {
    /// Project a Table API row
    pub fn from_row(row: &Value) -> Self {
        Self {
            sys_id: opt_text_field(row, "sys_id"),
            number: opt_text_field(row, "number"),
        }
    }
}

/// Parent request whose requested items must be looked up
///
/// `None` for direct records. A parent request without any identifier
/// cannot be resolved.
pub fn child_lookup_target(shape: &RemoteRecordShape) -> Result<Option<&str>> {
    match shape {
        RemoteRecordShape::Direct { .. } => Ok(None),
        RemoteRecordShape::Request {
            request_id: Some(id),
            ..
        } => Ok(Some(id.as_str())),
        RemoteRecordShape::Request {
            request_id: None, ..
        } => Err(Error::Resolution(
            "Cannot locate sys_id for created record".to_string(),
        )),
    }
}

/// Settle on the record to hand back
///
/// For a parent request the looked-up requested item wins; with no child,
/// the request itself is the result. Direct records resolve to themselves
/// and ignore `child`.
pub fn resolve(shape: &RemoteRecordShape, child: Option<&RequestedItem>) -> SubmissionResult {
    match (shape, child) {
        (RemoteRecordShape::Request { .. }, Some(item)) => SubmissionResult {
            record_id: item.sys_id.clone(),
            record_number: item.number.clone(),
        },
        (
            RemoteRecordShape::Request {
                request_id,
                request_number,
            },
            None,
        ) => SubmissionResult {
            record_id: request_id.clone(),
            record_number: request_number.clone(),
        },
        (
            RemoteRecordShape::Direct {
                record_id,
                record_number,
            },
            _,
        ) => SubmissionResult {
            record_id: record_id.clone(),
            record_number: record_number.clone(),
        },
    }
}
