//! Submission execution

use crate::catalog::project::{result_member, result_rows};
use crate::catalog::submit::{
    child_lookup_target, classify, resolve, Phase, ProgressCallback, RequestedItem, SubmitParams,
};
use crate::catalog::{require, REQUESTED_ITEM_TABLE};
use crate::error::Result;
use crate::transport::Transport;
use crate::types::{OperationOutcome, SubmissionResult};
use serde_json::Value;

/// Submit a catalog item or record producer
///
/// Issues the submission call and, when it created a parent request, one
/// lookup for the first requested item under it. Any failure (either call,
/// or a parent request without an identifier) yields a failed outcome with
/// no data; nothing is retried.
pub async fn submit_catalog_request(
    transport: &dyn Transport,
    params: &SubmitParams,
    progress: &dyn ProgressCallback,
) -> OperationOutcome<SubmissionResult> {
    match run_submission(transport, params, progress).await {
        Ok(result) => {
            progress.on_resolved(&result).await;
            progress.on_phase(Phase::Complete).await;
            let created = result.display_ref().unwrap_or("(unknown)");
            OperationOutcome::success(
                format!("Submitted catalog request; created record {created}"),
                result,
            )
        }
        Err(e) => {
            progress.on_error(&e).await;
            OperationOutcome::failure(format!("Error submitting catalog request: {e}"))
        }
    }
}

async fn run_submission(
    transport: &dyn Transport,
    params: &SubmitParams,
    progress: &dyn ProgressCallback,
) -> Result<SubmissionResult> {
    require("item_id", &params.item_id)?;

    progress.on_phase(Phase::Submitting).await;
    let body = transport
        .post(&params.endpoint(), &params.to_request_body())
        .await?;

    let shape = classify(result_member(&body));
    progress.on_submitted(&params.item_id, &shape).await;

    let child = match child_lookup_target(&shape)? {
        Some(request_id) => {
            progress.on_phase(Phase::ResolvingItem).await;
            first_requested_item(transport, request_id).await?
        }
        None => None,
    };

    Ok(resolve(&shape, child.as_ref()))
}

/// First `sc_req_item` row under a request, in whatever order the instance returns
async fn first_requested_item(
    transport: &dyn Transport,
    request_id: &str,
) -> Result<Option<RequestedItem>> {
    let query = [
        ("sysparm_query", format!("request={request_id}")),
        ("sysparm_fields", "sys_id,number".to_string()),
        ("sysparm_limit", "1".to_string()),
        ("sysparm_display_value", "true".to_string()),
    ];
    let body: Value = transport.get(REQUESTED_ITEM_TABLE, &query).await?;
    Ok(result_rows(&body).first().map(RequestedItem::from_row))
}
