//! Submission resolution against a mock transport

mod common;

use async_trait::async_trait;
use common::fixtures::{
    record_produced, request_created, requested_items, ORDER_NOW_ITM001, REQ_ITEM_TABLE,
    SUBMIT_PRODUCER_PRD1,
};
use common::mock_transport::{envelope, Method, MockTransport};
use serde_json::{json, Map};
use sn_catalog::catalog::submit::{
    submit_catalog_request, NoopProgress, Phase, ProgressCallback, RemoteRecordShape,
    SubmitParams,
};
use sn_catalog::error::Error;
use sn_catalog::types::{ItemType, SubmissionResult};
use std::sync::Mutex;

/// Progress callback that records every event
#[derive(Default)]
struct RecordingProgress {
    phases: Mutex<Vec<Phase>>,
    shapes: Mutex<Vec<RemoteRecordShape>>,
    resolved: Mutex<Vec<SubmissionResult>>,
    errors: Mutex<Vec<String>>,
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_phase(&self, phase: Phase) {
        self.phases.lock().unwrap().push(phase);
    }
    async fn on_submitted(&self, _item_id: &str, shape: &RemoteRecordShape) {
        self.shapes.lock().unwrap().push(shape.clone());
    }
    async fn on_resolved(&self, result: &SubmissionResult) {
        self.resolved.lock().unwrap().push(result.clone());
    }
    async fn on_error(&self, error: &Error) {
        self.errors.lock().unwrap().push(error.to_string());
    }
}

fn resolved(record_id: &str, record_number: &str) -> SubmissionResult {
    SubmissionResult {
        record_id: Some(record_id.to_string()),
        record_number: Some(record_number.to_string()),
    }
}

#[tokio::test]
async fn test_request_resolves_to_child_item() {
    let transport = MockTransport::new();
    transport
        .respond(Method::Post, ORDER_NOW_ITM001, request_created("REQ1", "REQ0001"))
        .respond(
            Method::Get,
            REQ_ITEM_TABLE,
            requested_items(&[("RITM9", "RITM0009")]),
        );

    let outcome =
        submit_catalog_request(&transport, &SubmitParams::new("ITM001"), &NoopProgress).await;

    assert!(outcome.success, "{}", outcome.message);
    assert_eq!(outcome.data, Some(resolved("RITM9", "RITM0009")));
    assert_eq!(
        outcome.message,
        "Submitted catalog request; created record RITM0009"
    );
    transport.assert_call_count(2);
}

#[tokio::test]
async fn test_request_without_child_falls_back_to_parent() {
    let transport = MockTransport::new();
    transport
        .respond(Method::Post, ORDER_NOW_ITM001, request_created("REQ1", "REQ0001"))
        .respond(Method::Get, REQ_ITEM_TABLE, envelope(json!([])));

    let outcome =
        submit_catalog_request(&transport, &SubmitParams::new("ITM001"), &NoopProgress).await;

    assert!(outcome.success);
    assert_eq!(outcome.data, Some(resolved("REQ1", "REQ0001")));
}

#[tokio::test]
async fn test_producer_direct_record() {
    let transport = MockTransport::new();
    transport.respond(
        Method::Post,
        SUBMIT_PRODUCER_PRD1,
        record_produced("incident", "INC1", "INC0001"),
    );

    let params = SubmitParams::new("PRD1").with_item_type(ItemType::Producer);
    let outcome = submit_catalog_request(&transport, &params, &NoopProgress).await;

    assert!(outcome.success);
    assert_eq!(outcome.data, Some(resolved("INC1", "INC0001")));
    // No lookup for direct records
    transport.assert_call_count(1);
}

#[tokio::test]
async fn test_lookup_query_parameters() {
    let transport = MockTransport::new();
    transport
        .respond(Method::Post, ORDER_NOW_ITM001, request_created("REQ1", "REQ0001"))
        .respond(Method::Get, REQ_ITEM_TABLE, requested_items(&[]));

    submit_catalog_request(&transport, &SubmitParams::new("ITM001"), &NoopProgress).await;

    let lookups = transport.calls_to(Method::Get, REQ_ITEM_TABLE);
    assert_eq!(lookups.len(), 1);
    let lookup = &lookups[0];
    assert_eq!(lookup.query_param("sysparm_query"), Some("request=REQ1"));
    assert_eq!(lookup.query_param("sysparm_fields"), Some("sys_id,number"));
    assert_eq!(lookup.query_param("sysparm_limit"), Some("1"));
    assert_eq!(lookup.query_param("sysparm_display_value"), Some("true"));
}

#[tokio::test]
async fn test_request_id_used_when_sys_id_missing() {
    let transport = MockTransport::new();
    transport
        .respond(
            Method::Post,
            ORDER_NOW_ITM001,
            envelope(json!({"table": "sc_request", "request_id": "REQ7", "number": "REQ0007"})),
        )
        .respond(Method::Get, REQ_ITEM_TABLE, requested_items(&[]));

    let outcome =
        submit_catalog_request(&transport, &SubmitParams::new("ITM001"), &NoopProgress).await;

    assert_eq!(outcome.data, Some(resolved("REQ7", "REQ0007")));
    let lookup = &transport.calls_to(Method::Get, REQ_ITEM_TABLE)[0];
    assert_eq!(lookup.query_param("sysparm_query"), Some("request=REQ7"));
}

#[tokio::test]
async fn test_request_without_any_id_fails() {
    let transport = MockTransport::new();
    transport.respond(
        Method::Post,
        ORDER_NOW_ITM001,
        envelope(json!({"table": "sc_request", "request_number": "REQ0001"})),
    );

    let outcome =
        submit_catalog_request(&transport, &SubmitParams::new("ITM001"), &NoopProgress).await;

    assert!(!outcome.success);
    assert_eq!(outcome.data, None);
    assert!(outcome.message.contains("Cannot locate sys_id"));
    // Never looks up children without a parent id
    transport.assert_call_count(1);
}

#[tokio::test]
async fn test_submission_transport_failure() {
    let transport = MockTransport::new();
    transport.fail(Method::Post, ORDER_NOW_ITM001, "Internal Server Error");

    let outcome =
        submit_catalog_request(&transport, &SubmitParams::new("ITM001"), &NoopProgress).await;

    assert!(!outcome.success);
    assert_eq!(outcome.data, None);
    assert!(outcome.message.starts_with("Error submitting catalog request:"));
    assert!(outcome.message.contains("Internal Server Error"));
    // No retry, no lookup
    transport.assert_call_count(1);
}

#[tokio::test]
async fn test_lookup_transport_failure() {
    let transport = MockTransport::new();
    transport
        .respond(Method::Post, ORDER_NOW_ITM001, request_created("REQ1", "REQ0001"))
        .fail(Method::Get, REQ_ITEM_TABLE, "ACL denied");

    let outcome =
        submit_catalog_request(&transport, &SubmitParams::new("ITM001"), &NoopProgress).await;

    assert!(!outcome.success);
    assert_eq!(outcome.data, None);
    assert!(outcome.message.contains("ACL denied"));
}

#[tokio::test]
async fn test_body_omits_variables_when_absent() {
    let transport = MockTransport::new();
    transport.respond(
        Method::Post,
        ORDER_NOW_ITM001,
        envelope(json!({"sys_id": "X", "number": "RITM0001"})),
    );

    submit_catalog_request(&transport, &SubmitParams::new("ITM001"), &NoopProgress).await;

    let post = &transport.calls_to(Method::Post, ORDER_NOW_ITM001)[0];
    assert_eq!(post.body, Some(json!({})));
}

#[tokio::test]
async fn test_body_carries_variables() {
    let transport = MockTransport::new();
    transport.respond(
        Method::Post,
        ORDER_NOW_ITM001,
        envelope(json!({"sys_id": "X", "number": "RITM0001"})),
    );

    let mut vars = Map::new();
    vars.insert("model".into(), json!("MacBook Pro"));
    let params = SubmitParams::new("ITM001").with_variables(vars);
    submit_catalog_request(&transport, &params, &NoopProgress).await;

    let post = &transport.calls_to(Method::Post, ORDER_NOW_ITM001)[0];
    assert_eq!(
        post.body,
        Some(json!({"variables": {"model": "MacBook Pro"}}))
    );
}

#[tokio::test]
async fn test_empty_item_id_makes_no_calls() {
    let transport = MockTransport::new();

    let outcome = submit_catalog_request(&transport, &SubmitParams::new("  "), &NoopProgress).await;

    assert!(!outcome.success);
    assert_eq!(outcome.data, None);
    transport.assert_call_count(0);
}

#[tokio::test]
async fn test_message_falls_back_to_record_id() {
    let transport = MockTransport::new();
    transport.respond(
        Method::Post,
        SUBMIT_PRODUCER_PRD1,
        envelope(json!({"record": "u_custom", "sys_id": "C1"})),
    );

    let params = SubmitParams::new("PRD1").with_item_type(ItemType::Producer);
    let outcome = submit_catalog_request(&transport, &params, &NoopProgress).await;

    assert!(outcome.success);
    assert_eq!(
        outcome.message,
        "Submitted catalog request; created record C1"
    );
    assert_eq!(
        outcome.data,
        Some(SubmissionResult {
            record_id: Some("C1".into()),
            record_number: None,
        })
    );
}

#[tokio::test]
async fn test_progress_events_for_request_path() {
    let transport = MockTransport::new();
    transport
        .respond(Method::Post, ORDER_NOW_ITM001, request_created("REQ1", "REQ0001"))
        .respond(
            Method::Get,
            REQ_ITEM_TABLE,
            requested_items(&[("RITM9", "RITM0009")]),
        );
    let progress = RecordingProgress::default();

    submit_catalog_request(&transport, &SubmitParams::new("ITM001"), &progress).await;

    assert_eq!(
        *progress.phases.lock().unwrap(),
        vec![Phase::Submitting, Phase::ResolvingItem, Phase::Complete]
    );
    assert!(matches!(
        progress.shapes.lock().unwrap()[0],
        RemoteRecordShape::Request { .. }
    ));
    assert_eq!(
        *progress.resolved.lock().unwrap(),
        vec![resolved("RITM9", "RITM0009")]
    );
    assert!(progress.errors.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_progress_reports_errors() {
    let transport = MockTransport::new();
    transport.fail(Method::Post, ORDER_NOW_ITM001, "boom");
    let progress = RecordingProgress::default();

    submit_catalog_request(&transport, &SubmitParams::new("ITM001"), &progress).await;

    assert_eq!(*progress.phases.lock().unwrap(), vec![Phase::Submitting]);
    assert_eq!(progress.errors.lock().unwrap().len(), 1);
    assert!(progress.resolved.lock().unwrap().is_empty());
}
