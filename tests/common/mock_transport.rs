//! Mock transport for testing catalog adapters without a network
//!
//! This manually implements `Transport` rather than using a mocking crate
//! so canned responses can be keyed by method and path.
//!
//! Features:
//! - Canned responses per (method, path)
//! - Call tracking for verification
//! - Error injection per (method, path)

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use sn_catalog::error::{Error, Result};
use sn_catalog::transport::Transport;
use std::collections::HashMap;
use std::sync::Mutex;

/// HTTP method of a recorded call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
}

/// A recorded call
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Call {
    /// Value of a query parameter, if sent
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Simple mock transport
pub struct MockTransport {
    responses: Mutex<HashMap<(Method, String), Value>>,
    failures: Mutex<HashMap<(Method, String), String>>,
    calls: Mutex<Vec<Call>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            failures: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    // === Response setup ===

    /// Answer `method path` with `body`
    pub fn respond(&self, method: Method, path: &str, body: Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method, path.to_string()), body);
        self
    }

    /// Make `method path` fail with a 500 carrying `msg`
    pub fn fail(&self, method: Method, path: &str, msg: &str) -> &Self {
        self.failures
            .lock()
            .unwrap()
            .insert((method, path.to_string()), msg.to_string());
        self
    }

    // === Call verification ===

    /// All calls, in order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls made to `method path`
    pub fn calls_to(&self, method: Method, path: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.method == method && c.path == path)
            .collect()
    }

    /// Assert the exact number of outbound calls
    pub fn assert_call_count(&self, expected: usize) {
        let calls = self.calls();
        assert_eq!(
            calls.len(),
            expected,
            "Expected {expected} calls but got: {calls:#?}"
        );
    }

    fn handle(&self, call: Call) -> Result<Value> {
        let key = (call.method, call.path.clone());
        self.calls.lock().unwrap().push(call);

        if let Some(msg) = self.failures.lock().unwrap().get(&key) {
            return Err(Error::Api {
                status: 500,
                message: msg.clone(),
            });
        }

        self.responses
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| Error::Api {
                status: 404,
                message: format!("no mock response for {:?} {}", key.0, key.1),
            })
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        self.handle(Call {
            method: Method::Get,
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
            body: None,
        })
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.handle(Call {
            method: Method::Post,
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body.clone()),
        })
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<Value> {
        self.handle(Call {
            method: Method::Patch,
            path: path.to_string(),
            query: Vec::new(),
            body: Some(body.clone()),
        })
    }

    fn instance_url(&self) -> &str {
        "https://test.service-now.com"
    }
}

/// Wrap a value in the `{"result": ...}` envelope
pub fn envelope(result: Value) -> Value {
    json!({ "result": result })
}
