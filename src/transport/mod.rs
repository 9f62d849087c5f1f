//! Transport seam between the catalog adapters and the network
//!
//! Adapters only speak JSON over [`Transport`]; [`HttpTransport`] is the
//! `reqwest` implementation, tests substitute their own.

mod http;

pub use http::HttpTransport;

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// JSON request/response transport relative to an instance URL
///
/// Every method fails with a transport error on a non-2xx status or a
/// connectivity problem, and otherwise returns the parsed response body
/// (`Value::Null` for an empty body).
#[async_trait]
pub trait Transport: Send + Sync {
    /// `GET path?query`
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value>;

    /// `POST path` with a JSON body
    async fn post(&self, path: &str, body: &Value) -> Result<Value>;

    /// `PATCH path` with a JSON body
    async fn patch(&self, path: &str, body: &Value) -> Result<Value>;

    /// Base instance URL the paths are joined onto
    fn instance_url(&self) -> &str;
}
