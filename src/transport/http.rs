//! `reqwest` transport implementation

use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::instance::InstanceConfig;
use crate::transport::Transport;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

const JSON: &str = "application/json";

/// Longest raw body echoed back in an error message
const MAX_ERROR_BODY: usize = 500;

/// HTTP transport using reqwest
pub struct HttpTransport {
    client: Client,
    config: InstanceConfig,
}

/// ServiceNow error envelope: `{"error": {"message", "detail"}, "status"}`
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<String>,
}

impl HttpTransport {
    /// Create a transport for an instance, attaching `credentials` to every call
    pub fn new(config: InstanceConfig, credentials: &Credentials) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in credentials.headers() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Auth(format!("invalid header name {name}: {e}")))?;
            let mut value = HeaderValue::from_str(&value)
                .map_err(|e| Error::Auth(format!("invalid credential header: {e}")))?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    async fn send(&self, method: &str, url: &str, request: RequestBuilder) -> Result<Value> {
        debug!(method, url, "sending request");
        let response = request.header(ACCEPT, JSON).send().await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = api_error_message(status, &text);
            warn!(method, url, status = status.as_u16(), %message, "request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = self.config.endpoint(path);
        let request = self.client.get(&url).query(query);
        self.send("GET", &url, request).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.config.endpoint(path);
        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, JSON)
            .json(body);
        self.send("POST", &url, request).await
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.config.endpoint(path);
        let request = self
            .client
            .patch(&url)
            .header(CONTENT_TYPE, JSON)
            .json(body);
        self.send("PATCH", &url, request).await
    }

    fn instance_url(&self) -> &str {
        &self.config.instance_url
    }
}

/// Extract a readable message from an error response body
fn api_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        let message = envelope.error.message.unwrap_or_default();
        let detail = envelope.error.detail.unwrap_or_default();
        match (message.is_empty(), detail.is_empty()) {
            (false, false) => return format!("{message}: {detail}"),
            (false, true) => return message,
            (true, false) => return detail,
            (true, true) => {}
        }
    }

    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string();
    }
    body.chars().take(MAX_ERROR_BODY).collect()
}
