//! HTTP client for the Guni SMS gateway.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication, error mapping,
//! and the gateway's JSON and multipart request formats.

mod async_wrapper;
pub use async_wrapper::{AsyncGuniClient, AsyncGuniClientImpl};

use crate::config::Config;
use crate::domain::SenderOption;
use crate::error::{GuniApiError, GuniApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{MmsBulkRequest, SenderIdsResponse, SmsBulkRequest};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the Guni API.
///
/// Every request carries the token twice: as a bearer token and in the
/// `guni-token` header. Some gateway endpoints read one, some the other.
#[derive(Clone)]
pub struct GuniClient {
    /// Base URL, including the `/api/v1` prefix
    base_url: String,

    /// API token for authentication
    api_token: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl GuniClient {
    /// Create a new GuniClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.guni_api_url.clone(),
            config.guni_api_token.clone(),
            config.request_timeout,
        )
    }

    /// Create a GuniClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_token: String) -> Self {
        Self::build(base_url, api_token, 10)
    }

    fn build(base_url: String, api_token: String, timeout_secs: u64) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .build();

        Self {
            base_url,
            api_token,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector instead of the client's own.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    fn authorize(&self, request: ureq::Request) -> ureq::Request {
        request
            .set("Authorization", &format!("Bearer {}", self.api_token))
            .set("guni-token", &self.api_token)
    }

    /// Run a request, recording timing and mapping failures.
    fn execute(
        &self,
        method: &str,
        url: &str,
        send: impl FnOnce() -> Result<ureq::Response, ureq::Error>,
    ) -> GuniApiResult<ureq::Response> {
        let timer = HttpTimer::new(self.metrics.clone());

        match send() {
            Ok(response) => {
                tracing::debug!("{} {} - Success (status: {})", method, url, response.status());
                timer.complete();
                Ok(response)
            }
            Err(e) => {
                let error = Self::map_error(e);
                tracing::error!("{} {} - Error: {:?}", method, url, error);
                timer.complete_with_error();
                Err(error)
            }
        }
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> GuniApiResult<ureq::Response> {
        let url = self.build_url(path);
        let request = self.authorize(self.agent.get(&url));
        self.execute("GET", &url, || request.call())
    }

    /// Execute a POST request with authentication and JSON body.
    fn post_json(&self, path: &str, body: &Value) -> GuniApiResult<ureq::Response> {
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let request = self
            .authorize(self.agent.post(&url))
            .set("Content-Type", "application/json");
        self.execute("POST", &url, || request.send_json(body))
    }

    /// Execute a multipart/form-data POST with text fields only.
    fn post_form(&self, path: &str, fields: &[(&str, String)]) -> GuniApiResult<ureq::Response> {
        let url = self.build_url(path);
        let boundary = form_boundary();
        let body = encode_form(&boundary, fields);

        tracing::debug!("POST {} (multipart, {} fields)", url, fields.len());

        let request = self.authorize(self.agent.post(&url)).set(
            "Content-Type",
            &format!("multipart/form-data; boundary={}", boundary),
        );
        self.execute("POST", &url, || request.send_bytes(body.as_bytes()))
    }

    /// Map a ureq error to a GuniApiError.
    ///
    /// Status errors keep the body's `message` field when there is one, else
    /// the raw body.
    fn map_error(error: ureq::Error) -> GuniApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response.into_string().unwrap_or_default();
                let message = extract_message(&body).unwrap_or_else(|| format!("HTTP {}", code));

                match code {
                    401 => GuniApiError::Unauthorized(message),
                    429 => GuniApiError::RateLimitExceeded,
                    _ => GuniApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                let text = transport.to_string();
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    GuniApiError::HttpError("Connection failed".to_string())
                } else if text.contains("timed out") {
                    GuniApiError::Timeout
                } else {
                    GuniApiError::HttpError(text)
                }
            }
        }
    }

    /// Read a response body as JSON; plain-text bodies come back as a string.
    fn read_body(response: ureq::Response) -> GuniApiResult<Value> {
        let body = response
            .into_string()
            .map_err(|e| GuniApiError::HttpError(e.to_string()))?;

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }

    // ========================= Sender Operations =========================

    /// List the sender identities on the account.
    ///
    /// A response without a `data` array, or one that is not JSON at all,
    /// yields an empty list.
    pub fn get_sender_ids(&self) -> GuniApiResult<Vec<SenderOption>> {
        let response = self.get("/auth/ac/sender-ids")?;
        let body = response
            .into_string()
            .map_err(|e| GuniApiError::HttpError(e.to_string()))?;

        let parsed = serde_json::from_str::<SenderIdsResponse>(&body).unwrap_or_else(|e| {
            tracing::warn!("Sender list response is not JSON, treating as empty: {}", e);
            SenderIdsResponse::default()
        });
        Ok(parsed.data)
    }

    // ========================= Campaign Operations =========================

    /// Submit an SMS campaign. Returns the gateway response untouched.
    pub fn send_sms_bulk(&self, request: &SmsBulkRequest) -> GuniApiResult<Value> {
        let body = serde_json::to_value(request)?;
        let response = self.post_json("/gateway/bulk?mode=Mobile", &body)?;
        let value = Self::read_body(response)?;

        self.metrics.record_campaign_submitted(request.contacts.len());
        Ok(value)
    }

    /// Submit an MMS campaign. Returns the gateway response untouched.
    pub fn send_mms_bulk(&self, request: &MmsBulkRequest) -> GuniApiResult<Value> {
        let response = self.post_form("/gatewaymms/bulk", &request.form_fields())?;
        let value = Self::read_body(response)?;

        self.metrics.record_campaign_submitted(request.contacts.len());
        Ok(value)
    }
}

/// Pull a human-readable message out of an error body.
fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        if let Some(Value::String(message)) = map.get("message") {
            return Some(message.clone());
        }
    }
    Some(trimmed.to_string())
}

fn form_boundary() -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("----GuniFormBoundary{:x}", nanos)
}

fn encode_form(boundary: &str, fields: &[(&str, String)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
            boundary, name, value
        ));
    }
    body.push_str(&format!("--{}--\r\n", boundary));
    body
}
