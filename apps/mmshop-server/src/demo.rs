//! # Demo Client
//!
//! Walks a running API through a fixed scenario and logs every response.
//!
//! ## Scenario
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. GET  /item                                        expect 200        │
//! │  2. GET  /item/1                                      expect 200        │
//! │  3. POST /item    {"name": "banana", "price": 0.29}   expect 201        │
//! │  4. GET  /item                                        expect 200        │
//! │  5. PUT  /item/3  {"name": "mouse", "price": 10.99}   expect 200        │
//! │  6. GET  /item                                        expect 200        │
//! │  7. GET  /stats                                       expect 200        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Any other status stops the run.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::{API_URL, DEFAULT_HOST, DEFAULT_PORT};

/// Demo client errors.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("bad status: {status} for {method} {url}")]
    UnexpectedStatus {
        method: Method,
        url: String,
        status: StatusCode,
    },
}

/// Result type for demo operations.
pub type DemoResult<T> = Result<T, DemoError>;

/// Base URL of a server started with default settings.
pub fn default_base_url() -> String {
    format!("http://{}:{}{}", DEFAULT_HOST, DEFAULT_PORT, API_URL)
}

/// One request of the scenario.
#[derive(Debug, Clone)]
pub struct DemoStep {
    pub method: Method,
    pub path: &'static str,
    pub body: Option<Value>,
}

impl DemoStep {
    fn get(path: &'static str) -> Self {
        DemoStep {
            method: Method::GET,
            path,
            body: None,
        }
    }

    fn with_body(method: Method, path: &'static str, body: Value) -> Self {
        DemoStep {
            method,
            path,
            body: Some(body),
        }
    }

    /// Status the step must answer with.
    pub fn expected_status(&self) -> StatusCode {
        expected_status(&self.method, self.body.is_some())
    }
}

/// 201 for a request carrying data, 200 otherwise; PUT always expects 200.
pub fn expected_status(method: &Method, has_body: bool) -> StatusCode {
    if *method == Method::PUT || !has_body {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    }
}

/// The scenario in execution order.
pub fn steps() -> Vec<DemoStep> {
    vec![
        DemoStep::get("/item"),
        DemoStep::get("/item/1"),
        DemoStep::with_body(
            Method::POST,
            "/item",
            json!({"name": "banana", "price": 0.29}),
        ),
        DemoStep::get("/item"),
        DemoStep::with_body(
            Method::PUT,
            "/item/3",
            json!({"name": "mouse", "price": 10.99}),
        ),
        DemoStep::get("/item"),
        DemoStep::get("/stats"),
    ]
}

/// HTTP client bound to one API base URL.
pub struct DemoClient {
    client: Client,
    base_url: String,
}

impl DemoClient {
    pub fn new(base_url: impl Into<String>) -> DemoResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .no_proxy()
            .build()?;

        Ok(DemoClient {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Sends one step and returns the decoded JSON body.
    pub async fn send(&self, step: &DemoStep) -> DemoResult<Value> {
        let url = format!("{}{}", self.base_url, step.path);
        info!(method = %step.method, %url, "> api");

        let mut request = self.client.request(step.method.clone(), &url);
        if let Some(body) = &step.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        info!(%status, "|_ status");
        debug!(version = ?response.version(), headers = ?response.headers(), "|> response");

        if status != step.expected_status() {
            return Err(DemoError::UnexpectedStatus {
                method: step.method.clone(),
                url,
                status,
            });
        }

        let body: Value = response.json().await?;
        info!(res = %body, "> res");
        Ok(body)
    }
}

/// Runs the whole scenario against `base_url`, returning each response body.
pub async fn run(base_url: &str) -> DemoResult<Vec<Value>> {
    let client = DemoClient::new(base_url)?;
    info!(url = %client.base_url, "=== item ===");

    let mut responses = Vec::new();
    for step in steps() {
        responses.push(client.send(&step).await?);
    }
    Ok(responses)
}
