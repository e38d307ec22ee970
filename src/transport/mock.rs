//! In-memory transport for tests: replays queued responses and records
//! every request it receives.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::client::ApiClient;
use crate::models::{ApiConfig, Messages};
use crate::session::Session;
use crate::transport::{HttpRequest, RawResponse, Transport, TransportError};

type Queued = Result<RawResponse, TransportError>;

#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Queued>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with a raw text body.
    pub fn respond(self, status: u16, text: impl Into<String>) -> Self {
        self.push(status, text);
        self
    }

    /// Queue a response with a JSON body.
    pub fn respond_json(self, status: u16, body: Value) -> Self {
        self.push(status, body.to_string());
        self
    }

    /// Queue a transport-level error.
    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError(message.to_string())));
        self
    }

    pub fn push(&self, status: u16, text: impl Into<String>) {
        let status_text = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string();
        self.responses.lock().unwrap().push_back(Ok(RawResponse {
            status,
            status_text,
            text: text.into(),
        }));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        // Give concurrent callers a chance to interleave.
        tokio::task::yield_now().await;
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no response queued".into())))
    }
}

/// Client over `mock` with default settings and a logged-in session.
pub fn test_client(mock: MockTransport) -> (ApiClient, Arc<MockTransport>) {
    let mock = Arc::new(mock);
    let client = ApiClient::with_transport(
        mock.clone(),
        ApiConfig::default(),
        Messages::default(),
        Session::new("token"),
    );
    (client, mock)
}
