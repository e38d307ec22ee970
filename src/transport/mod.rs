//! Transport abstraction for API requests.
//!
//! The client never talks to `reqwest` directly: it hands a fully built
//! [`HttpRequest`] to a [`Transport`] and gets the raw status and body text
//! back. Parsing happens later, so a body that is not JSON still reaches
//! the normalizer as text.
//!
//! ```text
//! ApiClient ──HttpRequest──▶ Transport ──RawResponse──▶ response::normalize
//! ```

pub mod http;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use url::Url;

// Re-export for convenience
pub use http::HttpTransport;

/// HTTP verbs the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Request payload. Each endpoint has a fixed encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// Serialized as JSON with `Content-Type: application/json`
    Json(Value),
    /// Multipart form fields, in order; repeated names are allowed
    Multipart(Vec<(String, String)>),
}

impl RequestBody {
    /// Content type the client sets explicitly. Multipart bodies are left
    /// to the HTTP stack so it can add the boundary.
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Json(_) => Some("application/json"),
            Self::Empty | Self::Multipart(_) => None,
        }
    }
}

/// A fully resolved request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub bearer: Option<String>,
    pub body: RequestBody,
}

/// Status line and body text of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub text: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request did not produce an HTTP response (DNS, refused connection,
/// timeout, TLS).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

/// Trait for HTTP backends.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue the request and return the raw response.
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError>;
}
