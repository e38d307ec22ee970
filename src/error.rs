// src/error.rs

//! Unified error handling for the registrar client.
//!
//! Two families of errors live here:
//!
//! - [`AppError`]: setup problems (config files, HTTP client construction).
//!   These are ordinary `?`-propagated errors.
//! - [`Failure`]: the uniform failure value of a service call. Every service
//!   operation returns an [`Outcome`], so an API rejection, a network error
//!   or a missing token all arrive as data rather than as a panic.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Result type alias for setup operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client construction failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Category of a failed service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Base URL missing or malformed
    Config,
    /// No bearer token in the session
    LoginRequired,
    /// The request never reached the server
    Network,
    /// Client-side validation blocked the request
    InvalidInput,
    /// HTTP 400 with field errors
    Validation,
    /// Delete refused because other records still reference the target
    Integrity,
    /// HTTP 404
    NotFound,
    /// HTTP 401 / 403
    Forbidden,
    /// Any other non-2xx status
    Server,
    /// 2xx response whose body did not report success
    Rejected,
}

/// A failed service call, carrying a user-facing (localized) message.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
    pub errors: Vec<String>,
    pub status: Option<u16>,
}

impl Failure {
    /// Create a failure without an HTTP status.
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            errors: Vec::new(),
            status: None,
        }
    }

    /// Attach the HTTP status the failure came from.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the server-side error list.
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }

    /// Replace the user-facing message, keeping kind and details.
    pub fn remap(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn is(&self, kind: FailureKind) -> bool {
        self.kind == kind
    }
}

/// Successful service reply: the mapped payload and the server's message.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub data: T,
    pub message: Option<String>,
}

impl<T> Reply<T> {
    pub fn new(data: T, message: Option<String>) -> Self {
        Self { data, message }
    }

    /// Transform the payload, keeping the message.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<U> {
        Reply {
            data: f(self.data),
            message: self.message,
        }
    }
}

/// Result of a service call.
pub type Outcome<T> = std::result::Result<Reply<T>, Failure>;

/// Flat `{ success, data, message, errors }` view of an [`Outcome`], the
/// shape a display layer consumes.
#[derive(Debug, Clone, Serialize)]
pub struct ActionResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailureKind>,
}

impl<T> From<Outcome<T>> for ActionResult<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Ok(reply) => Self {
                success: true,
                data: Some(reply.data),
                message: reply.message.unwrap_or_default(),
                errors: Vec::new(),
                kind: None,
            },
            Err(failure) => Self {
                success: false,
                data: None,
                message: failure.message,
                errors: failure.errors,
                kind: Some(failure.kind),
            },
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Config => "config",
            Self::LoginRequired => "login_required",
            Self::Network => "network",
            Self::InvalidInput => "invalid_input",
            Self::Validation => "validation",
            Self::Integrity => "integrity",
            Self::NotFound => "not_found",
            Self::Forbidden => "forbidden",
            Self::Server => "server",
            Self::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_result_from_success() {
        let outcome: Outcome<Vec<u8>> = Ok(Reply::new(vec![1, 2], Some("done".into())));
        let result = ActionResult::from(outcome);
        assert!(result.success);
        assert_eq!(result.data, Some(vec![1, 2]));
        assert_eq!(result.message, "done");
        assert!(result.kind.is_none());
    }

    #[test]
    fn action_result_from_failure() {
        let failure = Failure::new(FailureKind::NotFound, "gone")
            .with_status(404)
            .with_errors(vec!["missing".into()]);
        let result = ActionResult::<()>::from(Err(failure));
        assert!(!result.success);
        assert!(result.data.is_none());
        assert_eq!(result.message, "gone");
        assert_eq!(result.errors, vec!["missing".to_string()]);
        assert_eq!(result.kind, Some(FailureKind::NotFound));
    }

    #[test]
    fn failure_displays_message() {
        let failure = Failure::new(FailureKind::Network, "offline");
        assert_eq!(failure.to_string(), "offline");
        assert!(failure.is(FailureKind::Network));
    }
}
