// src/session.rs

//! Authentication session handed to the API client.

use std::fmt;

/// Environment variable the CLI reads the bearer token from.
pub const TOKEN_ENV: &str = "REGISTRAR_TOKEN";

/// Holds the bearer token, if the user is logged in.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// A session without a token. Authenticated calls fail before any
    /// request is sent.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self {
            token: std::env::var(TOKEN_ENV).ok(),
        }
    }

    /// The token, if present and non-blank.
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

// Never print the token itself.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_not_authenticated() {
        assert!(!Session::new("  ").is_authenticated());
        assert!(!Session::anonymous().is_authenticated());
        assert_eq!(Session::new(" abc ").token(), Some("abc"));
    }

    #[test]
    fn debug_hides_token() {
        let text = format!("{:?}", Session::new("secret"));
        assert!(!text.contains("secret"));
    }
}
