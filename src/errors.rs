// ABOUTME: Unified error types for the GymTrack client SDK
// ABOUTME: Distinguishes transport failures from API status errors per the session taxonomy
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Client Error Handling
//!
//! Every fallible operation in this crate returns [`ClientResult`]. The
//! taxonomy separates the cases callers react to differently:
//!
//! - [`ClientError::Transport`]: the request never produced a response
//!   (DNS, connect, timeout, body decode). No session state changes.
//! - [`ClientError::Api`]: the backend answered with a non-success
//!   status. A 401 from a protected endpoint has already ended the
//!   session by the time the caller sees this error; a 401 from an auth
//!   endpoint is a plain credential failure.
//! - [`ClientError::Config`]: invalid client configuration at startup.
//! - [`ClientError::Navigation`]: the navigator collaborator failed to
//!   complete a route change.
//!
//! Malformed cached-user data is deliberately NOT an error: the token
//! store treats it as an absent user.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Error type covering every failure surfaced by the client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure: the request did not complete
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend responded with a non-success status
    #[error("API request failed with status {status}: {message}")]
    Api {
        /// HTTP status returned by the backend
        status: StatusCode,
        /// Response body text, if any
        message: String,
    },

    /// Invalid client configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// The navigator collaborator failed to complete a route change
    #[error("navigation failed: {0}")]
    Navigation(String),
}

impl ClientError {
    /// Build a configuration error from any displayable message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// HTTP status associated with this error, if one exists
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            Self::Config(_) | Self::Navigation(_) => None,
        }
    }

    /// Whether this error carries a 401 Unauthorized status
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_status() {
        let err = ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            message: "Unauthorized".into(),
        };
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
        assert!(err.is_unauthorized());
    }

    #[test]
    fn config_error_has_no_status() {
        let err = ClientError::config("base URL cannot be empty");
        assert_eq!(err.status(), None);
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn api_error_display_includes_body() {
        let err = ClientError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "boom".into(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("500"));
        assert!(rendered.contains("boom"));
    }
}
