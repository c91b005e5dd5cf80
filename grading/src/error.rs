//! Error types for API calls and client-side validation.
//!
//! ERROR HANDLING
//! ==============
//! Widgets never show raw transport errors. They show the server's own
//! message when one was returned, otherwise a fixed per-call fallback.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure of a call made through [`crate::GradingApi`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected schema.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// No transport exists in this environment (server-side render).
    #[error("api not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a raw response body, extracting a
    /// `{"message": "..."}` field when present.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: parse_error_message(body),
        }
    }

    /// Server-provided human-readable message, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(m), .. } => Some(m.as_str()),
            _ => None,
        }
    }

    /// Message to display: the server's message or `fallback`.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn parse_error_message(body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { message: Some(m) }) if !m.trim().is_empty() => Some(m),
        _ => None,
    }
}

/// Score input rejected before any network call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Score must be between 0 and 100")]
    OutOfRange(i64),
    #[error("Score must be a whole number")]
    NotANumber,
}
