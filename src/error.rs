// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for OAuth2 grant exchanges.

/// Failure of the underlying HTTP call.
///
/// Carries the original status and body for non-2xx responses so callers
/// can decide what an `invalid_grant` or `401` means for them.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (connect, TLS, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid request: {0}")]
    Request(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

impl TransportError {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error returned by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum OAuth2Error {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl OAuth2Error {
    /// HTTP status preserved from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            OAuth2Error::Transport(err) => err.status(),
            OAuth2Error::MalformedResponse(_) => None,
        }
    }

    pub fn is_malformed_response(&self) -> bool {
        matches!(self, OAuth2Error::MalformedResponse(_))
    }
}

impl From<serde_json::Error> for OAuth2Error {
    fn from(err: serde_json::Error) -> Self {
        OAuth2Error::MalformedResponse(err.to_string())
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, OAuth2Error>;
