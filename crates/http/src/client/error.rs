//! Client error types

use std::time::Duration;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request did not complete within its timeout and was aborted
    #[error("Request timeout after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The backend rejected the credentials (401 or 403)
    #[error("{message}")]
    Auth { status: u16, message: String },

    /// The backend rejected the request data (400)
    #[error("{0}")]
    Validation(String),

    /// Any other non-success status
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Network or transport error
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid or unavailable configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The token store refused a write
    #[error("Token storage error: {0}")]
    Storage(String),
}

/// Discriminant of a [`ClientError`], fixed where the failure was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Timeout,
    Auth,
    Validation,
    Http,
    Network,
    Parse,
    Configuration,
    Storage,
}

impl ClientError {
    /// Create error from a non-success status and the server's message, if any
    pub fn from_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status.as_u16() {
            401 | 403 => Self::Auth {
                status: status.as_u16(),
                message: message.unwrap_or_else(|| "Authentication failed".into()),
            },
            400 => Self::Validation(message.unwrap_or_else(|| "Invalid request data".into())),
            code => Self::Http {
                status: code,
                message: message.unwrap_or_else(|| {
                    format!(
                        "HTTP {code}: {}",
                        status.canonical_reason().unwrap_or_default()
                    )
                }),
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::Auth { .. } => ErrorKind::Auth,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Http { .. } => ErrorKind::Http,
            Self::Network(_) => ErrorKind::Network,
            Self::Serialization(_) => ErrorKind::Parse,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }

    /// Whether this error means the session is no longer valid
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// HTTP status carried by the error, when the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. } | Self::Http { status, .. } => Some(*status),
            Self::Validation(_) => Some(400),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
