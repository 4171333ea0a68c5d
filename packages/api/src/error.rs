//! Errors surfaced by [`crate::TaskApi`] calls.

use serde::Deserialize;
use thiserror::Error;

/// Whatever an error response told us.
///
/// The API normally answers `{"detail": "..."}`, but some failure paths send
/// `message`/`error` instead, and proxies may send plain text. A `detail` that
/// is not a string (e.g. a list of validation errors) counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
    /// Set when the body was not JSON.
    pub text: Option<String>,
}

#[derive(Deserialize)]
struct RawErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ErrorBody {
    pub fn detail(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..Self::default()
        }
    }

    /// Interpret a raw response body.
    pub fn parse(body: &str) -> Self {
        match serde_json::from_str::<RawErrorBody>(body) {
            Ok(raw) => Self {
                detail: raw.detail.and_then(|d| match d {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                }),
                message: raw.message,
                error: raw.error,
                text: None,
            },
            Err(_) => Self {
                text: Some(body.to_string()),
                ..Self::default()
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP {status}: {}", body.detail.as_deref().unwrap_or("request failed"))]
    Status { status: u16, body: ErrorBody },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    pub fn status(status: u16, body: ErrorBody) -> Self {
        Self::Status { status, body }
    }

    /// The server's `detail` text, if this is an HTTP error that carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => body.detail.as_deref().filter(|d| !d.is_empty()),
            _ => None,
        }
    }

    /// The server's `detail`, or `fallback` for every other failure.
    pub fn detail_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.detail().unwrap_or(fallback)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
