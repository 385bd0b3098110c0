//! Upstream wire types and error definitions.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The `{status, data, message}` wrapper the upstream puts around every
/// payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: String,

    pub data: Option<T>,

    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Discard the wrapper.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Errors that can occur while talking to the upstream service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(StatusCode),

    /// Upstream has no such record (404, or an envelope without data).
    #[error("employee not found upstream")]
    NotFound,

    /// Request did not complete within the configured timeout.
    #[error("upstream request timed out")]
    Timeout,

    /// Connection or protocol failure before a status was received.
    #[error("upstream transport error: {0}")]
    Transport(String),

    /// Body was not the expected envelope.
    #[error("malformed upstream response: {0}")]
    Decode(String),

    /// Base URL cannot be combined with the API paths.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(String),
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

impl UpstreamError {
    /// Classify a non-success upstream status.
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::NOT_FOUND {
            Self::NotFound
        } else {
            Self::Status(status)
        }
    }

    /// Status the facade answers with when this error reaches a handler.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Status(status) => *status,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Transport(_) | Self::Decode(_) => StatusCode::BAD_GATEWAY,
            Self::InvalidUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::from_status(status)
        } else {
            Self::Transport(err.to_string())
        }
    }
}
