//! API Error Type

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Failure talking to the notes backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed (network down, CORS, bad URL)
    #[error("{0}")]
    Transport(String),
    /// Non-success HTTP status
    #[error("{message}")]
    Status { status: u16, message: String },
    /// Response body did not have the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// JSON error body, e.g. `{"error": "Not found"}`
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiError {
    /// Build a status error from the backend's `error` field or the status text
    pub fn from_status(status: u16, body: Option<ErrorBody>) -> Self {
        let message = body
            .and_then(|b| b.error)
            .filter(|e| !e.trim().is_empty())
            .or_else(|| {
                StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .map(String::from)
            })
            .unwrap_or_else(|| format!("HTTP {}", status));
        ApiError::Status { status, message }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
