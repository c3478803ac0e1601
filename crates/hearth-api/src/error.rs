//! Error types for hearth-api.

use std::path::PathBuf;
use std::time::Duration;

use hearth_retry::Retryable;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("request timeout after {0:?}")]
    Timeout(Duration),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: &'static str },

    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },
}

impl ApiError {
    /// Returns `true` for a 404 from the backend.
    pub fn is_not_found(&self) -> bool { matches!(self, ApiError::Status { status: 404, .. }) }
}

impl Retryable for ApiError {
    fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    fn is_fatal(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidUrl(_)
                | ApiError::Decode(_)
                | ApiError::Encode(_)
                | ApiError::Validation { .. }
                | ApiError::RateLimited { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error(transparent)]
    Figment(#[from] figment::Error),
}
