//! Seoforge error types

use std::time::Duration;

use crate::types::ProviderId;

/// Seoforge error types
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    // Provider/network errors
    #[error("no API key configured for {0}")]
    MissingCredential(ProviderId),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP 200 but the provider's response envelope did not contain
    /// the expected text field.
    #[error("unexpected response envelope from {0}")]
    InvalidResponse(ProviderId),

    // Data errors
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    /// Whether this error is worth retrying.
    ///
    /// Transport failures (DNS/connect/timeout) and rate limiting are
    /// transient; everything else is permanent and returned immediately.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            EngineError::Transport(_) | EngineError::RateLimited { .. }
        )
    }

    /// Provider-supplied retry hint, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            EngineError::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}

/// Result type alias for seoforge operations
pub type Result<T> = std::result::Result<T, EngineError>;
