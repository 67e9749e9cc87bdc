//! Curricula error types

use std::time::Duration;

use crate::extract::ExtractError;

/// Curricula error types
#[derive(Debug, thiserror::Error)]
pub enum CurriculaError {
    // Provider/network errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("model not found: {0}")]
    ModelNotFound(String),

    // Data errors
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("payload error: {0}")]
    Payload(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    // Soft errors
    #[error("empty response from model")]
    EmptyResponse,
}

impl CurriculaError {
    /// Whether this classification cannot heal by waiting and retrying.
    ///
    /// The retry loop ignores classification by default; this only takes
    /// effect when `RetryConfig::fail_fast` is enabled.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            CurriculaError::AuthenticationFailed
                | CurriculaError::ModelNotFound(_)
                | CurriculaError::Extraction(_)
                | CurriculaError::Payload(_)
                | CurriculaError::InvalidInput(_)
                | CurriculaError::Configuration(_)
        )
    }

    /// Server-suggested wait before the next request, when one was given.
    ///
    /// Surfaced to callers for display; the retry schedule itself stays on
    /// its fixed exponential curve.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            CurriculaError::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}

/// Result type alias for Curricula operations
pub type Result<T> = std::result::Result<T, CurriculaError>;
