//! Error types for docpak-fetch.
//!
//! Per-item failures are captured inside [`crate::Outcome::Failure`] and
//! never abort a batch; only `Cancelled` and `TaskFailed` surface as
//! batch-level errors. Variants carry owned strings so a failure reason
//! can be cloned into reports.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("HTTP status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("batch cancelled")]
    Cancelled,

    #[error("worker task failed: {0}")]
    TaskFailed(String),
}

impl FetchError {
    /// Whether a retry could plausibly succeed.
    ///
    /// Transient conditions (network errors, timeouts, 5xx) are retryable;
    /// client errors (4xx) and cancellation are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Timeout | FetchError::Network(_) => true,
            FetchError::Status { status, .. } => *status >= 500,
            FetchError::Cancelled | FetchError::TaskFailed(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
