use bytes::Bytes;

use crate::error::FetchError;

/// One requested retrieval: an opaque document id plus its remote locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchJob {
    pub id: String,
    pub url: String,
}

impl FetchJob {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

/// Per-job result of a retrieval attempt.
///
/// A batch produces exactly one outcome per input job; callers reconcile
/// outcomes to inputs by `id` since completion order is unspecified.
#[derive(Debug, Clone)]
pub enum Outcome {
    Success {
        id: String,
        /// Output filename derived from the final path segment of the URL.
        filename: String,
        payload: Bytes,
    },
    Failure {
        id: String,
        reason: FetchError,
    },
}

impl Outcome {
    pub fn id(&self) -> &str {
        match self {
            Outcome::Success { id, .. } | Outcome::Failure { id, .. } => id,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}
