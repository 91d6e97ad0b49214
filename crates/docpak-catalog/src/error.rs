//! Error types for docpak-catalog.

use chrono::NaiveDate;
use thiserror::Error;

use crate::filter::Category;

/// Rejected filter or upload input; recoverable by caller correction,
/// never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("subcategory '{subcategory}' requires a category")]
    SubcategoryWithoutCategory { subcategory: String },

    #[error("'{subcategory}' is not a valid subcategory of {category}")]
    UnknownSubcategory {
        category: Category,
        subcategory: String,
    },

    #[error("date range is reversed: {from} is after {to}")]
    ReversedDateRange { from: NaiveDate, to: NaiveDate },

    #[error("at least one tag is required")]
    NoTags,

    #[error("a file name is required")]
    MissingFileName,
}

/// Failure talking to the catalog service.
///
/// Surfaced verbatim to the caller; the client never retries on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{endpoint} failed: {detail}")]
    Transport { endpoint: &'static str, detail: String },

    #[error("{endpoint} returned status {status}: {message}")]
    Status {
        endpoint: &'static str,
        status: u16,
        message: String,
    },

    #[error("malformed response from {endpoint}: {detail}")]
    MalformedResponse { endpoint: &'static str, detail: String },
}
