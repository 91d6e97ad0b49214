//! Typed client for the remote document catalog.
//!
//! # Architecture
//!
//! - `filter.rs` - Search criteria normalization and validation
//! - `record.rs` - Typed result records
//! - `preview.rs` - Extension-based preview classification
//! - `wire.rs` - The service's exact request/response shapes
//! - `client.rs` - HTTP calls (search, tag suggestions, upload)
//! - `token.rs` - Opaque bearer token threaded into every call
//!
//! The wire shapes in `wire.rs` are protocol constants of the catalog
//! service and are reproduced exactly; they are not configurable.

pub use client::{CatalogClient, DocumentSearch, TOKEN_HEADER};
pub use error::{ApiError, ValidationError};
pub use filter::{Category, FilterInput, SearchFilter, TagSet};
pub use preview::{PreviewKind, classify, classify_path};
pub use record::DocumentRecord;
pub use token::Token;
pub use upload::{UploadForm, UploadRequest};

mod client;
mod error;
mod filter;
mod preview;
mod record;
mod token;
mod upload;
mod wire;
