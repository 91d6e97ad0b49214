//! Bulk document retrieval and zip export against a remote catalog.
//!
//! Composes the member crates into one flow:
//!
//! - [`catalog`] - search, tag suggestions, upload, preview classification
//! - [`fetch`] - bounded-concurrency downloads with per-item outcomes
//! - [`archive`] - in-memory zip assembly with collision-safe names
//!
//! The entry point is [`ExportPipeline`]: search with a validated filter,
//! download every match, and bundle the results into `documents.zip`,
//! reporting any documents that had to be skipped.

pub use docpak_archive as archive;
pub use docpak_catalog as catalog;
pub use docpak_fetch as fetch;

pub use error::{PipelineError, SkippedDocument};
pub use pipeline::{ExportBundle, ExportPipeline};

mod error;
mod pipeline;
