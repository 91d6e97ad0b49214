use docpak_catalog::ApiError;
use docpak_fetch::FetchError;
use thiserror::Error;

/// A document the export proceeded without, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    pub id: String,
    pub reason: FetchError,
}

/// Batch-level export failure.
///
/// Per-document download failures are not errors at this level; they are
/// collected as [`SkippedDocument`]s on the bundle, unless every single
/// download failed.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("document search failed: {0}")]
    Search(#[from] ApiError),

    #[error("search matched no documents to export")]
    NothingToExport,

    #[error("all {} downloads failed", .skipped.len())]
    AllDownloadsFailed { skipped: Vec<SkippedDocument> },

    #[error("export cancelled")]
    Cancelled,

    #[error("retrieval batch failed: {0}")]
    Retrieval(#[source] FetchError),

    #[error("archive assembly failed: {0}")]
    Assembly(#[from] docpak_archive::Error),
}
