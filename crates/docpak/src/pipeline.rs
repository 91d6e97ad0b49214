use docpak_archive::{ARCHIVE_NAME, ArchiveEntry, assemble};
use docpak_catalog::{CatalogClient, DocumentRecord, DocumentSearch, SearchFilter, TOKEN_HEADER, Token};
use docpak_fetch::{
    BatchFetcher, BatchOptions, CancelSignal, FetchError, FetchJob, FetchOptions, HttpClient,
    Outcome, ReqwestClient, cancel_pair,
};
use tracing::{debug, info, warn};

use crate::error::{PipelineError, SkippedDocument};

/// The finished product of an export run.
#[derive(Debug, Clone)]
pub struct ExportBundle {
    /// Complete zip archive, ready to persist or hand off.
    pub archive: Vec<u8>,
    /// Suggested output filename for the archive.
    pub name: &'static str,
    /// Documents the archive proceeded without, in no particular order.
    pub skipped: Vec<SkippedDocument>,
}

/// Search, download and bundle documents in one pass.
///
/// Generic over the search seam and the HTTP client so the whole flow is
/// testable without a live service; [`ExportPipeline::connect`] wires up
/// the production pair.
pub struct ExportPipeline<S, C>
where
    S: DocumentSearch,
    C: HttpClient + 'static,
{
    catalog: S,
    fetcher: BatchFetcher<C>,
    fetch_options: FetchOptions,
    batch_options: BatchOptions,
}

impl ExportPipeline<CatalogClient, ReqwestClient> {
    /// Production pipeline against the service at `base_url`.
    pub fn connect(base_url: impl Into<String>) -> Self {
        Self::new(CatalogClient::new(base_url), ReqwestClient::new())
    }
}

impl<S, C> ExportPipeline<S, C>
where
    S: DocumentSearch,
    C: HttpClient + 'static,
{
    pub fn new(catalog: S, client: C) -> Self {
        Self {
            catalog,
            fetcher: BatchFetcher::new(client),
            fetch_options: FetchOptions::default(),
            batch_options: BatchOptions::default(),
        }
    }

    #[must_use]
    pub fn fetch_options(mut self, options: FetchOptions) -> Self {
        self.fetch_options = options;
        self
    }

    #[must_use]
    pub fn batch_options(mut self, options: BatchOptions) -> Self {
        self.batch_options = options;
        self
    }

    /// Export every document matching `filter` into a single zip archive.
    ///
    /// Individual download failures shrink the archive and are reported
    /// on the bundle; the call only errs when the search fails, nothing
    /// matched, every download failed, or assembly broke.
    pub async fn export_all(
        &self,
        filter: &SearchFilter,
        token: &Token,
    ) -> Result<ExportBundle, PipelineError> {
        let (_canceller, signal) = cancel_pair();
        self.export_all_cancellable(filter, token, signal).await
    }

    /// Like [`Self::export_all`], racing the run against `cancel`.
    ///
    /// Cancellation abandons in-flight downloads and discards completed
    /// payloads; no partial archive is produced.
    pub async fn export_all_cancellable(
        &self,
        filter: &SearchFilter,
        token: &Token,
        cancel: CancelSignal,
    ) -> Result<ExportBundle, PipelineError> {
        let records = self.catalog.search(filter, token).await?;
        if records.is_empty() {
            return Err(PipelineError::NothingToExport);
        }
        info!(matched = records.len(), "starting bulk export");

        let jobs = records
            .into_iter()
            .map(|record| FetchJob::new(record.id, record.remote_path))
            .collect();
        let outcomes = self
            .fetcher
            .retrieve_all_cancellable(
                jobs,
                self.authenticated_options(token),
                self.batch_options.clone(),
                cancel,
            )
            .await
            .map_err(|e| match e {
                FetchError::Cancelled => PipelineError::Cancelled,
                other => PipelineError::Retrieval(other),
            })?;

        let mut entries = Vec::new();
        let mut skipped = Vec::new();
        for outcome in outcomes {
            match outcome {
                Outcome::Success {
                    filename, payload, ..
                } => entries.push(ArchiveEntry::new(filename, payload)),
                Outcome::Failure { id, reason } => skipped.push(SkippedDocument { id, reason }),
            }
        }
        if entries.is_empty() {
            return Err(PipelineError::AllDownloadsFailed { skipped });
        }
        if !skipped.is_empty() {
            warn!(
                bundled = entries.len(),
                skipped = skipped.len(),
                "exporting a partial archive"
            );
        }

        let archive = assemble(&entries)?;
        debug!(
            bytes = archive.len(),
            entries = entries.len(),
            "archive assembled"
        );
        Ok(ExportBundle {
            archive,
            name: ARCHIVE_NAME,
            skipped,
        })
    }

    /// Fetch a single document's bytes, for previews and one-off saves.
    pub async fn download_one(&self, record: &DocumentRecord, token: &Token) -> Outcome {
        let job = FetchJob::new(record.id.clone(), record.remote_path.clone());
        self.fetcher
            .retrieve_one(job, self.authenticated_options(token))
            .await
    }

    fn authenticated_options(&self, token: &Token) -> FetchOptions {
        self.fetch_options
            .clone()
            .header(TOKEN_HEADER, token.as_str())
    }
}
