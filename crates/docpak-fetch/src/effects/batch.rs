use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::core::{derive_filename, retry_delay};
use crate::data::{BatchOptions, FetchJob, FetchOptions, Outcome};
use crate::effects::cancel::{CancelSignal, cancel_pair};
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Orchestrates many retrievals against one [`HttpClient`].
///
/// Fan-out is bounded by [`BatchOptions::max_concurrent`]; per-item
/// failures are absorbed into the outcome sequence and never abort
/// sibling fetches. Only cancellation and worker panics surface as
/// batch-level errors.
pub struct BatchFetcher<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient + 'static> BatchFetcher<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Fetch every job, yielding exactly one [`Outcome`] per input.
    ///
    /// Outcome order follows completion, not input order; reconcile by
    /// [`Outcome::id`].
    pub async fn retrieve_all(
        &self,
        jobs: Vec<FetchJob>,
        options: FetchOptions,
        batch: BatchOptions,
    ) -> Result<Vec<Outcome>> {
        // An inert signal: the canceller is dropped without firing.
        let (_canceller, signal) = cancel_pair();
        self.retrieve_all_cancellable(jobs, options, batch, signal)
            .await
    }

    /// Like [`Self::retrieve_all`], racing the batch against `cancel`.
    ///
    /// On cancellation, in-flight fetches are aborted and already
    /// completed payloads are discarded; the call returns
    /// [`FetchError::Cancelled`] instead of a partial outcome set.
    pub async fn retrieve_all_cancellable(
        &self,
        jobs: Vec<FetchJob>,
        options: FetchOptions,
        batch: BatchOptions,
        mut cancel: CancelSignal,
    ) -> Result<Vec<Outcome>> {
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        let total = jobs.len();
        debug!(
            total,
            max_concurrent = batch.effective_concurrency(),
            "dispatching retrieval batch"
        );

        let semaphore = Arc::new(Semaphore::new(batch.effective_concurrency()));
        let mut tasks = JoinSet::new();
        for job in jobs {
            let client = Arc::clone(&self.client);
            let semaphore = Arc::clone(&semaphore);
            let options = options.clone();
            tasks.spawn(async move {
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    // The semaphore outlives the tasks; closure only
                    // happens when the batch is being torn down.
                    Err(_) => {
                        return Outcome::Failure {
                            id: job.id,
                            reason: FetchError::Cancelled,
                        };
                    }
                };
                fetch_with_retry(client.as_ref(), &job, &options).await
            });
        }

        let mut outcomes = Vec::with_capacity(total);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tasks.abort_all();
                    while tasks.join_next().await.is_some() {}
                    debug!(total, completed = outcomes.len(), "batch cancelled");
                    return Err(FetchError::Cancelled);
                }
                joined = tasks.join_next() => match joined {
                    Some(Ok(outcome)) => {
                        if let Outcome::Failure { id, reason } = &outcome {
                            warn!(id = %id, reason = %reason, "document retrieval failed");
                        }
                        outcomes.push(outcome);
                    }
                    Some(Err(e)) => {
                        tasks.abort_all();
                        while tasks.join_next().await.is_some() {}
                        return Err(FetchError::TaskFailed(e.to_string()));
                    }
                    None => break,
                },
            }
        }

        debug_assert_eq!(outcomes.len(), total);
        Ok(outcomes)
    }

    /// Single-item convenience path for ad-hoc downloads.
    ///
    /// The degenerate case of a batch with concurrency 1, sharing the
    /// same per-item failure semantics.
    pub async fn retrieve_one(&self, job: FetchJob, options: FetchOptions) -> Outcome {
        fetch_with_retry(self.client.as_ref(), &job, &options).await
    }
}

/// Fetch one job, retrying transient failures up to `max_retries` times.
async fn fetch_with_retry<C: HttpClient>(
    client: &C,
    job: &FetchJob,
    options: &FetchOptions,
) -> Outcome {
    let mut attempt = 0u32;
    loop {
        let request = client.get(&job.url, &options.headers);
        let error = match tokio::time::timeout(options.timeout, request).await {
            Ok(Ok(payload)) => {
                return Outcome::Success {
                    id: job.id.clone(),
                    filename: derive_filename(&job.url),
                    payload,
                };
            }
            Ok(Err(e)) => e,
            Err(_) => FetchError::Timeout,
        };

        if attempt >= options.max_retries || !error.is_retryable() {
            return Outcome::Failure {
                id: job.id.clone(),
                reason: error,
            };
        }

        let delay = retry_delay(attempt, options.retry_backoff);
        debug!(id = %job.id, attempt, ?delay, error = %error, "retrying fetch");
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}
