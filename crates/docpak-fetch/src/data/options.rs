use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Configuration for individual fetches.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use docpak_fetch::FetchOptions;
///
/// let options = FetchOptions::default()
///     .timeout(Duration::from_secs(10))
///     .max_retries(2)
///     .header("token", "opaque-bearer-value");
/// ```
#[derive(Clone)]
pub struct FetchOptions {
    /// Maximum number of retry attempts for transient failures.
    ///
    /// - Includes only retries after the initial attempt
    /// - Retries fire for network errors, timeouts and 5xx statuses,
    ///   never for 4xx
    ///
    /// Default: 0, so the orchestrator performs no implicit retries.
    pub max_retries: u32,

    /// Base delay for exponential backoff between retries.
    ///
    /// The delay before retry N is `retry_backoff * 2^N`.
    ///
    /// Default: 100ms
    pub retry_backoff: Duration,

    /// Per-item deadline covering the whole request/response exchange.
    ///
    /// A timed-out fetch is reported like any other per-item failure.
    ///
    /// Default: 30s
    pub timeout: Duration,

    /// Custom HTTP headers sent with every request, including retries.
    ///
    /// Default: empty
    pub headers: Arc<[(String, String)]>,
}

// Header values can carry credentials; Debug shows only the count.
impl fmt::Debug for FetchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchOptions")
            .field("max_retries", &self.max_retries)
            .field("retry_backoff", &self.retry_backoff)
            .field("timeout", &self.timeout)
            .field("headers", &self.headers.len())
            .finish()
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_retries: 0,
            retry_backoff: Duration::from_millis(100),
            timeout: Duration::from_secs(30),
            headers: Arc::new([]),
        }
    }
}

impl FetchOptions {
    #[must_use]
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    #[must_use]
    pub fn retry_backoff(mut self, retry_backoff: Duration) -> Self {
        self.retry_backoff = retry_backoff;
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a single custom HTTP header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers: Vec<_> = self.headers.iter().cloned().collect();
        headers.push((key.into(), value.into()));
        self.headers = Arc::from(headers);
        self
    }

    /// Replace all custom HTTP headers.
    #[must_use]
    pub fn headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = Arc::from(headers);
        self
    }
}

/// Configuration for batch retrieval.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Maximum number of concurrent fetches.
    ///
    /// Values below 1 are treated as 1; unbounded fan-out is not
    /// expressible, the remote service and local memory are shared
    /// resources.
    pub max_concurrent: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self { max_concurrent: 4 }
    }
}

impl BatchOptions {
    #[must_use]
    pub fn max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    pub(crate) fn effective_concurrency(&self) -> usize {
        self.max_concurrent.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = FetchOptions::default();
        assert_eq!(options.max_retries, 0);
        assert_eq!(options.retry_backoff, Duration::from_millis(100));
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert!(options.headers.is_empty());
        assert_eq!(BatchOptions::default().max_concurrent, 4);
    }

    #[test]
    fn header_builder_appends() {
        let options = FetchOptions::default()
            .header("token", "abc")
            .header("accept", "*/*");
        assert_eq!(options.headers.len(), 2);
        assert_eq!(options.headers[0].0, "token");
    }

    #[test]
    fn zero_concurrency_is_clamped() {
        let options = BatchOptions::default().max_concurrent(0);
        assert_eq!(options.effective_concurrency(), 1);
    }
}
