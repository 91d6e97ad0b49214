use std::future::Future;

use bytes::Bytes;

use crate::error::{FetchError, Result};

/// Asynchronous HTTP client abstraction.
///
/// The minimal interface the orchestrator needs: an authenticated GET
/// returning the full response body. Implementations handle their own
/// redirect following and connection pooling, and map transport failures
/// into [`FetchError`] kinds so callers can branch on kind rather than
/// parsing prose.
///
/// # Implementations
///
/// - [`ReqwestClient`]: production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    /// Fetch `url` with the given headers and return the response body.
    ///
    /// A non-success HTTP status is an error carrying the status code and
    /// the response body text when present.
    fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = Result<Bytes>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;

    /// Production HTTP client implementation using reqwest.
    #[derive(Clone, Default)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        pub fn new() -> Self {
            Self {
                client: reqwest::Client::new(),
            }
        }

        /// Wrap an existing `reqwest::Client` (shared pools, custom TLS).
        pub fn with_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    impl HttpClient for ReqwestClient {
        async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<Bytes> {
            let mut request = self.client.get(url);
            for (key, value) in headers {
                request = request.header(key, value);
            }

            let response = request.send().await.map_err(map_transport)?;
            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(FetchError::Status {
                    status: status.as_u16(),
                    message,
                });
            }

            response.bytes().await.map_err(map_transport)
        }
    }

    fn map_transport(e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(e.to_string())
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
