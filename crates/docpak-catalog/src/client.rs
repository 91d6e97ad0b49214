use async_trait::async_trait;
use tracing::debug;

use crate::error::ApiError;
use crate::filter::SearchFilter;
use crate::record::DocumentRecord;
use crate::token::Token;
use crate::upload::UploadRequest;
use crate::wire::{SearchRequest, SearchResponse, TagQuery, UploadData};

/// Header name the service expects the bearer token under.
pub const TOKEN_HEADER: &str = "token";

const SEARCH_ENDPOINT: &str = "searchDocumentEntry";
const TAGS_ENDPOINT: &str = "documentTags";
const UPLOAD_ENDPOINT: &str = "saveDocumentEntry";

/// Search seam consumed by the export pipeline.
///
/// Abstracted as a trait so pipeline tests can run without a live
/// catalog service.
#[async_trait]
pub trait DocumentSearch: Send + Sync {
    async fn search(
        &self,
        filter: &SearchFilter,
        token: &Token,
    ) -> Result<Vec<DocumentRecord>, ApiError>;
}

/// HTTP client for the remote document catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Wrap an existing `reqwest::Client` (shared pools, custom TLS).
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Query the catalog and map the raw response into typed records.
    ///
    /// Any record missing a required field fails the whole call; the
    /// caller never sees a partially-typed result set.
    pub async fn search(
        &self,
        filter: &SearchFilter,
        token: &Token,
    ) -> Result<Vec<DocumentRecord>, ApiError> {
        let body = SearchRequest::from_filter(filter);
        let response = self.post_json(SEARCH_ENDPOINT, &body, token).await?;

        let parsed: SearchResponse =
            response
                .json()
                .await
                .map_err(|e| ApiError::MalformedResponse {
                    endpoint: SEARCH_ENDPOINT,
                    detail: e.to_string(),
                })?;

        let records = parsed
            .data
            .into_iter()
            .map(|raw| {
                raw.into_record().map_err(|detail| ApiError::MalformedResponse {
                    endpoint: SEARCH_ENDPOINT,
                    detail,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = records.len(), "catalog search completed");
        Ok(records)
    }

    /// Fetch tag-name suggestions for an autocomplete term.
    pub async fn tag_suggestions(
        &self,
        term: &str,
        token: &Token,
    ) -> Result<Vec<String>, ApiError> {
        let response = self
            .post_json(TAGS_ENDPOINT, &TagQuery { term }, token)
            .await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::MalformedResponse {
                endpoint: TAGS_ENDPOINT,
                detail: e.to_string(),
            })
    }

    /// Store a new document entry with its metadata.
    pub async fn upload(&self, request: &UploadRequest, token: &Token) -> Result<(), ApiError> {
        let data = serde_json::to_string(&UploadData::from_request(request)).map_err(|e| {
            ApiError::Transport {
                endpoint: UPLOAD_ENDPOINT,
                detail: e.to_string(),
            }
        })?;

        let part = reqwest::multipart::Part::bytes(request.content.to_vec())
            .file_name(request.file_name.clone())
            .mime_str(&request.mime_type)
            .map_err(|e| ApiError::Transport {
                endpoint: UPLOAD_ENDPOINT,
                detail: format!("invalid mime type: {e}"),
            })?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("data", data);

        let response = self
            .http
            .post(self.endpoint_url(UPLOAD_ENDPOINT))
            .header(TOKEN_HEADER, token.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                endpoint: UPLOAD_ENDPOINT,
                detail: e.to_string(),
            })?;
        check_status(UPLOAD_ENDPOINT, response).await?;

        debug!(file = %request.file_name(), "document uploaded");
        Ok(())
    }

    async fn post_json<B: serde::Serialize>(
        &self,
        endpoint: &'static str,
        body: &B,
        token: &Token,
    ) -> Result<reqwest::Response, ApiError> {
        let response = self
            .http
            .post(self.endpoint_url(endpoint))
            .header(TOKEN_HEADER, token.as_str())
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                endpoint,
                detail: e.to_string(),
            })?;
        check_status(endpoint, response).await
    }
}

#[async_trait]
impl DocumentSearch for CatalogClient {
    async fn search(
        &self,
        filter: &SearchFilter,
        token: &Token,
    ) -> Result<Vec<DocumentRecord>, ApiError> {
        CatalogClient::search(self, filter, token).await
    }
}

/// Turn a non-success status into [`ApiError::Status`], preferring the
/// response body text over the per-endpoint generic message.
async fn check_status(
    endpoint: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        generic_failure(endpoint).to_string()
    } else {
        body
    };
    Err(ApiError::Status {
        endpoint,
        status: status.as_u16(),
        message,
    })
}

fn generic_failure(endpoint: &str) -> &'static str {
    match endpoint {
        SEARCH_ENDPOINT => "failed to search documents",
        TAGS_ENDPOINT => "failed to load tag suggestions",
        UPLOAD_ENDPOINT => "failed to upload document",
        _ => "request failed",
    }
}
