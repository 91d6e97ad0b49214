//! The catalog service's exact request and response shapes.
//!
//! Field names, constant values and pagination defaults are wire
//! protocol; they must be reproduced byte-for-byte for compatibility
//! with the service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::SearchFilter;
use crate::record::DocumentRecord;
use crate::upload::UploadRequest;

/// Fixed pagination defaults; not user-configurable.
pub(crate) const SEARCH_PAGE_START: u32 = 0;
pub(crate) const SEARCH_PAGE_LENGTH: u32 = 10;

pub(crate) const WIRE_DATE_FORMAT: &str = "%d-%m-%Y";

pub(crate) fn wire_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(WIRE_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[derive(Debug, Serialize)]
pub(crate) struct TagRef<'a> {
    pub tag_name: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct FreeTextFilter<'a> {
    pub value: &'a str,
}

/// Body of `searchDocumentEntry`.
#[derive(Debug, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub major_head: &'a str,
    pub minor_head: &'a str,
    pub from_date: String,
    pub to_date: String,
    pub tags: Vec<TagRef<'a>>,
    pub uploaded_by: &'a str,
    pub start: u32,
    pub length: u32,
    #[serde(rename = "filterId")]
    pub filter_id: &'a str,
    pub search: FreeTextFilter<'a>,
}

impl<'a> SearchRequest<'a> {
    pub fn from_filter(filter: &'a SearchFilter) -> Self {
        Self {
            major_head: filter.category().wire_value(),
            minor_head: filter.subcategory(),
            from_date: wire_date(filter.from()),
            to_date: wire_date(filter.to()),
            tags: filter.tags().iter().map(|tag_name| TagRef { tag_name }).collect(),
            uploaded_by: "",
            start: SEARCH_PAGE_START,
            length: SEARCH_PAGE_LENGTH,
            filter_id: "",
            search: FreeTextFilter { value: "" },
        }
    }
}

/// Body of `documentTags`.
#[derive(Debug, Serialize)]
pub(crate) struct TagQuery<'a> {
    pub term: &'a str,
}

/// The `data` part of a `saveDocumentEntry` multipart form.
#[derive(Debug, Serialize)]
pub(crate) struct UploadData<'a> {
    pub major_head: &'a str,
    pub minor_head: &'a str,
    pub document_date: String,
    pub document_remarks: &'a str,
    pub tags: Vec<TagRef<'a>>,
    pub user_id: &'a str,
}

impl<'a> UploadData<'a> {
    pub fn from_request(request: &'a UploadRequest) -> Self {
        Self {
            major_head: request.category.wire_value(),
            minor_head: &request.subcategory,
            document_date: wire_date(Some(request.document_date)),
            document_remarks: &request.remarks,
            tags: request
                .tags
                .iter()
                .map(|tag_name| TagRef { tag_name })
                .collect(),
            user_id: &request.user_id,
        }
    }
}

/// Response envelope of `searchDocumentEntry`.
///
/// A missing `data` field means an empty result set, not an error.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub data: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTag {
    #[serde(default)]
    pub tag_name: String,
}

/// A single result as the service sends it; everything optional so one
/// malformed record can be reported precisely instead of failing the
/// whole deserialization opaquely.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    pub id: Option<serde_json::Value>,
    pub file_path: Option<String>,
    #[serde(default)]
    pub minor_head: String,
    #[serde(default)]
    pub document_date: String,
    #[serde(default)]
    pub document_remarks: String,
    #[serde(default)]
    pub tags: Vec<RawTag>,
}

impl RawRecord {
    /// Promote to a typed record; a missing required field fails the
    /// whole search call rather than producing a partially-typed record.
    pub fn into_record(self) -> Result<DocumentRecord, String> {
        let id = match self.id {
            Some(serde_json::Value::String(s)) if !s.is_empty() => s,
            Some(serde_json::Value::Number(n)) => n.to_string(),
            Some(other) => return Err(format!("record id has unexpected type: {other}")),
            None => return Err("record is missing 'id'".to_string()),
        };
        let remote_path = match self.file_path {
            Some(path) if !path.is_empty() => path,
            _ => return Err(format!("record '{id}' is missing 'file_path'")),
        };

        Ok(DocumentRecord {
            id,
            remote_path,
            subcategory: self.minor_head,
            document_date: self.document_date,
            remarks: self.document_remarks,
            tags: self.tags.into_iter().map(|t| t.tag_name).collect(),
        })
    }
}
