use bytes::Bytes;
use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::filter::{Category, TagSet};

/// A validated document upload.
///
/// Construction enforces the same category/subcategory rules as the
/// search filter, plus the upload form's own guards: a file name and at
/// least one tag are required.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub(crate) category: Category,
    pub(crate) subcategory: String,
    pub(crate) document_date: NaiveDate,
    pub(crate) remarks: String,
    pub(crate) tags: TagSet,
    pub(crate) user_id: String,
    pub(crate) file_name: String,
    pub(crate) mime_type: String,
    pub(crate) content: Bytes,
}

/// Raw upload form fields as collected by the caller.
#[derive(Debug, Clone)]
pub struct UploadForm {
    pub category: Category,
    pub subcategory: String,
    pub document_date: NaiveDate,
    pub remarks: String,
    pub tags: TagSet,
    pub user_id: String,
    pub file_name: String,
    /// Defaults to `application/octet-stream` when empty.
    pub mime_type: String,
    pub content: Bytes,
}

impl UploadRequest {
    pub fn new(form: UploadForm) -> Result<Self, ValidationError> {
        if form.category == Category::Unset || form.subcategory.is_empty() {
            return Err(ValidationError::SubcategoryWithoutCategory {
                subcategory: form.subcategory,
            });
        }
        if !form
            .category
            .subcategories()
            .contains(&form.subcategory.as_str())
        {
            return Err(ValidationError::UnknownSubcategory {
                category: form.category,
                subcategory: form.subcategory,
            });
        }
        if form.tags.is_empty() {
            return Err(ValidationError::NoTags);
        }
        if form.file_name.is_empty() {
            return Err(ValidationError::MissingFileName);
        }

        let mime_type = if form.mime_type.is_empty() {
            "application/octet-stream".to_string()
        } else {
            form.mime_type
        };

        Ok(Self {
            category: form.category,
            subcategory: form.subcategory,
            document_date: form.document_date,
            remarks: form.remarks,
            tags: form.tags,
            user_id: form.user_id,
            file_name: form.file_name,
            mime_type,
            content: form.content,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}
