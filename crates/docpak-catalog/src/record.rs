/// One document in a search result set.
///
/// Constructed only by the catalog client from service responses; the
/// presentation shell treats records as read-only and replaces the whole
/// set on the next search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Opaque identifier, unique within a result set.
    pub id: String,
    /// Locator used for later retrieval of the file bytes.
    pub remote_path: String,
    pub subcategory: String,
    /// Formatted date string as returned by the service.
    pub document_date: String,
    pub remarks: String,
    /// Tag names in the order the service returned them.
    pub tags: Vec<String>,
}
