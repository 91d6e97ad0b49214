use crate::record::DocumentRecord;

/// Display strategy for a document, derived from its file extension.
///
/// Never persisted; recomputed on demand. `Unsupported` is itself the
/// signal the shell uses to refuse preview and show a message instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Image,
    DocumentViewer,
    Unsupported,
}

/// Classify a record for preview without fetching its content.
pub fn classify(record: &DocumentRecord) -> PreviewKind {
    classify_path(&record.remote_path)
}

/// Classify by the suffix after the last `.`, case-insensitively.
///
/// Total: paths with no suffix fall through to `Unsupported`.
pub fn classify_path(path: &str) -> PreviewKind {
    let Some((_, suffix)) = path.rsplit_once('.') else {
        return PreviewKind::Unsupported;
    };
    match suffix.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" | "png" | "gif" => PreviewKind::Image,
        "pdf" => PreviewKind::DocumentViewer,
        _ => PreviewKind::Unsupported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_suffixes_case_insensitive() {
        assert_eq!(classify_path("a.PNG"), PreviewKind::Image);
        assert_eq!(classify_path("photo.jpeg"), PreviewKind::Image);
        assert_eq!(classify_path("x.gif"), PreviewKind::Image);
    }

    #[test]
    fn pdf_gets_the_document_viewer() {
        assert_eq!(classify_path("a.pdf"), PreviewKind::DocumentViewer);
        assert_eq!(classify_path("https://files/x/REPORT.PDF"), PreviewKind::DocumentViewer);
    }

    #[test]
    fn everything_else_is_unsupported() {
        assert_eq!(classify_path("a"), PreviewKind::Unsupported);
        assert_eq!(classify_path("a.docx"), PreviewKind::Unsupported);
        assert_eq!(classify_path("archive.tar."), PreviewKind::Unsupported);
    }
}
