use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use docpak::catalog::{ApiError, DocumentRecord, DocumentSearch, SearchFilter, Token};
use docpak::fetch::{FetchError, HttpClient, cancel_pair};
use docpak::{ExportPipeline, PipelineError};

/// Search seam scripted with a fixed result.
struct MockSearch {
    result: Result<Vec<DocumentRecord>, ApiError>,
}

#[async_trait]
impl DocumentSearch for MockSearch {
    async fn search(
        &self,
        _filter: &SearchFilter,
        _token: &Token,
    ) -> Result<Vec<DocumentRecord>, ApiError> {
        self.result.clone()
    }
}

/// Mock download client scripted per URL; failures are 404s.
struct MockHttp {
    payloads: HashMap<String, &'static [u8]>,
    calls: AtomicUsize,
    seen_headers: Mutex<Vec<(String, String)>>,
}

impl MockHttp {
    fn new(payloads: &[(&str, &'static [u8])]) -> Self {
        Self {
            payloads: payloads
                .iter()
                .map(|(url, bytes)| (url.to_string(), *bytes))
                .collect(),
            calls: AtomicUsize::new(0),
            seen_headers: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HttpClient for MockHttp {
    async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<Bytes, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut seen) = self.seen_headers.lock() {
            seen.extend(headers.iter().cloned());
        }
        match self.payloads.get(url) {
            Some(bytes) => Ok(Bytes::from_static(bytes)),
            None => Err(FetchError::Status {
                status: 404,
                message: "not found".to_string(),
            }),
        }
    }
}

/// Wrapper so a test can keep a handle on the mock while the pipeline owns it.
struct SharedHttp(Arc<MockHttp>);

impl HttpClient for SharedHttp {
    async fn get(&self, url: &str, headers: &[(String, String)]) -> Result<Bytes, FetchError> {
        self.0.get(url, headers).await
    }
}

fn record(id: &str, url: &str) -> DocumentRecord {
    DocumentRecord {
        id: id.to_string(),
        remote_path: url.to_string(),
        subcategory: "Finance".to_string(),
        document_date: "05-01-2024".to_string(),
        remarks: String::new(),
        tags: vec!["invoice".to_string()],
    }
}

fn zip_names(archive: &[u8]) -> Vec<String> {
    let mut zip = zip::ZipArchive::new(std::io::Cursor::new(archive)).unwrap();
    (0..zip.len())
        .map(|i| zip.by_index(i).unwrap().name().to_string())
        .collect()
}

#[tokio::test]
async fn full_success_bundles_every_document() {
    let search = MockSearch {
        result: Ok(vec![
            record("1", "http://files/report.pdf"),
            record("2", "http://files/scan.jpg"),
        ]),
    };
    let http = MockHttp::new(&[
        ("http://files/report.pdf", b"pdf bytes".as_slice()),
        ("http://files/scan.jpg", b"jpg bytes".as_slice()),
    ]);
    let pipeline = ExportPipeline::new(search, http);

    let bundle = pipeline
        .export_all(&SearchFilter::unfiltered(), &Token::new("tkn"))
        .await
        .unwrap();

    assert_eq!(bundle.name, "documents.zip");
    assert!(bundle.skipped.is_empty());

    let mut names = zip_names(&bundle.archive);
    names.sort();
    assert_eq!(names, ["report.pdf", "scan.jpg"]);

    let mut zip = zip::ZipArchive::new(std::io::Cursor::new(&bundle.archive[..])).unwrap();
    let mut contents = String::new();
    zip.by_name("report.pdf")
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    assert_eq!(contents, "pdf bytes");
}

#[tokio::test]
async fn partial_failure_lists_skipped_documents() {
    let search = MockSearch {
        result: Ok(vec![
            record("1", "http://files/a.pdf"),
            record("2", "http://files/missing.pdf"),
            record("3", "http://files/b.pdf"),
        ]),
    };
    let http = MockHttp::new(&[
        ("http://files/a.pdf", b"a".as_slice()),
        ("http://files/b.pdf", b"b".as_slice()),
    ]);
    let pipeline = ExportPipeline::new(search, http);

    let bundle = pipeline
        .export_all(&SearchFilter::unfiltered(), &Token::new("tkn"))
        .await
        .unwrap();

    let mut names = zip_names(&bundle.archive);
    names.sort();
    assert_eq!(names, ["a.pdf", "b.pdf"]);

    assert_eq!(bundle.skipped.len(), 1);
    assert_eq!(bundle.skipped[0].id, "2");
    assert!(matches!(
        bundle.skipped[0].reason,
        FetchError::Status { status: 404, .. }
    ));
}

#[tokio::test]
async fn all_failures_abort_the_export() {
    let search = MockSearch {
        result: Ok(vec![
            record("1", "http://files/a.pdf"),
            record("2", "http://files/b.pdf"),
        ]),
    };
    let pipeline = ExportPipeline::new(search, MockHttp::new(&[]));

    let result = pipeline
        .export_all(&SearchFilter::unfiltered(), &Token::new("tkn"))
        .await;

    match result {
        Err(PipelineError::AllDownloadsFailed { skipped }) => {
            assert_eq!(skipped.len(), 2);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn empty_search_is_nothing_to_export() {
    let search = MockSearch { result: Ok(vec![]) };
    let http = Arc::new(MockHttp::new(&[]));
    let pipeline = ExportPipeline::new(search, SharedHttp(Arc::clone(&http)));

    let result = pipeline
        .export_all(&SearchFilter::unfiltered(), &Token::new("tkn"))
        .await;

    assert!(matches!(result, Err(PipelineError::NothingToExport)));
    assert_eq!(http.calls(), 0);
}

#[tokio::test]
async fn search_failure_propagates() {
    let search = MockSearch {
        result: Err(ApiError::Status {
            endpoint: "searchDocumentEntry",
            status: 401,
            message: "expired token".to_string(),
        }),
    };
    let pipeline = ExportPipeline::new(search, MockHttp::new(&[]));

    let result = pipeline
        .export_all(&SearchFilter::unfiltered(), &Token::new("tkn"))
        .await;

    assert!(matches!(
        result,
        Err(PipelineError::Search(ApiError::Status { status: 401, .. }))
    ));
}

#[tokio::test]
async fn pre_cancelled_export_downloads_nothing() {
    let search = MockSearch {
        result: Ok(vec![record("1", "http://files/a.pdf")]),
    };
    let http = Arc::new(MockHttp::new(&[("http://files/a.pdf", b"a".as_slice())]));
    let pipeline = ExportPipeline::new(search, SharedHttp(Arc::clone(&http)));

    let (canceller, signal) = cancel_pair();
    canceller.cancel();

    let result = pipeline
        .export_all_cancellable(&SearchFilter::unfiltered(), &Token::new("tkn"), signal)
        .await;

    assert!(matches!(result, Err(PipelineError::Cancelled)));
    assert_eq!(http.calls(), 0);
}

#[tokio::test]
async fn token_is_forwarded_to_every_download() {
    let search = MockSearch {
        result: Ok(vec![record("1", "http://files/a.pdf")]),
    };
    let http = Arc::new(MockHttp::new(&[("http://files/a.pdf", b"a".as_slice())]));
    let pipeline = ExportPipeline::new(search, SharedHttp(Arc::clone(&http)));

    pipeline
        .export_all(&SearchFilter::unfiltered(), &Token::new("opaque-value"))
        .await
        .unwrap();

    let seen = http.seen_headers.lock().unwrap();
    assert!(seen.contains(&("token".to_string(), "opaque-value".to_string())));
}

#[tokio::test]
async fn single_download_uses_the_record_locator() {
    let search = MockSearch { result: Ok(vec![]) };
    let http = MockHttp::new(&[("http://files/photo.png", b"png".as_slice())]);
    let pipeline = ExportPipeline::new(search, http);

    let outcome = pipeline
        .download_one(&record("9", "http://files/photo.png"), &Token::new("tkn"))
        .await;

    match outcome {
        docpak::fetch::Outcome::Success {
            id,
            filename,
            payload,
        } => {
            assert_eq!(id, "9");
            assert_eq!(filename, "photo.png");
            assert_eq!(payload.as_ref(), b"png");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}
