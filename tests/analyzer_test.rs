//! Integration tests for analyzers and the extractor builder.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use finrev::analyze::{DocumentAnalyzer, FeatureType, SavedResponseAnalyzer, DEFAULT_FEATURES};
use finrev::error::{Error, Result};
use finrev::model::AnalysisResponse;
use finrev::{RevenueExtractor, Stage};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/profit_or_loss.json")
}

/// Mock analyzer for testing.
struct MockAnalyzer {
    response: Option<AnalysisResponse>,
    calls: Mutex<Vec<(usize, Vec<FeatureType>)>>,
}

impl MockAnalyzer {
    fn returning(response: AnalysisResponse) -> Self {
        Self {
            response: Some(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            response: None,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl DocumentAnalyzer for MockAnalyzer {
    fn name(&self) -> &str {
        "mock"
    }

    fn analyze(&self, document: &[u8], features: &[FeatureType]) -> Result<AnalysisResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((document.len(), features.to_vec()));
        self.response
            .clone()
            .ok_or_else(|| Error::Service("AccessDeniedException: not authorized".into()))
    }
}

fn fixture_response() -> AnalysisResponse {
    SavedResponseAnalyzer::new(fixture_path())
        .analyze(&[], DEFAULT_FEATURES)
        .unwrap()
}

fn pdf_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"%PDF-1.7\n1 0 obj\n<<>>\nendobj\n%%EOF\n")
        .unwrap();
    file
}

#[test]
fn test_extract_file_with_mock() {
    let analyzer = MockAnalyzer::returning(fixture_response());
    let pdf = pdf_file();

    let result = RevenueExtractor::new()
        .with_target_year("2024")
        .extract_file(&analyzer, pdf.path())
        .unwrap();

    assert_eq!(result.value, "15,382,249,000");
    let calls = analyzer.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, vec![FeatureType::Tables, FeatureType::Forms]);
    assert!(calls[0].0 > 0);
}

#[test]
fn test_requested_features_forwarded() {
    let analyzer = MockAnalyzer::returning(fixture_response());
    RevenueExtractor::new()
        .with_features(&[FeatureType::Tables, FeatureType::Layout])
        .extract_bytes(&analyzer, b"%PDF-1.4\n")
        .unwrap();

    let calls = analyzer.calls.lock().unwrap();
    assert_eq!(calls[0].1, vec![FeatureType::Tables, FeatureType::Layout]);
}

#[test]
fn test_service_error_is_fatal() {
    let analyzer = MockAnalyzer::failing();
    let err = RevenueExtractor::new()
        .extract_bytes(&analyzer, b"%PDF-1.7\n")
        .unwrap_err();

    assert!(matches!(err, Error::Service(_)));
    assert!(err.is_service());
    assert_eq!(err.stage(), Stage::Submitting);
    assert_eq!(analyzer.calls.lock().unwrap().len(), 1);
}

#[test]
fn test_invalid_input_never_submitted() {
    let analyzer = MockAnalyzer::returning(fixture_response());
    let err = RevenueExtractor::new()
        .extract_bytes(&analyzer, b"PK\x03\x04 zip archive")
        .unwrap_err();

    assert!(matches!(err, Error::UnknownFormat));
    assert!(analyzer.calls.lock().unwrap().is_empty());
}

#[test]
fn test_missing_input_file() {
    let analyzer = MockAnalyzer::returning(fixture_response());
    let dir = tempfile::tempdir().unwrap();
    let err = RevenueExtractor::new()
        .extract_file(&analyzer, dir.path().join("missing.pdf"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_saved_response_replays() {
    let dir = tempfile::tempdir().unwrap();
    let saved = dir.path().join("response.json");
    let analyzer = MockAnalyzer::returning(fixture_response());

    let first = RevenueExtractor::new()
        .save_response_to(&saved)
        .extract_bytes(&analyzer, b"%PDF-1.7\n")
        .unwrap();

    let replay = SavedResponseAnalyzer::new(&saved);
    let second = RevenueExtractor::new()
        .extract_bytes(&replay, b"%PDF-1.7\n")
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(
        replay.analyze(&[], DEFAULT_FEATURES).unwrap(),
        fixture_response()
    );
}

#[test]
fn test_response_saved_even_when_revenue_missing() {
    let dir = tempfile::tempdir().unwrap();
    let saved = dir.path().join("response.json");
    let analyzer = MockAnalyzer::returning(fixture_response());

    let err = RevenueExtractor::new()
        .with_label("Dividends")
        .save_response_to(&saved)
        .extract_bytes(&analyzer, b"%PDF-1.7\n")
        .unwrap_err();

    assert!(matches!(err, Error::RevenueNotFound { .. }));
    assert!(saved.exists());
}
