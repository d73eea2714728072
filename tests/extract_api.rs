//! End-to-end tests for the extraction and export API.
//!
//! The OCR collaborator is replaced with an always-failing provider: every
//! test doubles as proof that a missing OCR service never turns a request
//! into an error.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;

use papiro_server::app;
use papiro_server::config::Config;
use papiro_server::extraction::ExtractionResult;
use papiro_server::ocr::{OcrError, OcrOutput, OcrProvider};
use papiro_server::state::AppState;

struct UnreachableOcr;

#[async_trait]
impl OcrProvider for UnreachableOcr {
    async fn recognize(&self, _filename: &str, _data: &[u8]) -> Result<OcrOutput, OcrError> {
        Err(OcrError::Transport("connection refused".to_string()))
    }
}

fn test_server() -> TestServer {
    let state = AppState::with_ocr(Config::default(), Arc::new(UnreachableOcr));
    TestServer::new(app(state)).expect("failed to start test server")
}

/// Two-page document with text-object content and metadata markers.
fn sample_pdf() -> Vec<u8> {
    let mut body = String::from("%PDF-1.4\n");
    body.push_str("1 0 obj << /Title (Integration Sample) /Author (Test Author) >>\n");
    body.push_str("2 0 obj << /Type /Page >>\n");
    body.push_str("3 0 obj << /Type /Page >>\n");
    for _ in 0..15 {
        body.push_str(
            "BT (The quarterly review covers revenue, staffing, and operations \
             across both regions in detail) Tj ET\n",
        );
    }
    body.push_str("%%EOF\n");
    body.into_bytes()
}

/// Sufficient length for the cascade but too few words for the quality
/// gate, forcing an OCR escalation attempt.
fn low_quality_pdf() -> Vec<u8> {
    let mut body = String::from("%PDF-1.4\n");
    for _ in 0..5 {
        body.push_str("BT (Loremipsumdolorsitametconsecteturadipiscingelitsed) Tj ET\n");
    }
    body.into_bytes()
}

fn upload(data: Vec<u8>, filename: &str, mime: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(data).file_name(filename).mime_type(mime),
    )
}

#[tokio::test]
async fn extract_returns_consistent_result() {
    let server = test_server();
    let response = server
        .post("/api/v1/extract")
        .multipart(upload(sample_pdf(), "sample.pdf", "application/pdf"))
        .await;

    response.assert_status_ok();
    let result: ExtractionResult = response.json();

    assert_eq!(result.filename, "sample");
    assert_eq!(result.metadata.title, "Integration Sample");
    assert_eq!(result.metadata.author, "Test Author");
    assert_eq!(result.metadata.pages, 2);
    assert_eq!(result.content.page_texts.len(), result.metadata.pages);

    let words: usize = result.statistics.page_stats.iter().map(|p| p.words).sum();
    let characters: usize = result
        .statistics
        .page_stats
        .iter()
        .map(|p| p.characters)
        .sum();
    assert_eq!(result.statistics.total_words, words);
    assert_eq!(result.statistics.total_characters, characters);

    for page in result.languages.keys() {
        assert!(*page >= 1 && *page <= result.metadata.pages);
    }
}

#[tokio::test]
async fn non_pdf_media_type_is_rejected() {
    let server = test_server();
    let response = server
        .post("/api/v1/extract")
        .multipart(upload(b"plain words".to_vec(), "notes.txt", "text/plain"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid request");
    assert!(body["details"].as_str().unwrap().contains("must be a PDF"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn missing_file_part_is_rejected() {
    let server = test_server();
    let response = server
        .post("/api/v1/extract")
        .multipart(MultipartForm::new().add_text("other", "value"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["details"].as_str().unwrap().contains("No file provided"));
}

#[tokio::test]
async fn unavailable_ocr_still_yields_success() {
    let server = test_server();
    let response = server
        .post("/api/v1/extract")
        .multipart(upload(low_quality_pdf(), "scan.pdf", "application/pdf"))
        .await;

    // The gate escalates, the fallback fails, and the heuristic candidate
    // still comes back as a success response.
    response.assert_status_ok();
    let result: ExtractionResult = response.json();
    assert!(result
        .content
        .full_text
        .contains("Loremipsumdolorsitamet"));
}

#[tokio::test]
async fn export_rejects_unknown_format() {
    let server = test_server();
    let extract = server
        .post("/api/v1/extract")
        .multipart(upload(sample_pdf(), "sample.pdf", "application/pdf"))
        .await;
    let result: serde_json::Value = extract.json();

    let response = server
        .post("/api/v1/export")
        .json(&serde_json::json!({ "result": result, "format": "csv" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["details"].as_str().unwrap().contains("Invalid format"));
}

#[tokio::test]
async fn export_json_and_txt_succeed() {
    let server = test_server();
    let extract = server
        .post("/api/v1/extract")
        .multipart(upload(sample_pdf(), "sample.pdf", "application/pdf"))
        .await;
    let result: serde_json::Value = extract.json();

    let json_response = server
        .post("/api/v1/export")
        .json(&serde_json::json!({ "result": result, "format": "json" }))
        .await;
    json_response.assert_status_ok();
    assert!(json_response
        .header("content-disposition")
        .to_str()
        .unwrap()
        .contains("sample.json"));
    let round_trip: ExtractionResult = serde_json::from_str(&json_response.text()).unwrap();
    assert_eq!(round_trip.filename, "sample");

    let txt_response = server
        .post("/api/v1/export")
        .json(&serde_json::json!({ "result": result, "format": "txt" }))
        .await;
    txt_response.assert_status_ok();
    let report = txt_response.text();
    assert!(report.contains("PDF EXTRACTION REPORT"));
    assert!(report.contains("Total Words:"));
}

#[tokio::test]
async fn export_without_format_is_rejected() {
    let server = test_server();
    let response = server
        .post("/api/v1/export")
        .json(&serde_json::json!({ "result": {} }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_endpoint_reports_version() {
    let server = test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}
