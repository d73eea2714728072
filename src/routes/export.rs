//! Export route
//!
//! Turns a previously produced extraction result back into a downloadable
//! file: the pretty-printed record as JSON, or a plain-text report.

use axum::{
    http::header,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::extraction::ExtractionResult;
use crate::state::AppState;

/// Create the export router
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(export_result))
}

/// POST /api/v1/export
///
/// Body: `{ "result": <extraction result>, "format": "json" | "txt" }`.
/// Any other format value is rejected before any work happens.
async fn export_result(Json(payload): Json<serde_json::Value>) -> Result<Response> {
    let format = payload
        .get("format")
        .and_then(|v| v.as_str())
        .ok_or_else(|| AppError::Validation("Missing result or format parameter".to_string()))?
        .to_string();
    let result = payload
        .get("result")
        .cloned()
        .ok_or_else(|| AppError::Validation("Missing result or format parameter".to_string()))?;
    let result: ExtractionResult = serde_json::from_value(result)
        .map_err(|e| AppError::Validation(format!("Invalid result payload: {}", e)))?;

    let base = if result.filename.is_empty() {
        "document"
    } else {
        result.filename.as_str()
    };

    let (content, mime_type, filename) = match format.as_str() {
        "json" => (
            serde_json::to_string_pretty(&result)
                .map_err(|e| AppError::Internal(e.to_string()))?,
            "application/json",
            format!("{}.json", base),
        ),
        "txt" => (text_report(&result), "text/plain", format!("{}.txt", base)),
        other => {
            return Err(AppError::Validation(format!(
                "Invalid format '{}'. Use 'json' or 'txt'",
                other
            )))
        }
    };

    let headers = [
        (header::CONTENT_TYPE, mime_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];
    Ok((headers, content).into_response())
}

/// Human-readable report: metadata, statistics, per-page languages, and the
/// full extracted text.
fn text_report(result: &ExtractionResult) -> String {
    let mut lines = vec![
        "PDF EXTRACTION REPORT".to_string(),
        "=====================".to_string(),
        String::new(),
        format!("Filename: {}", result.filename),
        format!("Processing Time: {}ms", result.processing_time),
        format!("Pages: {}", result.metadata.pages),
        String::new(),
        "METADATA".to_string(),
        "--------".to_string(),
        format!("Title: {}", result.metadata.title),
        format!("Author: {}", result.metadata.author),
        format!("Creator: {}", result.metadata.creator),
        format!("Created: {}", result.metadata.creation_date),
        String::new(),
        "STATISTICS".to_string(),
        "----------".to_string(),
        format!("Total Words: {}", result.statistics.total_words),
        format!("Total Characters: {}", result.statistics.total_characters),
        format!("Images Found: {}", result.images.len()),
        format!("Tables Found: {}", result.tables.len()),
        String::new(),
        "LANGUAGES DETECTED".to_string(),
        "------------------".to_string(),
    ];

    for (page, verdict) in &result.languages {
        lines.push(format!(
            "Page {}: {} ({:.1}%)",
            page,
            verdict.language.to_uppercase(),
            verdict.confidence * 100.0
        ));
    }

    lines.push(String::new());
    lines.push("EXTRACTED CONTENT".to_string());
    lines.push("-----------------".to_string());
    lines.push(String::new());
    lines.push(result.content.full_text.clone());

    lines.join("\n")
}
