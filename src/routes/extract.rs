//! Extraction route
//!
//! One multipart upload in, one `ExtractionResult` out. Validation failures
//! are the only client-visible errors; everything past validation is
//! handled by the pipeline's internal degradation paths.

use axum::{
    extract::{Multipart, State},
    routing::post,
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::extraction::{ExtractionResult, RawDocument};
use crate::state::AppState;

/// Create the extract router
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(extract_document))
}

/// POST /api/v1/extract
///
/// Accepts a multipart form with a `file` part carrying the PDF payload.
async fn extract_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractionResult>> {
    let mut document: Option<RawDocument> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Payload(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or("document.pdf").to_string();
        let media_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Payload(e.to_string()))?;
        document = Some(RawDocument {
            name,
            media_type,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let doc = document.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;

    if doc.media_type != "application/pdf" {
        return Err(AppError::Validation(format!(
            "File must be a PDF, got '{}'",
            doc.media_type
        )));
    }
    if doc.bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    tracing::info!(
        file_name = %doc.name,
        size = doc.bytes.len(),
        "received document for extraction"
    );

    let result = state.pipeline().extract(doc).await;
    Ok(Json(result))
}
