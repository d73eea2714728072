//! OCR fallback types.

use serde::Deserialize;

/// Successful OCR service response: recognized text plus the page count the
/// service observed.
#[derive(Debug, Clone, Deserialize)]
pub struct OcrOutput {
    pub text: String,
    /// Always at least 1; a smaller value is rejected as malformed
    pub pages: usize,
}

/// Ways an OCR attempt can fail. Every variant means "fallback unavailable"
/// to the caller; none of them abort the extraction request.
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("OCR service unreachable: {0}")]
    Transport(String),

    #[error("OCR service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("OCR service response malformed: {0}")]
    MalformedResponse(String),
}
