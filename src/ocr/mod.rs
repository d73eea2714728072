//! OCR fallback collaborator.

pub mod client;
pub mod types;

pub use client::{OcrProvider, RemoteOcrClient};
pub use types::{OcrError, OcrOutput};
