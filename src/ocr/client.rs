//! OCR provider trait and the remote HTTP client.
//!
//! The OCR service is an opaque remote capability: the document bytes go out
//! as a multipart upload, `{text, pages}` comes back. One attempt per
//! request, bounded by the client timeout; no retry loop.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::OcrConfig;

use super::types::{OcrError, OcrOutput};

/// OCR capability interface
#[async_trait]
pub trait OcrProvider: Send + Sync {
    /// Recognize text in a whole document.
    async fn recognize(&self, filename: &str, data: &[u8]) -> Result<OcrOutput, OcrError>;
}

/// HTTP client for the external OCR service.
pub struct RemoteOcrClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteOcrClient {
    pub fn new(config: &OcrConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint.clone(),
        }
    }
}

#[async_trait]
impl OcrProvider for RemoteOcrClient {
    async fn recognize(&self, filename: &str, data: &[u8]) -> Result<OcrOutput, OcrError> {
        let form = reqwest::multipart::Form::new().part(
            "file",
            reqwest::multipart::Part::bytes(data.to_vec()).file_name(filename.to_string()),
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| OcrError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::Status { status, body });
        }

        let output: OcrOutput = response
            .json()
            .await
            .map_err(|e| OcrError::MalformedResponse(e.to_string()))?;

        if output.pages < 1 {
            return Err(OcrError::MalformedResponse(
                "page count must be at least 1".to_string(),
            ));
        }

        Ok(output)
    }
}
