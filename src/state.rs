//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::extraction::ExtractionPipeline;
use crate::ocr::{OcrProvider, RemoteOcrClient};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    pipeline: ExtractionPipeline,
}

impl AppState {
    /// Create application state with the remote OCR client from the
    /// configuration.
    pub fn new(config: Config) -> Self {
        let ocr = Arc::new(RemoteOcrClient::new(&config.ocr));
        Self::with_ocr(config, ocr)
    }

    /// Create application state with an explicit OCR provider. Tests use
    /// this to substitute the network collaborator.
    pub fn with_ocr(config: Config, ocr: Arc<dyn OcrProvider>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                pipeline: ExtractionPipeline::new(ocr),
                config,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the extraction pipeline
    pub fn pipeline(&self) -> &ExtractionPipeline {
        &self.inner.pipeline
    }
}
