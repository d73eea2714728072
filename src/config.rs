//! Configuration management for the Papiro server

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for uploaded document size, in bytes
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Endpoint of the external OCR service
    pub endpoint: String,
    /// Request timeout for one OCR attempt
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                max_upload_bytes: 50 * 1024 * 1024,
            },
            ocr: OcrConfig {
                endpoint: "http://localhost:8884/ocr".to_string(),
                timeout_secs: 30,
            },
        }
    }
}

impl Config {
    /// Every setting has a default; unset or unparsable variables fall back
    /// instead of failing startup.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.server.port),
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.server.max_upload_bytes),
            },
            ocr: OcrConfig {
                endpoint: env::var("OCR_ENDPOINT").unwrap_or(defaults.ocr.endpoint),
                timeout_secs: env::var("OCR_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.ocr.timeout_secs),
            },
        }
    }
}
