//! Auxiliary feature extraction (fonts, images, tables).
//!
//! # Note
//!
//! Real font, image, and table recovery needs a full PDF object-graph
//! parser, which this pipeline deliberately does not carry. The capability
//! is kept behind a trait with a stub implementation so the response
//! envelope stays stable for clients while a real extractor can be swapped
//! in later. Pagination, language detection, and statistics never read from
//! this output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::scanner::DocumentScanner;

/// Font appearance on one page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontUsage {
    pub font_name: String,
    pub font_size: u32,
    /// Share of the page set in this font, percent
    pub usage: u32,
}

/// Reference to an embedded image
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub page: usize,
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
}

/// Recovered table content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRef {
    pub page: usize,
    pub data: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
}

/// Everything the auxiliary extractors contribute to a result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuxiliaryFeatures {
    pub fonts: BTreeMap<usize, Vec<FontUsage>>,
    pub images: Vec<ImageRef>,
    pub tables: Vec<TableRef>,
}

/// Capability interface for font/image/table recovery.
pub trait AuxiliaryExtractor: Send + Sync {
    fn derive(
        &self,
        scanner: &DocumentScanner,
        page_count: usize,
        filename: &str,
    ) -> AuxiliaryFeatures;
}

/// Stub extractor: reports no fonts, images, or tables.
pub struct StubAuxiliaryExtractor;

impl AuxiliaryExtractor for StubAuxiliaryExtractor {
    fn derive(
        &self,
        _scanner: &DocumentScanner,
        _page_count: usize,
        _filename: &str,
    ) -> AuxiliaryFeatures {
        AuxiliaryFeatures::default()
    }
}
