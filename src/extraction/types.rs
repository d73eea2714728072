//! Core extraction types
//!
//! Data model for the extraction pipeline plus the serialized result shapes
//! returned to clients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::auxiliary::{FontUsage, ImageRef, TableRef};

/// Raw uploaded document. Owned by the pipeline for the lifetime of one
/// request and never mutated.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Original file name as uploaded
    pub name: String,
    /// Declared media type
    pub media_type: String,
    /// File content
    pub bytes: Vec<u8>,
}

/// Which recovery strategy produced an extraction candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecoveryMethod {
    /// Text-object marker scan (BT..ET blocks, show-text operands)
    MarkerScan,
    /// Printable runs inside stream..endstream blocks
    StreamScan,
    /// Synthesized placeholder content from structural probes
    StructuralFallback,
}

/// One recovery attempt's output: normalized text plus the page estimate
/// derived from the document structure.
#[derive(Debug, Clone)]
pub struct ExtractionCandidate {
    pub text: String,
    /// Always at least 1
    pub estimated_page_count: usize,
    pub method: RecoveryMethod,
}

/// Info-dictionary fields recovered from the document.
///
/// Every field is independently present or absent; nothing is defaulted
/// here. Display defaults are applied when the response is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
    pub modification_date: Option<String>,
}

/// Why a quality verdict came out the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityReason {
    TooFewWords,
    SuspiciousRepeatedTokens,
    NumericNoise,
    Ok,
}

/// Acceptability of recovered text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityVerdict {
    pub is_acceptable: bool,
    pub reason: QualityReason,
}

/// Detected language for one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageVerdict {
    /// ISO 639-1 style code
    pub language: String,
    /// In [0, 1]
    pub confidence: f64,
}

/// Word and character counts for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStatistic {
    /// 1-indexed page number
    pub page: usize,
    pub words: usize,
    pub characters: usize,
}

/// Document-wide counts. Totals always equal the sums over `page_stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStatistics {
    pub total_words: usize,
    pub total_characters: usize,
    pub page_stats: Vec<PageStatistic>,
}

/// Metadata as serialized in the response, with display defaults applied
/// and the active page count attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataSummary {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub creator: String,
    pub producer: String,
    pub creation_date: String,
    pub modification_date: String,
    pub pages: usize,
}

/// Extracted text content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContent {
    pub full_text: String,
    /// One entry per page; never shorter than the active page count
    pub page_texts: Vec<String>,
    /// Reserved for structural outline extraction
    pub structure: Vec<serde_json::Value>,
}

/// Terminal aggregate for one extraction request. Built once, immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Uploaded file name without its extension
    pub filename: String,
    pub metadata: MetadataSummary,
    pub content: DocumentContent,
    /// Per-page font usage (stub output, empty)
    pub fonts: BTreeMap<usize, Vec<FontUsage>>,
    /// Embedded image references (stub output, empty)
    pub images: Vec<ImageRef>,
    /// Recovered tables (stub output, empty)
    pub tables: Vec<TableRef>,
    /// Language verdict per non-blank page, keyed by 1-indexed page number
    pub languages: BTreeMap<usize, LanguageVerdict>,
    pub statistics: DocumentStatistics,
    /// Wall-clock processing duration in milliseconds
    pub processing_time: u64,
}
