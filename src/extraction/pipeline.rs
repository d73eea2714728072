//! Extraction orchestration.
//!
//! One request flows through: scan (text recovery + metadata, concurrent on
//! the same immutable bytes) → quality gate → optional OCR escalation →
//! pagination → per-page language identification → statistics → result
//! assembly. Every stage degrades to a safe default instead of failing the
//! request; the pipeline never returns an error.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use super::auxiliary::{AuxiliaryExtractor, AuxiliaryFeatures, StubAuxiliaryExtractor};
use super::language::LanguageIdentifier;
use super::metadata::MetadataReader;
use super::paginate::Paginator;
use super::quality::QualityGate;
use super::recovery::TextRecoveryEngine;
use super::scanner::DocumentScanner;
use super::statistics::StatisticsAggregator;
use super::types::{
    DocumentContent, DocumentMetadata, ExtractionCandidate, ExtractionResult, LanguageVerdict,
    MetadataSummary, RawDocument,
};
use crate::ocr::OcrProvider;

/// Composes the extraction stages for one request at a time. Stateless
/// between requests; safe to share behind the application state.
pub struct ExtractionPipeline {
    ocr: Arc<dyn OcrProvider>,
    auxiliary: Arc<dyn AuxiliaryExtractor>,
}

impl ExtractionPipeline {
    pub fn new(ocr: Arc<dyn OcrProvider>) -> Self {
        Self {
            ocr,
            auxiliary: Arc::new(StubAuxiliaryExtractor),
        }
    }

    /// Run the full pipeline. Always produces a result; internal faults
    /// degrade the affected stage to its safest default.
    pub async fn extract(&self, doc: RawDocument) -> ExtractionResult {
        let started = Instant::now();

        let (mut candidate, metadata, auxiliary) = self.scan(&doc).await;

        let verdict = QualityGate::assess(&candidate.text);
        if !verdict.is_acceptable {
            tracing::info!(
                file_name = %doc.name,
                reason = ?verdict.reason,
                "recovered text below quality gate, escalating to OCR"
            );
            match self.ocr.recognize(&doc.name, &doc.bytes).await {
                Ok(ocr) => {
                    // Text and page count are replaced together so every
                    // downstream stage sees one consistent page count.
                    candidate = ExtractionCandidate {
                        text: ocr.text.trim().to_string(),
                        estimated_page_count: ocr.pages.max(1),
                        method: candidate.method,
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        file_name = %doc.name,
                        error = %e,
                        "OCR fallback unavailable, keeping heuristic candidate"
                    );
                }
            }
        }

        let page_count = candidate.estimated_page_count;
        let page_texts = Paginator::split(&candidate.text, page_count);

        // Pages are scored independently; keying by page number keeps the
        // assembled map stable regardless of completion order.
        let languages: BTreeMap<usize, LanguageVerdict> =
            futures::future::join_all(page_texts.iter().enumerate().map(|(index, text)| {
                let text = text.clone();
                async move { (index + 1, LanguageIdentifier::identify(&text)) }
            }))
            .await
            .into_iter()
            .filter_map(|(page, verdict)| verdict.map(|v| (page, v)))
            .collect();

        let statistics = StatisticsAggregator::aggregate(&page_texts);

        let stem = file_stem(&doc.name);
        let result = ExtractionResult {
            metadata: summarize_metadata(&metadata, &stem, page_count),
            filename: stem,
            content: DocumentContent {
                full_text: candidate.text,
                page_texts,
                structure: Vec::new(),
            },
            fonts: auxiliary.fonts,
            images: auxiliary.images,
            tables: auxiliary.tables,
            languages,
            statistics,
            processing_time: started.elapsed().as_millis() as u64,
        };

        tracing::info!(
            file_name = %doc.name,
            pages = page_count,
            words = result.statistics.total_words,
            method = ?candidate.method,
            elapsed_ms = result.processing_time,
            "extraction complete"
        );
        result
    }

    /// Recovery, metadata, and auxiliary probing share one blocking task:
    /// they all read the same immutable bytes. A panic in the task degrades
    /// to the structural-fallback candidate and all-absent metadata.
    async fn scan(
        &self,
        doc: &RawDocument,
    ) -> (ExtractionCandidate, DocumentMetadata, AuxiliaryFeatures) {
        let bytes = doc.bytes.clone();
        let name = doc.name.clone();
        let auxiliary = Arc::clone(&self.auxiliary);

        let outcome = tokio::task::spawn_blocking(move || {
            let scanner = DocumentScanner::new(&bytes);
            let candidate = TextRecoveryEngine::new().recover(&scanner);
            let metadata = MetadataReader::read(&scanner);
            let features = auxiliary.derive(&scanner, candidate.estimated_page_count, &name);
            (candidate, metadata, features)
        })
        .await;

        match outcome {
            Ok(scanned) => scanned,
            Err(e) => {
                tracing::error!(
                    file_name = %doc.name,
                    error = %e,
                    "scan stage failed, degrading to structural fallback"
                );
                (
                    TextRecoveryEngine::degraded_candidate(),
                    DocumentMetadata::default(),
                    AuxiliaryFeatures::default(),
                )
            }
        }
    }
}

fn file_stem(name: &str) -> String {
    name.strip_suffix(".pdf")
        .or_else(|| name.strip_suffix(".PDF"))
        .unwrap_or(name)
        .to_string()
}

/// Apply display defaults and attach the active page count. Absent fields
/// get their presentation defaults here, never in the reader.
fn summarize_metadata(meta: &DocumentMetadata, stem: &str, pages: usize) -> MetadataSummary {
    let now = chrono::Utc::now().to_rfc3339();
    MetadataSummary {
        title: meta.title.clone().unwrap_or_else(|| stem.to_string()),
        author: meta.author.clone().unwrap_or_else(|| "Unknown".to_string()),
        subject: meta.subject.clone().unwrap_or_default(),
        creator: meta.creator.clone().unwrap_or_else(|| "Unknown".to_string()),
        producer: meta
            .producer
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        creation_date: meta.creation_date.clone().unwrap_or_else(|| now.clone()),
        modification_date: meta.modification_date.clone().unwrap_or(now),
        pages,
    }
}
