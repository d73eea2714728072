//! Heuristic PDF content extraction.
//!
//! The pipeline recovers text from raw PDF bytes with a cascade of
//! byte-pattern strategies, gates the output on a cheap quality check,
//! escalates to the external OCR service when the heuristics come up short,
//! and derives pages, languages, and statistics from whichever text won.
//!
//! # Modules
//!
//! - `scanner`: Latin-1 byte-pattern search primitives
//! - `metadata`: info-dictionary field recovery
//! - `recovery`: the ordered extraction-strategy cascade
//! - `quality`: the acceptability gate that decides OCR escalation
//! - `paginate`: length-based page splitting
//! - `language`: stopword-profile language identification
//! - `statistics`: word/character counting
//! - `auxiliary`: stubbed font/image/table capability
//! - `pipeline`: orchestration of the above

pub mod auxiliary;
pub mod language;
pub mod metadata;
pub mod paginate;
pub mod pipeline;
pub mod quality;
pub mod recovery;
pub mod scanner;
pub mod statistics;
pub mod types;

pub use pipeline::ExtractionPipeline;
pub use types::{
    DocumentContent, DocumentMetadata, DocumentStatistics, ExtractionCandidate, ExtractionResult,
    LanguageVerdict, MetadataSummary, PageStatistic, QualityReason, QualityVerdict, RawDocument,
    RecoveryMethod,
};
