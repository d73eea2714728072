//! Info-dictionary metadata recovery.
//!
//! PDF documents carry their metadata as `/Key (value)` markers. Each
//! recognized field gets one pattern lookup; fields without a marker stay
//! absent rather than being inferred.

use once_cell::sync::Lazy;
use regex::Regex;

use super::scanner::DocumentScanner;
use super::types::DocumentMetadata;

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/Title\s*\(([^)]+)\)").unwrap());
static AUTHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"/Author\s*\(([^)]+)\)").unwrap());
static CREATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"/Creator\s*\(([^)]+)\)").unwrap());
static PRODUCER: Lazy<Regex> = Lazy::new(|| Regex::new(r"/Producer\s*\(([^)]+)\)").unwrap());
static CREATION_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/CreationDate\s*\(([^)]+)\)").unwrap());
static MOD_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/ModDate\s*\(([^)]+)\)").unwrap());

/// Reads info-dictionary fields from a scanned document.
pub struct MetadataReader;

impl MetadataReader {
    /// Never fails; a document without any metadata markers yields an
    /// all-absent result.
    pub fn read(scanner: &DocumentScanner) -> DocumentMetadata {
        DocumentMetadata {
            title: scanner.first_group(&TITLE),
            author: scanner.first_group(&AUTHOR),
            // The subject marker is not emitted by the writers this scanner
            // targets; the field stays absent and is defaulted downstream.
            subject: None,
            creator: scanner.first_group(&CREATOR),
            producer: scanner.first_group(&PRODUCER),
            creation_date: scanner.first_group(&CREATION_DATE),
            modification_date: scanner.first_group(&MOD_DATE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_present_fields() {
        let bytes = b"1 0 obj << /Title (Quarterly Review) /Author (Jane Doe) \
            /Creator (WordProcessor 9) /Producer (PrintEngine) \
            /CreationDate (D:20240301120000Z) /ModDate (D:20240302090000Z) >>";
        let scanner = DocumentScanner::new(bytes);
        let meta = MetadataReader::read(&scanner);

        assert_eq!(meta.title.as_deref(), Some("Quarterly Review"));
        assert_eq!(meta.author.as_deref(), Some("Jane Doe"));
        assert_eq!(meta.creator.as_deref(), Some("WordProcessor 9"));
        assert_eq!(meta.producer.as_deref(), Some("PrintEngine"));
        assert_eq!(meta.creation_date.as_deref(), Some("D:20240301120000Z"));
        assert_eq!(meta.modification_date.as_deref(), Some("D:20240302090000Z"));
        assert_eq!(meta.subject, None);
    }

    #[test]
    fn missing_fields_stay_absent() {
        let scanner = DocumentScanner::new(b"<< /Title (Only a Title) >>");
        let meta = MetadataReader::read(&scanner);
        assert_eq!(meta.title.as_deref(), Some("Only a Title"));
        assert_eq!(meta.author, None);
        assert_eq!(meta.producer, None);
    }

    #[test]
    fn markerless_document_yields_all_absent() {
        let scanner = DocumentScanner::new(&[0x00, 0x01, 0x02, 0xff]);
        assert_eq!(MetadataReader::read(&scanner), DocumentMetadata::default());
    }
}
