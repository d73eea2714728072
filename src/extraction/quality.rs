//! Quality gating of recovered text.
//!
//! Decides whether heuristic extraction output is trustworthy or whether the
//! request should escalate to the OCR fallback. Binary content misread as
//! text tends to surface as long same-row keyboard runs or digit floods, so
//! those patterns are checked ahead of the word-count floor.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{QualityReason, QualityVerdict};

/// Fewer whitespace-separated words than this is not a usable document.
const MIN_WORDS: usize = 10;

/// Five or more consecutive top-row keyboard capitals: the signature of
/// corrupted bytes decoded as letters.
static KEYBOARD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[QWERTYUIOP]{5,}").unwrap());

/// Ten or more consecutive digits.
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{10,}").unwrap());

/// Pure acceptability check on candidate text. Deterministic, no side
/// effects.
pub struct QualityGate;

impl QualityGate {
    pub fn assess(text: &str) -> QualityVerdict {
        if KEYBOARD_RUN.is_match(text) {
            return QualityVerdict {
                is_acceptable: false,
                reason: QualityReason::SuspiciousRepeatedTokens,
            };
        }
        if DIGIT_RUN.is_match(text) {
            return QualityVerdict {
                is_acceptable: false,
                reason: QualityReason::NumericNoise,
            };
        }
        if text.split_whitespace().count() < MIN_WORDS {
            return QualityVerdict {
                is_acceptable: false,
                reason: QualityReason::TooFewWords,
            };
        }
        QualityVerdict {
            is_acceptable: true,
            reason: QualityReason::Ok,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_words_are_too_few() {
        let verdict = QualityGate::assess("one two three four five six seven eight nine");
        assert!(!verdict.is_acceptable);
        assert_eq!(verdict.reason, QualityReason::TooFewWords);
    }

    #[test]
    fn ten_words_pass() {
        let verdict = QualityGate::assess("one two three four five six seven eight nine ten");
        assert!(verdict.is_acceptable);
        assert_eq!(verdict.reason, QualityReason::Ok);
    }

    #[test]
    fn keyboard_row_run_fails_regardless_of_word_count() {
        let mut text = "plenty of ordinary words surrounding the suspicious token ".repeat(3);
        text.push_str("QWERTYUIOPQ");
        let verdict = QualityGate::assess(&text);
        assert!(!verdict.is_acceptable);
        assert_eq!(verdict.reason, QualityReason::SuspiciousRepeatedTokens);
    }

    #[test]
    fn digit_flood_is_numeric_noise() {
        let verdict =
            QualityGate::assess("invoice number 12345678901 appears within otherwise fine text");
        assert!(!verdict.is_acceptable);
        assert_eq!(verdict.reason, QualityReason::NumericNoise);
    }

    #[test]
    fn empty_text_is_too_few_words() {
        let verdict = QualityGate::assess("");
        assert!(!verdict.is_acceptable);
        assert_eq!(verdict.reason, QualityReason::TooFewWords);
    }
}
