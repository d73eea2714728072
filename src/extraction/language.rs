//! Lightweight statistical language identification.
//!
//! Each supported language carries a stopword profile: a set of very common
//! short words plus one word-boundary pattern over the same set. Scoring is
//! cheap on purpose; this is a per-page heuristic, not a full classifier.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::LanguageVerdict;

/// Tokens considered per page.
const MAX_TOKENS: usize = 200;

/// Scores are capped below certainty.
const CONFIDENCE_CAP: f64 = 0.95;

/// Below this the winner is discarded for the English floor verdict.
const CONFIDENCE_FLOOR: f64 = 0.3;

struct LanguageProfile {
    code: &'static str,
    stopwords: &'static [&'static str],
    pattern: Regex,
}

fn profile(code: &'static str, stopwords: &'static [&'static str], pattern: &str) -> LanguageProfile {
    LanguageProfile {
        code,
        stopwords,
        pattern: Regex::new(pattern).unwrap(),
    }
}

static PROFILES: Lazy<Vec<LanguageProfile>> = Lazy::new(|| {
    vec![
        profile(
            "en",
            &[
                "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
                "from", "this", "that", "is", "are", "was", "were",
            ],
            r"(?i)\b(the|and|or|but|in|on|at|to|for|of|with|by)\b",
        ),
        profile(
            "es",
            &[
                "el", "la", "y", "o", "pero", "en", "con", "de", "para", "por", "que", "es",
                "un", "una", "los", "las",
            ],
            r"(?i)\b(el|la|y|o|pero|en|con|de|para|por|que|es)\b",
        ),
        profile(
            "fr",
            &[
                "le", "la", "et", "ou", "mais", "dans", "sur", "à", "pour", "de", "avec", "par",
                "un", "une", "les", "des",
            ],
            r"(?i)\b(le|la|et|ou|mais|dans|sur|à|pour|de|avec|par)\b",
        ),
        profile(
            "de",
            &[
                "der", "die", "das", "und", "oder", "aber", "in", "auf", "zu", "für", "von",
                "mit", "ein", "eine", "den", "dem",
            ],
            r"(?i)\b(der|die|das|und|oder|aber|in|auf|zu|für|von|mit)\b",
        ),
        profile(
            "it",
            &[
                "il", "la", "e", "o", "ma", "in", "su", "a", "per", "di", "con", "da", "un",
                "una", "gli", "le",
            ],
            r"(?i)\b(il|la|e|o|ma|in|su|a|per|di|con|da)\b",
        ),
        profile(
            "pt",
            &[
                "o", "a", "e", "ou", "mas", "em", "sobre", "para", "de", "com", "por", "um",
                "uma", "os", "as",
            ],
            r"(?i)\b(o|a|e|ou|mas|em|sobre|para|de|com|por)\b",
        ),
    ]
});

/// Per-page language scorer.
pub struct LanguageIdentifier;

impl LanguageIdentifier {
    /// Score `text` against every profile and return the winner.
    ///
    /// Returns `None` for text that trims to nothing; blank pages carry no
    /// verdict. A winner below the confidence floor is replaced with an
    /// English verdict at 0.5 so no page is ever reported at near-zero
    /// confidence.
    pub fn identify(text: &str) -> Option<LanguageVerdict> {
        if text.trim().is_empty() {
            return None;
        }

        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().take(MAX_TOKENS).collect();

        let mut best: Option<LanguageVerdict> = None;
        for profile in PROFILES.iter() {
            let hits = tokens
                .iter()
                .filter(|token| profile.stopwords.contains(*token))
                .count();
            let denom = tokens.len().min(profile.stopwords.len()).max(1);
            let mut score = hits as f64 / denom as f64;
            score += profile.pattern.find_iter(text).count() as f64 / 100.0;

            let confidence = score.min(CONFIDENCE_CAP);
            // Strictly greater keeps the first profile on ties
            let better = match &best {
                None => true,
                Some(current) => confidence > current.confidence,
            };
            if better {
                best = Some(LanguageVerdict {
                    language: profile.code.to_string(),
                    confidence,
                });
            }
        }

        let verdict = best?;
        if verdict.confidence < CONFIDENCE_FLOOR {
            return Some(LanguageVerdict {
                language: "en".to_string(),
                confidence: 0.5,
            });
        }
        Some(verdict)
    }
}
