//! Per-page and document-wide text statistics.

use super::types::{DocumentStatistics, PageStatistic};

pub struct StatisticsAggregator;

impl StatisticsAggregator {
    /// Word count is whitespace tokenization of the trimmed text (0 for a
    /// blank page); character count is the raw, untrimmed length. Totals are
    /// the sums over all pages.
    pub fn aggregate(page_texts: &[String]) -> DocumentStatistics {
        let mut total_words = 0;
        let mut total_characters = 0;
        let mut page_stats = Vec::with_capacity(page_texts.len());

        for (index, text) in page_texts.iter().enumerate() {
            let words = if text.trim().is_empty() {
                0
            } else {
                text.split_whitespace().count()
            };
            let characters = text.chars().count();

            total_words += words;
            total_characters += characters;
            page_stats.push(PageStatistic {
                page: index + 1,
                words,
                characters,
            });
        }

        DocumentStatistics {
            total_words,
            total_characters,
            page_stats,
        }
    }
}
