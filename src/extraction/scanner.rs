//! Byte-pattern scanning over raw document content.
//!
//! PDF files interleave readable structural markers with binary stream data.
//! The scanner decodes the whole byte sequence as Latin-1 (one byte maps to
//! exactly one character) so marker offsets are never shifted by multi-byte
//! decoding, then exposes ordered span searches on top of that view.

use regex::Regex;

/// Read-only pattern search over one document's bytes.
///
/// Stateless across calls; every search restarts from the beginning of the
/// document. Searches have no failure mode beyond "no match".
pub struct DocumentScanner {
    text: String,
}

impl DocumentScanner {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            text: bytes.iter().map(|&b| b as char).collect(),
        }
    }

    /// The Latin-1 decoded view of the document.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Iterate the content of non-overlapping `begin`..`end` delimited blocks,
    /// in document order. Lazy; a block without a closing marker ends the
    /// iteration.
    pub fn blocks<'a>(&'a self, begin: &'a str, end: &'a str) -> BlockIter<'a> {
        BlockIter {
            haystack: &self.text,
            begin,
            end,
            pos: 0,
        }
    }

    /// First capture group of `pattern`, if the pattern matches anywhere.
    pub fn first_group(&self, pattern: &Regex) -> Option<String> {
        pattern
            .captures(&self.text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Runs of printable characters at least `min_len` long.
    pub fn readable_runs(&self, min_len: usize) -> Vec<&str> {
        readable_runs(&self.text, min_len)
    }

    /// Number of non-overlapping matches of `pattern` in the document.
    pub fn count_matches(&self, pattern: &Regex) -> usize {
        pattern.find_iter(&self.text).count()
    }

    /// Whether any of `needles` occurs in the document.
    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.text.contains(needle))
    }
}

/// Iterator over delimited block contents. See [`DocumentScanner::blocks`].
pub struct BlockIter<'a> {
    haystack: &'a str,
    begin: &'a str,
    end: &'a str,
    pos: usize,
}

impl<'a> Iterator for BlockIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rel_begin = self.haystack[self.pos..].find(self.begin)?;
        let start = self.pos + rel_begin + self.begin.len();
        let rel_end = self.haystack[start..].find(self.end)?;
        let content = &self.haystack[start..start + rel_end];
        self.pos = start + rel_end + self.end.len();
        Some(content)
    }
}

/// Extract runs of printable text from a (possibly binary) string slice.
///
/// A run starts at a letter and continues through letters, digits, whitespace
/// and common punctuation. Runs shorter than `min_len` characters are dropped,
/// as is anything that trims down to nothing.
pub(crate) fn readable_runs(text: &str, min_len: usize) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    let mut len = 0usize;
    let mut end = 0usize;

    for (idx, ch) in text.char_indices() {
        let printable = ch.is_ascii_alphanumeric()
            || ch.is_ascii_whitespace()
            || ".,!?;:'\"()-".contains(ch);
        match start {
            None => {
                if ch.is_ascii_alphabetic() {
                    start = Some(idx);
                    len = 1;
                }
            }
            Some(s) => {
                if printable {
                    len += 1;
                } else {
                    if len >= min_len {
                        runs.push(text[s..idx].trim());
                    }
                    start = None;
                }
            }
        }
        end = idx + ch.len_utf8();
    }
    if let Some(s) = start {
        if len >= min_len {
            runs.push(text[s..end].trim());
        }
    }

    runs.retain(|run| !run.is_empty());
    runs
}
