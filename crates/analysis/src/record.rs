//! The stored unit of knowledge about one document.
//!
//! # Wire format
//!
//! Records serialize with the field names used by the service's HTTP
//! clients:
//!
//! ```json
//! {
//!   "char_count": 25,
//!   "word_count": 4,
//!   "para_count": 2,
//!   "unique_words": 3,
//!   "fingerprint": "4c0b...",
//!   "word_frequency": { "hello": 2, "world": 1, "bye": 1 }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::hash::fingerprint;
use crate::stats::TextStats;

/// Statistics and fingerprint for one analyzed document.
///
/// Immutable once computed. Analyzing identical bytes again yields an equal
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub char_count: usize,
    pub word_count: usize,
    #[serde(rename = "para_count")]
    pub paragraph_count: usize,
    #[serde(rename = "unique_words")]
    pub unique_word_count: usize,
    /// Hex SHA-256 of the raw document bytes. Primary key in the index.
    pub fingerprint: String,
    pub word_frequency: HashMap<String, usize>,
}

impl AnalysisRecord {
    /// Analyze raw document bytes.
    ///
    /// The fingerprint covers the exact bytes. Statistics are taken over a
    /// lossy UTF-8 decoding in which every invalid byte becomes its own
    /// U+FFFD, so a truncated 3-byte sequence counts as two characters.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let text = decode_per_byte(bytes);
        Self::from_parts(fingerprint(bytes), TextStats::extract(&text))
    }

    /// Analyze an already-decoded document. Equivalent to
    /// `from_bytes(text.as_bytes())`.
    pub fn from_text(text: &str) -> Self {
        Self::from_parts(fingerprint(text.as_bytes()), TextStats::extract(text))
    }

    fn from_parts(fingerprint: String, stats: TextStats) -> Self {
        let unique_word_count = stats.unique_word_count();
        Self {
            char_count: stats.char_count,
            word_count: stats.word_count,
            paragraph_count: stats.paragraph_count,
            unique_word_count,
            fingerprint,
            word_frequency: stats.word_frequency,
        }
    }

    /// Occurrences of a normalized token in this document.
    pub fn count_of(&self, token: &str) -> usize {
        self.word_frequency.get(token).copied().unwrap_or(0)
    }

    /// True when the derived counters agree with `word_frequency`.
    ///
    /// Records built by this crate always hold; deserialized ones may not.
    pub fn is_consistent(&self) -> bool {
        self.unique_word_count == self.word_frequency.len()
            && self.word_count == self.word_frequency.values().sum::<usize>()
    }
}

/// UTF-8 decoding with one replacement character per invalid byte.
///
/// `String::from_utf8_lossy` collapses a maximal invalid subsequence into a
/// single U+FFFD instead; here every invalid byte is one character.
fn decode_per_byte(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        text.extend(chunk.invalid().iter().map(|_| char::REPLACEMENT_CHARACTER));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_and_text_agree() {
        let text = "The quick fox\n\njumps.";
        assert_eq!(
            AnalysisRecord::from_bytes(text.as_bytes()),
            AnalysisRecord::from_text(text)
        );
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let record = AnalysisRecord::from_bytes(b"ok \xff\xfe done");
        assert_eq!(record.word_count, 2);
        assert_eq!(record.count_of("ok"), 1);
        assert_eq!(record.count_of("done"), 1);
        // "ok " + two replacement chars + " done"
        assert_eq!(record.char_count, 10);
        assert!(record.is_consistent());
    }

    #[test]
    fn each_invalid_byte_is_one_replacement_char() {
        // Truncated 3-byte and 4-byte sequences: 2 + 3 invalid bytes.
        let record = AnalysisRecord::from_bytes(b"a\xE2\x82b \xF0\x9F\x98");
        assert_eq!(record.char_count, 8);
        assert_eq!(record.word_count, 1);

        let keys: Vec<&str> = record.word_frequency.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a\u{FFFD}\u{FFFD}b"]);
    }

    #[test]
    fn valid_utf8_decodes_unchanged() {
        let text = "caf\u{e9} na\u{ef}ve \u{1F600}";
        assert_eq!(decode_per_byte(text.as_bytes()), text);
        assert_eq!(AnalysisRecord::from_bytes(text.as_bytes()).char_count, 12);
    }

    #[test]
    fn serializes_with_service_field_names() {
        let record = AnalysisRecord::from_text("Hello, hello world!\n\nBye.");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["para_count"], 2);
        assert_eq!(value["unique_words"], 3);
        assert_eq!(value["word_count"], 4);
        assert_eq!(value["char_count"], 25);
        assert_eq!(value["word_frequency"]["hello"], 2);
        assert_eq!(value["fingerprint"], record.fingerprint.as_str());
        assert!(value.get("paragraph_count").is_none());

        let back: AnalysisRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn consistency_check_detects_tampering() {
        let mut record = AnalysisRecord::from_text("a a b");
        assert!(record.is_consistent());
        record.word_count += 1;
        assert!(!record.is_consistent());
    }
}
