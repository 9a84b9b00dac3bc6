//! Document analysis layer.
//!
//! Turns raw document bytes into an [`AnalysisRecord`]: a content fingerprint
//! plus character, word and paragraph counts and a word-frequency table.
//!
//! ## What we do
//!
//! - Fingerprint the exact input bytes with SHA-256 (hex encoded)
//! - Decode as UTF-8 (lossy) and count Unicode scalar values
//! - Count paragraphs by scanning for blank-line separators
//! - Split on whitespace, trim non-alphanumeric edges, lowercase, count
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock, no locale. Same bytes in, same record out, on any
//! machine.
//!
//! ```rust
//! use analysis::AnalysisRecord;
//!
//! let record = AnalysisRecord::from_bytes(b"Hello, hello world!\n\nBye.");
//! assert_eq!(record.word_count, 4);
//! assert_eq!(record.unique_word_count, 3);
//! assert_eq!(record.paragraph_count, 2);
//! assert_eq!(record.word_frequency["hello"], 2);
//! ```

mod hash;
mod record;
mod stats;
mod token;

pub use crate::hash::fingerprint;
pub use crate::record::AnalysisRecord;
pub use crate::stats::{count_paragraphs, TextStats, PARAGRAPH_SEPARATOR};
pub use crate::token::{normalize_token, tokenize};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document() {
        let record = AnalysisRecord::from_bytes(b"");
        assert_eq!(record.char_count, 0);
        assert_eq!(record.word_count, 0);
        assert_eq!(record.unique_word_count, 0);
        assert_eq!(record.paragraph_count, 0);
        assert!(record.word_frequency.is_empty());
        assert_eq!(record.fingerprint.len(), 64);
    }

    #[test]
    fn reanalysis_is_identical() {
        let bytes = "The quick fox".as_bytes();
        assert_eq!(
            AnalysisRecord::from_bytes(bytes),
            AnalysisRecord::from_bytes(bytes)
        );
    }

    #[test]
    fn whitespace_change_changes_fingerprint_not_words() {
        let a = AnalysisRecord::from_text("alpha beta");
        let b = AnalysisRecord::from_text("alpha  beta");
        assert_ne!(a.fingerprint, b.fingerprint);
        assert_eq!(a.word_frequency, b.word_frequency);
    }
}
