use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::token::tokenize;

/// Blank-line paragraph separator.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Deterministic statistics for one decoded document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Unicode scalar values, whitespace included.
    pub char_count: usize,
    /// Tokens that survived normalization.
    pub word_count: usize,
    /// `0` for blank text, otherwise separators + 1.
    pub paragraph_count: usize,
    /// Occurrences per normalized token.
    pub word_frequency: HashMap<String, usize>,
}

impl TextStats {
    /// Tokenize and count `text`.
    ///
    /// Pure and locale-independent: only Unicode whitespace, alphabetic and
    /// numeric classification is consulted.
    pub fn extract(text: &str) -> Self {
        let mut word_frequency: HashMap<String, usize> = HashMap::new();
        let mut word_count = 0;
        for token in tokenize(text) {
            word_count += 1;
            *word_frequency.entry(token).or_insert(0) += 1;
        }

        Self {
            char_count: text.chars().count(),
            word_count,
            paragraph_count: count_paragraphs(text),
            word_frequency,
        }
    }

    /// Number of distinct normalized tokens.
    pub fn unique_word_count(&self) -> usize {
        self.word_frequency.len()
    }
}

/// Count paragraphs by scanning for raw `"\n\n"` separators.
///
/// Separators are counted without overlap, so `"\n\n\n"` is one separator.
/// `"\r\n\r\n"` contains no separator; line endings are not normalized.
pub fn count_paragraphs(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    text.matches(PARAGRAPH_SEPARATOR).count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sample_document() {
        let stats = TextStats::extract("Hello, hello world!\n\nBye.");
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.unique_word_count(), 3);
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.char_count, 25);
        assert_eq!(stats.word_frequency.get("hello"), Some(&2));
        assert_eq!(stats.word_frequency.get("world"), Some(&1));
        assert_eq!(stats.word_frequency.get("bye"), Some(&1));
    }

    #[test]
    fn empty_text_is_all_zero() {
        let stats = TextStats::extract("");
        assert_eq!(stats, TextStats::default());
    }

    #[test]
    fn whitespace_only_counts_chars_only() {
        let stats = TextStats::extract(" \n\n\t\n\n ");
        assert_eq!(stats.char_count, 7);
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.unique_word_count(), 0);
        assert_eq!(stats.paragraph_count, 0);
    }

    #[test]
    fn punctuation_only_document_has_one_paragraph_and_no_words() {
        let stats = TextStats::extract("... !!! ---");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.paragraph_count, 1);
    }

    #[test]
    fn multibyte_chars_count_once() {
        let stats = TextStats::extract("naïve 日本語 \u{1f600}");
        assert_eq!(stats.char_count, 11);
        assert_eq!(stats.word_count, 2);
    }

    #[test]
    fn paragraph_separators_do_not_overlap() {
        assert_eq!(count_paragraphs("a\n\n\nb"), 2);
        assert_eq!(count_paragraphs("a\n\n\n\nb"), 3);
        assert_eq!(count_paragraphs("a\r\n\r\nb"), 1);
        assert_eq!(count_paragraphs("single line"), 1);
        assert_eq!(count_paragraphs("trailing\n\n"), 2);
    }

    #[test]
    fn word_count_matches_frequency_sum() {
        let stats = TextStats::extract("a b a c, A! b? (c) d");
        let total: usize = stats.word_frequency.values().sum();
        assert_eq!(stats.word_count, total);
        assert_eq!(stats.word_frequency.get("a"), Some(&3));
    }
}
