use analysis::AnalysisRecord;

use crate::types::MAX_SCORE;

/// Weighted Dice coefficient over word-occurrence multisets, scaled to
/// `[0, 100]`.
///
/// ```text
/// common = sum over shared tokens t of min(a.count(t), b.count(t))
/// score  = 2 * common / (a.word_count + b.word_count) * 100
/// ```
///
/// Two documents without any words score `0`. The score is `100` only when
/// both multisets are equal. Symmetric in its arguments.
pub fn similarity(a: &AnalysisRecord, b: &AnalysisRecord) -> f64 {
    let total = a.word_count + b.word_count;
    if total == 0 {
        return 0.0;
    }

    let common = common_occurrences(a, b);
    // Clamp only matters for hand-built records whose counters disagree.
    ((2 * common) as f64 / total as f64 * MAX_SCORE).min(MAX_SCORE)
}

/// Shared token occurrences between two records (multiset intersection size).
pub fn common_occurrences(a: &AnalysisRecord, b: &AnalysisRecord) -> usize {
    let (small, large) = if a.word_frequency.len() <= b.word_frequency.len() {
        (&a.word_frequency, &b.word_frequency)
    } else {
        (&b.word_frequency, &a.word_frequency)
    };

    small
        .iter()
        .filter_map(|(token, &count)| large.get(token).map(|&other| count.min(other)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(text: &str) -> AnalysisRecord {
        AnalysisRecord::from_text(text)
    }

    #[test]
    fn identical_documents_score_exactly_100() {
        let a = rec("The quick fox");
        let b = rec("The quick fox");
        assert_eq!(similarity(&a, &b), 100.0);
    }

    #[test]
    fn same_words_different_punctuation_score_100() {
        assert_eq!(similarity(&rec("The quick fox."), &rec("the QUICK, fox")), 100.0);
    }

    #[test]
    fn disjoint_vocabulary_scores_0() {
        assert_eq!(similarity(&rec("alpha beta"), &rec("gamma delta")), 0.0);
    }

    #[test]
    fn both_empty_scores_0() {
        assert_eq!(similarity(&rec(""), &rec("  ...  ")), 0.0);
    }

    #[test]
    fn partial_overlap_uses_min_counts() {
        // common = min(2,1) for "a" + min(1,1) for "b" = 2; total = 3 + 3.
        let a = rec("a a b");
        let b = rec("a b c");
        assert_eq!(common_occurrences(&a, &b), 2);
        let score = similarity(&a, &b);
        assert!((score - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn subset_is_not_a_duplicate() {
        let score = similarity(&rec("one two"), &rec("one two three"));
        assert!(score < 100.0);
        assert!((score - 80.0).abs() < 1e-9);
    }

    #[test]
    fn symmetric_and_bounded() {
        let docs = [
            "",
            "a",
            "a a a",
            "a b c d",
            "the cat sat on the mat",
            "the mat sat on the cat!",
            "Привет мир привет",
        ];
        for x in docs {
            for y in docs {
                let (a, b) = (rec(x), rec(y));
                let ab = similarity(&a, &b);
                assert_eq!(ab, similarity(&b, &a), "{x:?} vs {y:?}");
                assert!((0.0..=100.0).contains(&ab), "{x:?} vs {y:?} = {ab}");
            }
        }
    }
}
