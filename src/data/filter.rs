// ============================================================
// Pair Filter
// ============================================================
// Keeps only pairs where BOTH sides have fewer than
// `max_length` tokens. Tokens are counted exactly as the
// vocabulary splits them (single spaces).

use crate::domain::sentence_pair::SentencePair;
use crate::domain::vocabulary::token_count;

/// True iff both sides are strictly shorter than `max_length`
pub fn keep(pair: &SentencePair, max_length: usize) -> bool {
    token_count(&pair.question) < max_length && token_count(&pair.answer) < max_length
}

/// Drop every pair `keep` rejects, preserving the order of the rest.
pub fn filter_pairs(pairs: Vec<SentencePair>, max_length: usize) -> Vec<SentencePair> {
    let before = pairs.len();
    let kept: Vec<SentencePair> = pairs.into_iter().filter(|p| keep(p, max_length)).collect();

    tracing::debug!(
        "Length filter (< {} tokens): kept {} of {} pairs",
        max_length,
        kept.len(),
        before
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_less_than() {
        let pair = SentencePair::new("a b c", "d");
        assert!(keep(&pair, 4));
        assert!(!keep(&pair, 3));
    }

    #[test]
    fn test_both_sides_checked() {
        assert!(!keep(&SentencePair::new("a", "b c d e"), 3));
        assert!(!keep(&SentencePair::new("b c d e", "a"), 3));
    }

    #[test]
    fn test_filter_preserves_order() {
        let pairs = vec![
            SentencePair::new("one", "two"),
            SentencePair::new("this one is far too long", "x"),
            SentencePair::new("three", "four"),
        ];
        let kept = filter_pairs(pairs, 3);
        assert_eq!(
            kept,
            vec![SentencePair::new("one", "two"), SentencePair::new("three", "four")]
        );
    }

    #[test]
    fn test_zero_max_length_rejects_everything() {
        // even "" counts as one token
        assert!(!keep(&SentencePair::new("", ""), 0));
        assert!(!keep(&SentencePair::new("", ""), 1));
        assert!(keep(&SentencePair::new("", ""), 2));
    }
}
