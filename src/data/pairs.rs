// ============================================================
// Pair Extractor
// ============================================================
// Turns conversations into (question, answer) pairs by reading
// the turns two at a time:
//
//   [L1, L2, L3, L4, L5]
//    q   a   q   a   ─ dropped (no reply)
//
// The i-th question is paired with the i-th answer. A line id
// that is not in the line map means the two corpus files do not
// belong together, so the whole extraction fails.

use crate::domain::sentence_pair::{Conversation, LineMap, SentencePair};
use crate::error::{CorpusError, Result};

/// Build question/answer pairs from every conversation, in order.
pub fn extract_pairs(id2text: &LineMap, conversations: &[Conversation]) -> Result<Vec<SentencePair>> {
    let lookup = |id: &String| {
        id2text
            .get(id)
            .cloned()
            .ok_or_else(|| CorpusError::KeyNotFound(id.clone()))
    };

    let mut pairs = Vec::new();
    for conversation in conversations {
        // chunks_exact leaves the unmatched last turn of an odd conversation out
        for turn in conversation.chunks_exact(2) {
            pairs.push(SentencePair::new(lookup(&turn[0])?, lookup(&turn[1])?));
        }
    }

    tracing::debug!(
        "Extracted {} pairs from {} conversations",
        pairs.len(),
        conversations.len()
    );
    Ok(pairs)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn line_map(entries: &[(&str, &str)]) -> LineMap {
        entries
            .iter()
            .map(|(id, text)| (id.to_string(), text.to_string()))
            .collect()
    }

    fn conv(ids: &[&str]) -> Conversation {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_exchange() {
        let lines = line_map(&[("L1", "hello there"), ("L2", "hi")]);
        let pairs = extract_pairs(&lines, &[conv(&["L1", "L2"])]).unwrap();
        assert_eq!(pairs, vec![SentencePair::new("hello there", "hi")]);
    }

    #[test]
    fn test_odd_conversation_drops_last_turn() {
        let lines = line_map(&[("L1", "a"), ("L2", "b"), ("L3", "c")]);
        let pairs = extract_pairs(&lines, &[conv(&["L1", "L2", "L3"])]).unwrap();
        assert_eq!(pairs, vec![SentencePair::new("a", "b")]);
    }

    #[test]
    fn test_odd_conversation_does_not_look_up_dropped_id() {
        // L9 is missing, but as the trailing turn it is never paired
        let lines = line_map(&[("L1", "a"), ("L2", "b")]);
        let pairs = extract_pairs(&lines, &[conv(&["L1", "L2", "L9"])]).unwrap();
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_pairs_follow_turn_order() {
        let lines = line_map(&[("L1", "a"), ("L2", "b"), ("L3", "c"), ("L4", "d")]);
        let convs = [conv(&["L1", "L2", "L3", "L4"]), conv(&["L4", "L1"])];
        let pairs = extract_pairs(&lines, &convs).unwrap();
        assert_eq!(
            pairs,
            vec![
                SentencePair::new("a", "b"),
                SentencePair::new("c", "d"),
                SentencePair::new("d", "a"),
            ]
        );
    }

    #[test]
    fn test_single_turn_and_empty_conversations() {
        let lines = line_map(&[("L1", "a")]);
        let pairs = extract_pairs(&lines, &[conv(&["L1"]), conv(&[])]).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_pairs_from_corpus_text() {
        use crate::data::loader::{parse_conversations, parse_lines};

        let lines = parse_lines(
            b"L1 +++$+++ u1 +++$+++ m1 +++$+++ A +++$+++ hello there\n\
              L2 +++$+++ u2 +++$+++ m1 +++$+++ B +++$+++ hi\n",
        );
        let convs = parse_conversations(b"u1 +++$+++ u2 +++$+++ m1 +++$+++ ['L1','L2']\n").unwrap();

        let pairs = extract_pairs(&lines, &convs).unwrap();
        assert_eq!(pairs, vec![SentencePair::new("hello there", "hi")]);
    }

    #[test]
    fn test_missing_id_is_fatal() {
        let lines = line_map(&[("L1", "a")]);
        let err = extract_pairs(&lines, &[conv(&["L1", "L2"])]).unwrap_err();
        assert!(matches!(err, CorpusError::KeyNotFound(id) if id == "L2"));
    }
}
