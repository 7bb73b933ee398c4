// ============================================================
// Tensorizer
// ============================================================
// Converts one sentence into a sequence of vocabulary indices.
//
//   encode(side, vocab, "how are you", 6)
//
//   tokens      how are you
//   indices      7   8   9
//   + <eos>      7   8   9   1
//   + <pad>      7   8   9   1   2   2          (length 6)
//   Target only  0   7   8   9   1   2   2      (<sos> in front)
//
// Two quirks are part of the contract:
//   - If tokens + <eos> already fill `target_length` exactly,
//     the sequence is returned untouched — no padding AND no
//     <sos>, even on the target side.
//   - Nothing is ever truncated. A sentence longer than
//     `target_length` comes back longer.
//
// So on the target side the result is target_length + 1 long
// whenever padding happened; callers size the target side one
// shorter than the width they want.

use crate::domain::sentence_pair::SentencePair;
use crate::domain::vocabulary::{split_tokens, Vocabulary, EOS_INDEX, PAD_INDEX, SOS_INDEX};
use crate::error::{CorpusError, Result};

/// Which half of a pair a sequence belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Encoder input (the question)
    Source,
    /// Decoder input/output (the answer), prefixed with <sos>
    Target,
}

/// Encode `text` into indices padded towards `target_length`.
pub fn encode(
    side:          Side,
    vocabulary:    &Vocabulary,
    text:          &str,
    target_length: usize,
) -> Result<Vec<usize>> {
    let mut indices = split_tokens(text)
        .map(|word| {
            vocabulary
                .index_of(word)
                .ok_or_else(|| CorpusError::WordNotFound(word.to_string()))
        })
        .collect::<Result<Vec<usize>>>()?;

    indices.push(EOS_INDEX);

    // Exact fit: returned as-is, <sos> is NOT added
    if indices.len() == target_length {
        return Ok(indices);
    }

    if indices.len() < target_length {
        indices.resize(target_length, PAD_INDEX);
    }

    if side == Side::Target {
        indices.insert(0, SOS_INDEX);
    }

    Ok(indices)
}

/// Encode both halves of a pair: question as Source, answer as Target.
pub fn encode_pair(
    vocabulary:    &Vocabulary,
    pair:          &SentencePair,
    source_length: usize,
    target_length: usize,
) -> Result<(Vec<usize>, Vec<usize>)> {
    let source = encode(Side::Source, vocabulary, &pair.question, source_length)?;
    let target = encode(Side::Target, vocabulary, &pair.answer, target_length)?;
    Ok((source, target))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        let mut v = Vocabulary::new("english");
        v.add_sentence("how are you");
        v.add_sentence("fine");
        v
    }

    #[test]
    fn test_source_is_padded() {
        let seq = encode(Side::Source, &vocab(), "how are you", 6).unwrap();
        assert_eq!(seq, vec![3, 4, 5, EOS_INDEX, PAD_INDEX, PAD_INDEX]);
    }

    #[test]
    fn test_target_gets_sos_after_padding() {
        let seq = encode(Side::Target, &vocab(), "how are you", 6).unwrap();
        assert_eq!(seq, vec![SOS_INDEX, 3, 4, 5, EOS_INDEX, PAD_INDEX, PAD_INDEX]);
        assert_eq!(seq.len(), 7);
    }

    #[test]
    fn test_exact_fit_skips_sos() {
        // 3 tokens + <eos> == 4
        let seq = encode(Side::Target, &vocab(), "how are you", 4).unwrap();
        assert_eq!(seq, vec![3, 4, 5, EOS_INDEX]);
    }

    #[test]
    fn test_target_length_law() {
        let v = vocab();
        for target_length in 1..8 {
            let seq = encode(Side::Target, &v, "fine", target_length).unwrap();
            let tokens_plus_eos = 2;
            if tokens_plus_eos < target_length {
                assert_eq!(seq.len(), target_length + 1);
            } else if tokens_plus_eos == target_length {
                assert_eq!(seq.len(), target_length);
            }
        }
    }

    #[test]
    fn test_no_truncation() {
        let seq = encode(Side::Source, &vocab(), "how are you", 2).unwrap();
        assert_eq!(seq, vec![3, 4, 5, EOS_INDEX]);

        let seq = encode(Side::Target, &vocab(), "how are you", 2).unwrap();
        assert_eq!(seq, vec![SOS_INDEX, 3, 4, 5, EOS_INDEX]);
    }

    #[test]
    fn test_unknown_word_is_fatal() {
        let err = encode(Side::Source, &vocab(), "how is you", 6).unwrap_err();
        assert!(matches!(err, CorpusError::WordNotFound(w) if w == "is"));
    }

    #[test]
    fn test_encode_pair_sides() {
        let pair = SentencePair::new("how are you", "fine");
        let (src, trg) = encode_pair(&vocab(), &pair, 4, 3).unwrap();
        assert_eq!(src, vec![3, 4, 5, EOS_INDEX]);
        assert_eq!(trg, vec![SOS_INDEX, 6, EOS_INDEX, PAD_INDEX]);
    }
}
