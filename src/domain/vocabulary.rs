// ============================================================
// Vocabulary
// ============================================================
// A bidirectional word ↔ index table with per-word counts.
//
// Index layout:
//   0 → <sos>   start of sequence (target side only)
//   1 → <eos>   end of sequence
//   2 → <pad>   padding
//   3.. → corpus words in the order they were first seen
//
// The table only ever grows: there is no removal, no pruning
// by frequency and no re-numbering. `n_words` is the next
// index to hand out and always equals the number of entries.
//
// Words are whatever `split_tokens` yields — a split on single
// spaces, so the same tokens are seen here, by the pair filter
// and by the tensorizer.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::CorpusError;

pub const SOS_TOKEN: &str = "<sos>";
pub const EOS_TOKEN: &str = "<eos>";
pub const PAD_TOKEN: &str = "<pad>";

pub const SOS_INDEX: usize = 0;
pub const EOS_INDEX: usize = 1;
pub const PAD_INDEX: usize = 2;

const RESERVED: [&str; 3] = [SOS_TOKEN, EOS_TOKEN, PAD_TOKEN];

/// Split a sentence into vocabulary tokens (single spaces).
pub fn split_tokens(text: &str) -> std::str::Split<'_, char> {
    text.split(' ')
}

/// Number of tokens `split_tokens` yields for `text`
pub fn token_count(text: &str) -> usize {
    split_tokens(text).count()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VocabularyFile", into = "VocabularyFile")]
pub struct Vocabulary {
    /// Human readable label, e.g. "english"
    name: String,

    word2index: HashMap<String, usize>,

    /// Dense index → word view; position == index
    index2word: Vec<String>,

    /// Occurrences of every corpus word (reserved tokens are not counted)
    word2count: HashMap<String, usize>,

    /// Next index to assign
    n_words: usize,
}

impl Vocabulary {
    /// Create a vocabulary holding only the three reserved tokens
    pub fn new(name: impl Into<String>) -> Self {
        let index2word: Vec<String> = RESERVED.iter().map(|t| t.to_string()).collect();
        let word2index = index2word
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();

        Self {
            name: name.into(),
            word2index,
            index2word,
            word2count: HashMap::new(),
            n_words: RESERVED.len(),
        }
    }

    /// Register every token of a sentence
    pub fn add_sentence(&mut self, sentence: &str) {
        for word in split_tokens(sentence) {
            self.add_word(word);
        }
    }

    /// Assign the next index to an unseen word, or bump its count.
    ///
    /// Reserved tokens keep their fixed index and are never counted.
    pub fn add_word(&mut self, word: &str) {
        if RESERVED.contains(&word) {
            return;
        }

        match self.word2count.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.word2index.insert(word.to_string(), self.n_words);
                self.word2count.insert(word.to_string(), 1);
                self.index2word.push(word.to_string());
                self.n_words += 1;
            }
        }
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.word2index.get(word).copied()
    }

    pub fn word_of(&self, index: usize) -> Option<&str> {
        self.index2word.get(index).map(String::as_str)
    }

    pub fn count_of(&self, word: &str) -> Option<usize> {
        self.word2count.get(word).copied()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total number of entries, reserved tokens included.
    /// A fresh vocabulary already has length 3.
    pub fn len(&self) -> usize {
        self.n_words
    }

    /// True when nothing beyond the reserved tokens has been added.
    /// Never the same as `len() == 0`, which cannot happen.
    pub fn has_no_corpus_words(&self) -> bool {
        self.n_words == RESERVED.len()
    }

    /// Turn indices back into text, skipping the reserved tokens.
    /// Unknown indices are skipped as well.
    pub fn decode(&self, indices: &[usize]) -> String {
        indices
            .iter()
            .filter(|&&i| i >= RESERVED.len())
            .filter_map(|&i| self.word_of(i))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ─── On-disk form ─────────────────────────────────────────────────────────────
// Only the word list (in index order) and the counts are stored;
// the index maps are rebuilt on load, which lets us re-check the
// invariants instead of trusting whatever was in the file.
// Counts are sorted by word so the same vocabulary always
// serialises to the same bytes.
#[derive(Serialize, Deserialize)]
struct VocabularyFile {
    name: String,
    words: Vec<String>,
    counts: BTreeMap<String, usize>,
}

impl From<Vocabulary> for VocabularyFile {
    fn from(v: Vocabulary) -> Self {
        Self {
            name:   v.name,
            words:  v.index2word,
            counts: v.word2count.into_iter().collect(),
        }
    }
}

impl TryFrom<VocabularyFile> for Vocabulary {
    type Error = CorpusError;

    fn try_from(file: VocabularyFile) -> Result<Self, Self::Error> {
        if file.words.len() < RESERVED.len()
            || file.words[..RESERVED.len()] != RESERVED.map(String::from)
        {
            return Err(CorpusError::CorruptVocabulary(
                "reserved tokens must occupy indices 0, 1 and 2".to_string(),
            ));
        }

        let mut word2index = HashMap::with_capacity(file.words.len());
        for (index, word) in file.words.iter().enumerate() {
            if word2index.insert(word.clone(), index).is_some() {
                return Err(CorpusError::CorruptVocabulary(format!(
                    "word '{word}' appears more than once"
                )));
            }
        }

        for word in &file.words[RESERVED.len()..] {
            match file.counts.get(word) {
                Some(&c) if c > 0 => {}
                _ => {
                    return Err(CorpusError::CorruptVocabulary(format!(
                        "word '{word}' has no positive count"
                    )))
                }
            }
        }
        if file.counts.len() != file.words.len() - RESERVED.len() {
            return Err(CorpusError::CorruptVocabulary(
                "counts do not match the word list".to_string(),
            ));
        }

        Ok(Self {
            name:       file.name,
            n_words:    file.words.len(),
            word2index,
            index2word: file.words,
            word2count: file.counts.into_iter().collect(),
        })
    }
}
