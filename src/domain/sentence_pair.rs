// ============================================================
// Corpus Domain Types
// ============================================================
// The Cornell corpus is two flat files:
//
//   movie_lines.txt          L1045 +++$+++ u0 +++$+++ m0 +++$+++ BIANCA +++$+++ They do not!
//   movie_conversations.txt  u0 +++$+++ u2 +++$+++ m0 +++$+++ ['L194', 'L195', 'L196']
//
// After loading we hold:
//   LineMap       — line id → dialogue text
//   Conversation  — ordered line ids of one exchange
//
// and the pair extractor turns conversations into SentencePairs:
//
//   ['L194', 'L195', 'L196', 'L197']
//       → (text(L194), text(L195)), (text(L196), text(L197))

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier of one utterance, e.g. "L1045"
pub type LineId = String;

/// Line id → dialogue text, built once from the lines file
pub type LineMap = HashMap<LineId, String>;

/// The line ids of one conversation, in speaking order
pub type Conversation = Vec<LineId>;

/// One (question, answer) training example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePair {
    /// The utterance the model sees as input (source side)
    pub question: String,

    /// The reply the model should produce (target side)
    pub answer: String,
}

impl SentencePair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer:   answer.into(),
        }
    }

    /// Apply the same text transform to both sides
    pub fn map(self, f: impl Fn(&str) -> String) -> Self {
        Self {
            question: f(&self.question),
            answer:   f(&self.answer),
        }
    }
}

impl<Q: Into<String>, A: Into<String>> From<(Q, A)> for SentencePair {
    fn from((question, answer): (Q, A)) -> Self {
        Self::new(question, answer)
    }
}
