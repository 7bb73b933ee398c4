// ============================================================
// Corpus Errors
// ============================================================
// Every fatal condition the preparation pipeline can hit.
//
// Malformed records in the lines file are NOT errors — they are
// skipped while reading and only show up in the debug log.
// Everything listed here aborts the current preparation call.
//
// The application and CLI layers wrap these in anyhow::Error
// with extra context; library code returns them directly so
// callers can match on the variant.

use thiserror::Error;

/// Result alias used throughout the library layers
pub type Result<T> = std::result::Result<T, CorpusError>;

#[derive(Debug, Error)]
pub enum CorpusError {
    /// A corpus file could not be opened or read
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The conversations field of a record is not a valid list literal
    #[error("record {record}: invalid conversation list: {reason}")]
    Parse { record: usize, reason: String },

    /// A conversation references a line id missing from the lines file
    #[error("line id '{0}' is referenced by a conversation but was never loaded")]
    KeyNotFound(String),

    /// A sentence contains a word the vocabulary has never seen
    #[error("word '{0}' is not in the vocabulary")]
    WordNotFound(String),

    /// A numeric setting is out of range (zero batch size, zero max length, ...)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A persisted vocabulary violates the index/count invariants
    #[error("corrupt vocabulary: {0}")]
    CorruptVocabulary(String),
}
