// ============================================================
// Core Traits (Abstractions)
// ============================================================
// The application layer only talks to these traits, so the
// Cornell file reader could be replaced by any other source
// of dialogue (an in-memory fixture, a different corpus
// layout) without touching the pipeline.

use crate::domain::sentence_pair::{Conversation, LineMap};
use crate::error::Result;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Anything that can supply line records and conversations.
///
/// Implementations:
///   - CornellLoader → the two ` +++$+++ ` delimited files on disk
pub trait CorpusSource {
    /// Load every well-formed line record as id → text.
    fn load_lines(&self) -> Result<LineMap>;

    /// Load every conversation as an ordered list of line ids.
    fn load_conversations(&self) -> Result<Vec<Conversation>>;
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved and restored from disk.
///
/// Implementations:
///   - Vocabulary → JSON word list plus counts
pub trait Persistable: Sized {
    /// Save this component's state to the given path
    fn save(&self, path: &str) -> anyhow::Result<()>;

    /// Load a component's state from the given path.
    fn load(path: &str) -> anyhow::Result<Self>;
}
