// ============================================================
// Corpus Loader
// ============================================================
// Reads the two Cornell corpus files.
//
// Both files:
//   - are ISO-8859-1 (Latin-1) encoded, so every byte maps
//     straight to the Unicode code point with the same value
//   - hold one record per line
//   - separate fields with the literal ` +++$+++ `
//
// movie_lines.txt has exactly 5 fields per record:
//   L1045 +++$+++ u0 +++$+++ m0 +++$+++ BIANCA +++$+++ They do not!
//   ^ id                                               ^ text
// Records with any other field count are skipped and only
// counted in the debug log.
//
// movie_conversations.txt keeps the ids of one conversation in
// its LAST field, as a list literal parsed by `list_literal`.
// A broken list is fatal: the conversation structure would be
// silently wrong otherwise.
//
// Each file is read whole, once, then parsed from memory.
// Records end at `\n` (an optional `\r` before it is dropped).
// A lone `\r` is NOT a record separator, so old Mac-style files
// come through as one long record; the Cornell files use `\n`.
// The text after the final `\n` is a record only if non-empty,
// so a trailing newline never produces an extra blank record.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::list_literal::parse_string_list;
use crate::domain::sentence_pair::{Conversation, LineMap};
use crate::domain::traits::CorpusSource;
use crate::error::{CorpusError, Result};

/// Field separator used by both corpus files
pub const DELIM: &str = " +++$+++ ";

const LINE_FIELDS: usize = 5;
const ID_FIELD: usize = 0;
const TEXT_FIELD: usize = 4;

/// Loads line records and conversations from the Cornell files.
/// Implements the CorpusSource trait from the domain layer.
#[derive(Debug, Clone)]
pub struct CornellLoader {
    lines_path:         PathBuf,
    conversations_path: PathBuf,
}

impl CornellLoader {
    pub fn new(lines_path: impl Into<PathBuf>, conversations_path: impl Into<PathBuf>) -> Self {
        Self {
            lines_path:         lines_path.into(),
            conversations_path: conversations_path.into(),
        }
    }
}

impl CorpusSource for CornellLoader {
    fn load_lines(&self) -> Result<LineMap> {
        tracing::info!("Collecting line ids from '{}'", self.lines_path.display());
        read_lines(&self.lines_path)
    }

    fn load_conversations(&self) -> Result<Vec<Conversation>> {
        tracing::info!(
            "Collecting conversations from '{}'",
            self.conversations_path.display()
        );
        read_conversations(&self.conversations_path)
    }
}

/// Read the lines file into id → text
pub fn read_lines(path: impl AsRef<Path>) -> Result<LineMap> {
    let bytes = read_file(path.as_ref())?;
    Ok(parse_lines(&bytes))
}

/// Read the conversations file into ordered id lists
pub fn read_conversations(path: impl AsRef<Path>) -> Result<Vec<Conversation>> {
    let bytes = read_file(path.as_ref())?;
    parse_conversations(&bytes)
}

/// Parse the raw bytes of a lines file.
///
/// Never fails: malformed records are skipped. When an id occurs
/// twice the later record wins.
pub fn parse_lines(bytes: &[u8]) -> LineMap {
    let mut id2line = LineMap::new();
    let mut skipped = 0usize;

    for record in records(bytes) {
        let fields: Vec<&str> = record.split(DELIM).collect();
        if fields.len() != LINE_FIELDS {
            // The trailing newline of the file yields one empty record
            if !record.is_empty() {
                skipped += 1;
            }
            continue;
        }
        id2line.insert(fields[ID_FIELD].to_string(), fields[TEXT_FIELD].to_string());
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} malformed line records", skipped);
    }
    tracing::debug!("Parsed {} line records", id2line.len());
    id2line
}

/// Parse the raw bytes of a conversations file.
///
/// Any record whose last field is not a valid list literal aborts
/// with `CorpusError::Parse`, blank records included.
pub fn parse_conversations(bytes: &[u8]) -> Result<Vec<Conversation>> {
    let mut conversations = Vec::new();

    for (n, record) in records(bytes).enumerate() {
        // rsplit always yields at least one field
        let ids_field = record.rsplit(DELIM).next().unwrap_or_default();
        let ids = parse_string_list(ids_field).map_err(|e| CorpusError::Parse {
            record: n + 1,
            reason: e.to_string(),
        })?;
        conversations.push(ids);
    }

    tracing::debug!("Parsed {} conversations", conversations.len());
    Ok(conversations)
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| CorpusError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Split raw file bytes into Latin-1 decoded records without their
/// line terminators (`\n` or `\r\n`).
fn records(bytes: &[u8]) -> impl Iterator<Item = String> + '_ {
    // split_inclusive yields nothing after a final `\n`
    bytes
        .split_inclusive(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\n").unwrap_or(line))
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .map(|line| line.iter().map(|&b| char::from(b)).collect())
}
