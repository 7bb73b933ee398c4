// ============================================================
// Infrastructure — Artifact Store
// ============================================================
// Writes the outputs of a preparation run into one directory:
//
//   artifacts/
//     prepare_config.json   ← the settings used for this run
//     pairs.json            ← filtered question/answer pairs
//     vocabulary.json       ← word list (index order) + counts
//     batches.csv           ← per-batch shapes (see report.rs)
//
// The vocabulary must be the SAME one at training and at
// inference time, otherwise indices mean different words —
// so it is saved and reloaded rather than rebuilt.

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::application::prepare_use_case::PrepareConfig;
use crate::domain::sentence_pair::SentencePair;
use crate::domain::traits::Persistable;
use crate::domain::vocabulary::Vocabulary;

const CONFIG_FILE: &str = "prepare_config.json";
const PAIRS_FILE: &str = "pairs.json";
const VOCABULARY_FILE: &str = "vocabulary.json";

/// Manages the files produced by a run.
/// All files are stored in the configured directory.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Create the store, creating the directory (like `mkdir -p`).
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn save_config(&self, cfg: &PrepareConfig) -> Result<PathBuf> {
        let path = self.dir.join(CONFIG_FILE);
        cfg.save(&path.to_string_lossy())?;
        Ok(path)
    }

    pub fn load_config(&self) -> Result<PrepareConfig> {
        PrepareConfig::load(&self.dir.join(CONFIG_FILE).to_string_lossy())
    }

    pub fn save_pairs(&self, pairs: &[SentencePair]) -> Result<PathBuf> {
        let path = self.dir.join(PAIRS_FILE);
        write_json(&path, pairs)?;
        tracing::info!("Saved {} pairs to '{}'", pairs.len(), path.display());
        Ok(path)
    }

    pub fn save_vocabulary(&self, vocabulary: &Vocabulary) -> Result<PathBuf> {
        let path = self.dir.join(VOCABULARY_FILE);
        vocabulary.save(&path.to_string_lossy())?;
        tracing::info!(
            "Saved vocabulary '{}' ({} words) to '{}'",
            vocabulary.name(),
            vocabulary.len(),
            path.display()
        );
        Ok(path)
    }

    pub fn load_vocabulary(&self) -> Result<Vocabulary> {
        Vocabulary::load(&self.dir.join(VOCABULARY_FILE).to_string_lossy())
    }
}

// ─── Persistable implementations ─────────────────────────────────────────────
// Both go through serde_json; Vocabulary re-validates its
// invariants while deserialising.

impl Persistable for Vocabulary {
    fn save(&self, path: &str) -> Result<()> {
        write_json(Path::new(path), self)
    }

    fn load(path: &str) -> Result<Self> {
        read_json(Path::new(path))
    }
}

impl Persistable for PrepareConfig {
    fn save(&self, path: &str) -> Result<()> {
        write_json(Path::new(path), self)
    }

    fn load(path: &str) -> Result<Self> {
        read_json(Path::new(path))
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Cannot write '{}'", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in '{}'", path.display()))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "cornell-chat-prep-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_vocabulary_survives_save_and_load() {
        let dir = scratch_dir("vocab");
        let store = ArtifactStore::new(&dir).unwrap();

        let mut vocab = Vocabulary::new("english");
        vocab.add_sentence("you know what i mean ?");
        vocab.add_sentence("i know");
        store.save_vocabulary(&vocab).unwrap();

        let loaded = store.load_vocabulary().unwrap();
        assert_eq!(loaded, vocab);
        assert_eq!(loaded.index_of("know"), Some(4));
        assert_eq!(loaded.count_of("i"), Some(2));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_config_survives_save_and_load() {
        let dir = scratch_dir("config");
        let store = ArtifactStore::new(&dir).unwrap();

        let cfg = PrepareConfig { batch_size: 3, normalize: false, ..PrepareConfig::default() };
        store.save_config(&cfg).unwrap();
        assert_eq!(store.load_config().unwrap(), cfg);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_pairs_written_as_json_array() {
        let dir = scratch_dir("pairs");
        let store = ArtifactStore::new(&dir).unwrap();

        let path = store.save_pairs(&[SentencePair::new("hi", "hello")]).unwrap();
        let text = fs::read_to_string(path).unwrap();
        let back: Vec<SentencePair> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, vec![SentencePair::new("hi", "hello")]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_vocabulary_is_an_error() {
        let dir = scratch_dir("missing");
        let store = ArtifactStore::new(&dir).unwrap();
        assert!(store.load_vocabulary().is_err());
        fs::remove_dir_all(&dir).ok();
    }
}
