// ============================================================
// CLI Commands and Arguments
// ============================================================
// Three subcommands, all reading the same corpus flags:
//   pairs    — filtered question/answer pairs → pairs.json
//   vocab    — vocabulary over those pairs    → vocabulary.json
//   batches  — padded batches on the CPU      → batches.csv
//
// Flags left out fall back to --config (if given), then to
// PrepareConfig::default().

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::application::prepare_use_case::PrepareConfig;
use crate::domain::traits::Persistable;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract, normalise and filter sentence pairs
    Pairs(CorpusArgs),

    /// Build the vocabulary over the filtered pairs
    Vocab(CorpusArgs),

    /// Generate per-batch padded tensors and report their shapes
    Batches(CorpusArgs),
}

impl Commands {
    pub fn corpus_args(&self) -> &CorpusArgs {
        match self {
            Commands::Pairs(a) | Commands::Vocab(a) | Commands::Batches(a) => a,
        }
    }
}

/// Corpus location and preparation settings.
#[derive(Args, Debug, Clone, Default)]
pub struct CorpusArgs {
    /// JSON file with a saved PrepareConfig to start from
    #[arg(long)]
    pub config: Option<String>,

    /// Path to movie_lines.txt
    #[arg(long)]
    pub lines: Option<String>,

    /// Path to movie_conversations.txt
    #[arg(long)]
    pub conversations: Option<String>,

    /// Directory for pairs.json, vocabulary.json, batches.csv
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Keep pairs whose sides have FEWER tokens than this
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Number of pairs per batch
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Skip lowercasing / punctuation clean-up
    #[arg(long)]
    pub no_normalize: bool,
}

impl CorpusArgs {
    /// Overlay the given flags on the base config.
    /// This is the boundary between the CLI and the application —
    /// the application layer never sees clap types.
    pub fn resolve(&self) -> Result<PrepareConfig> {
        let mut cfg = match &self.config {
            Some(path) => PrepareConfig::load(path)
                .with_context(|| format!("Cannot load config '{path}'"))?,
            None => PrepareConfig::default(),
        };

        if let Some(v) = &self.lines {
            cfg.lines_path = v.clone();
        }
        if let Some(v) = &self.conversations {
            cfg.conversations_path = v.clone();
        }
        if let Some(v) = &self.output_dir {
            cfg.output_dir = v.clone();
        }
        if let Some(v) = self.max_length {
            cfg.max_length = v;
        }
        if let Some(v) = self.batch_size {
            cfg.batch_size = v;
        }
        if self.no_normalize {
            cfg.normalize = false;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}
