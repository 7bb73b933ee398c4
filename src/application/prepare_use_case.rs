// ============================================================
// Application — PrepareUseCase
// ============================================================
// Orchestrates the full preparation pipeline in order:
//
//   Step 1: Load line records          (data::loader)
//   Step 2: Load conversations         (data::loader)
//   Step 3: Extract question/answer    (data::pairs)
//   Step 4: Normalise both sides       (data::preprocessor)
//   Step 5: Drop over-long pairs       (data::filter)
//   Step 6: Build the vocabulary       (domain::vocabulary)
//   Step 7: Window, pad and encode     (data::batcher)
//   Step 8: Move batches to a device   (data::batcher, Burn)
//
// `load_data` stops after step 6, `generate` after step 7 and
// `data_generator` runs all eight.

use anyhow::{Context, Result};
use burn::prelude::Backend;
use serde::{Deserialize, Serialize};

use crate::data::{
    batcher::{generate_batches, EncodedBatch, PairBatch},
    dataset::BatchDataset,
    filter::filter_pairs,
    loader::CornellLoader,
    pairs::extract_pairs,
    preprocessor::Normalizer,
};
use crate::domain::sentence_pair::SentencePair;
use crate::domain::traits::CorpusSource;
use crate::domain::vocabulary::Vocabulary;
use crate::error::CorpusError;

// ─── Preparation Configuration ───────────────────────────────────────────────
// Every knob of a preparation run.
// Serialisable so it can be read from a JSON file and saved next
// to the produced artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepareConfig {
    pub lines_path:         String,
    pub conversations_path: String,
    pub output_dir:         String,
    /// Pairs are kept only if both sides have FEWER tokens than this
    pub max_length:         usize,
    pub batch_size:         usize,
    /// Run the text normaliser before filtering
    pub normalize:          bool,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            lines_path:         "data/movie_lines.txt".to_string(),
            conversations_path: "data/movie_conversations.txt".to_string(),
            output_dir:         "artifacts".to_string(),
            max_length:         10,
            batch_size:         64,
            normalize:          true,
        }
    }
}

impl PrepareConfig {
    /// Reject settings that can only produce an empty or broken run
    pub fn validate(&self) -> Result<(), CorpusError> {
        if self.max_length == 0 {
            return Err(CorpusError::InvalidConfig(
                "max_length must be at least 1".to_string(),
            ));
        }
        if self.batch_size == 0 {
            return Err(CorpusError::InvalidConfig(
                "batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
/// Owns the config and the corpus source and runs the pipeline.
pub struct PrepareUseCase<S: CorpusSource> {
    config: PrepareConfig,
    source: S,
}

impl PrepareUseCase<CornellLoader> {
    /// Read the corpus from the files named in the config
    pub fn new(config: PrepareConfig) -> Self {
        let source = CornellLoader::new(&config.lines_path, &config.conversations_path);
        Self { config, source }
    }
}

impl<S: CorpusSource> PrepareUseCase<S> {
    /// Use any other corpus source (fixtures, alternative layouts)
    pub fn with_source(config: PrepareConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Steps 1–5: the normalised, length-filtered pairs
    pub fn load_pairs(&self) -> Result<Vec<SentencePair>> {
        self.config.validate()?;

        let id2line = self.source.load_lines().context("Cannot load line records")?;
        let conversations = self
            .source
            .load_conversations()
            .context("Cannot load conversations")?;

        tracing::info!("Preparing question/answer sets...");
        let pairs = extract_pairs(&id2line, &conversations)?;
        let extracted = pairs.len();

        let pairs = if self.config.normalize {
            let normalizer = Normalizer::new();
            pairs
                .into_iter()
                .map(|p| p.map(|s| normalizer.normalize(s)))
                .collect()
        } else {
            pairs
        };

        let pairs = filter_pairs(pairs, self.config.max_length);
        tracing::info!(
            "Kept {} of {} pairs (max_length = {})",
            pairs.len(),
            extracted,
            self.config.max_length
        );
        if pairs.is_empty() {
            tracing::warn!("No sentence pairs survived filtering");
        }

        Ok(pairs)
    }

    /// Steps 1–6: the vocabulary and the pairs it was built from
    pub fn load_data(&self) -> Result<(Vocabulary, Vec<SentencePair>)> {
        let pairs = self.load_pairs()?;
        let vocabulary = build_vocabulary(&pairs);
        tracing::info!("Counted words: {}", vocabulary.len());
        Ok((vocabulary, pairs))
    }

    /// Steps 1–7: host-side encoded batches
    pub fn generate(&self) -> Result<(Vocabulary, Vec<EncodedBatch>)> {
        let (vocabulary, pairs) = self.load_data()?;
        let batches = generate_batches(&vocabulary, &pairs, self.config.batch_size)?;
        tracing::info!(
            "Generated {} batches of {} pairs",
            batches.len(),
            self.config.batch_size
        );
        Ok((vocabulary, batches))
    }

    /// Steps 1–7, wrapped in Burn's Dataset trait
    pub fn batch_dataset(&self) -> Result<(Vocabulary, BatchDataset)> {
        let (vocabulary, batches) = self.generate()?;
        Ok((vocabulary, BatchDataset::new(batches)))
    }

    /// Steps 1–8: batches as Int tensors on `device`
    pub fn data_generator<B: Backend>(
        &self,
        device: &B::Device,
    ) -> Result<(Vocabulary, Vec<PairBatch<B>>)> {
        let (vocabulary, batches) = self.generate()?;
        let batches = batches.iter().map(|b| b.to_device::<B>(device)).collect();
        Ok((vocabulary, batches))
    }
}

/// Vocabulary over both sides of every pair, questions first
pub fn build_vocabulary(pairs: &[SentencePair]) -> Vocabulary {
    let mut vocabulary = Vocabulary::new("english");
    for pair in pairs {
        vocabulary.add_sentence(&pair.question);
        vocabulary.add_sentence(&pair.answer);
    }
    vocabulary
}
