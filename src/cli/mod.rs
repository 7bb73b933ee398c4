// ============================================================
// CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, built on clap.
// All preparation logic is delegated to the application layer;
// this layer parses flags, prints summaries and picks the
// output directory.
//
// Example:
//   cornell-chat-prep batches --lines data/movie_lines.txt \
//       --conversations data/movie_conversations.txt --batch-size 64

pub mod commands;

use anyhow::Result;
use burn::data::dataset::Dataset;
use clap::Parser;
use commands::Commands;

use crate::application::prepare_use_case::{PrepareConfig, PrepareUseCase};
use crate::infra::artifacts::ArtifactStore;
use crate::infra::report::{BatchReport, BatchShape};

/// Batches are materialised on the CPU; a training loop that
/// wants a GPU calls `data_generator` with its own backend.
type CpuBackend = burn::backend::NdArray;

#[derive(Parser, Debug)]
#[command(
    name = "cornell-chat-prep",
    version,
    about = "Prepare the Cornell movie-dialogue corpus for a seq2seq chatbot."
)]
pub struct Cli {
    /// The step of the pipeline to run up to
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolve the config once, then dispatch to the matching handler.
    pub fn run(self) -> Result<()> {
        let cfg = self.command.corpus_args().resolve()?;
        let store = ArtifactStore::new(&cfg.output_dir)?;
        store.save_config(&cfg)?;

        match self.command {
            Commands::Pairs(_)   => run_pairs(cfg, &store),
            Commands::Vocab(_)   => run_vocab(cfg, &store),
            Commands::Batches(_) => run_batches(cfg, &store),
        }
    }
}

fn run_pairs(cfg: PrepareConfig, store: &ArtifactStore) -> Result<()> {
    let pairs = PrepareUseCase::new(cfg).load_pairs()?;
    let path = store.save_pairs(&pairs)?;

    println!("{} pairs written to {}", pairs.len(), path.display());
    Ok(())
}

fn run_vocab(cfg: PrepareConfig, store: &ArtifactStore) -> Result<()> {
    let (vocabulary, pairs) = PrepareUseCase::new(cfg).load_data()?;
    store.save_pairs(&pairs)?;
    let path = store.save_vocabulary(&vocabulary)?;

    println!(
        "{} words from {} pairs written to {}",
        vocabulary.len(),
        pairs.len(),
        path.display()
    );
    Ok(())
}

fn run_batches(cfg: PrepareConfig, store: &ArtifactStore) -> Result<()> {
    let (vocabulary, dataset) = PrepareUseCase::new(cfg).batch_dataset()?;
    store.save_vocabulary(&vocabulary)?;

    let report = BatchReport::create(store.dir())?;
    let device = Default::default();

    for index in 0..dataset.len() {
        let Some(batch) = dataset.get(index) else { continue };
        report.log(&BatchShape::of(index, &batch))?;

        let tensors = batch.to_device::<CpuBackend>(&device);
        tracing::debug!(
            "Batch {}: source {:?}, target {:?}",
            index,
            tensors.source.dims(),
            tensors.target.dims()
        );
    }

    println!(
        "{} batches ({} rows) over {} words, shapes in {}",
        dataset.len(),
        dataset.row_count(),
        vocabulary.len(),
        report.csv_path().display()
    );
    Ok(())
}
