//! Corpus preparation for a sequence-to-sequence chatbot.
//!
//! Reads the Cornell movie-dialogue corpus, extracts question/answer
//! pairs, normalises and length-filters them, builds a vocabulary and
//! emits per-batch padded index tensors for a training loop.
//!
//! ```no_run
//! use cornell_chat_prep::application::prepare_use_case::{PrepareConfig, PrepareUseCase};
//!
//! let use_case = PrepareUseCase::new(PrepareConfig::default());
//! let device = Default::default();
//! let (vocabulary, batches) = use_case
//!     .data_generator::<burn::backend::NdArray>(&device)
//!     .unwrap();
//! println!("{} words, {} batches", vocabulary.len(), batches.len());
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod infra;
