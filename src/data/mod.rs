// ============================================================
// Data Pipeline
// ============================================================
// Everything from the two raw corpus files to padded batches.
//
// The pipeline flows in this order:
//
//   movie_lines.txt / movie_conversations.txt
//       │
//       ▼
//   CornellLoader     → id → text map, conversation id lists
//       │
//       ▼
//   extract_pairs     → (question, answer) pairs
//       │
//       ▼
//   Normalizer        → lowercase, ASCII, spaced punctuation
//       │
//       ▼
//   filter_pairs      → drop pairs that are too long
//       │
//       ▼
//   (Vocabulary is built over the surviving pairs)
//       │
//       ▼
//   generate_batches  → windows, per-batch widths, encode()
//       │
//       ▼
//   BatchDataset / PairBatch → handed to the training loop
//
// Each module is responsible for exactly one step.

/// Reads the ` +++$+++ ` delimited corpus files
pub mod loader;

/// Parses the quoted id list of a conversation record
pub mod list_literal;

/// Splits conversations into question/answer pairs
pub mod pairs;

/// Normalises raw sentence text
pub mod preprocessor;

/// Drops pairs whose sides are too long
pub mod filter;

/// Converts a sentence into padded vocabulary indices
pub mod tensorizer;

/// Groups pairs into per-batch padded tensors
pub mod batcher;

/// Implements Burn's Dataset trait over encoded batches
pub mod dataset;
