// ============================================================
// Batch Generator
// ============================================================
// Groups the filtered pairs into fixed-size batches, pads each
// batch to its OWN widths and stacks the rows.
//
// Windows are taken in strides of `batch_size`:
//
//   7 pairs, batch_size = 3
//   i = 0   → pairs[0..3]
//   i = 3   → pairs[3..6]
//   i = 6   → 6 + 3 ≥ 7, so shift back → pairs[4..7]
//
// The last window is shifted back rather than shortened, so
// every batch has exactly `batch_size` rows and some pairs are
// emitted twice (pairs 4 and 5 above).
//
// With fewer pairs than `batch_size` the shifted start
// `len - batch_size` is negative and wraps around from the end
// once, clamped at zero:
//
//   2 pairs, batch_size = 3  → start 2·2 − 3 = 1 → pairs[1..2]
//   5 pairs, batch_size = 8  → start 2·5 − 8 = 2 → pairs[2..5]
//   2 pairs, batch_size = 5  → start clamps to 0 → pairs[0..2]
//
// so a small corpus yields one short batch that may leave out
// its leading pairs.
//
// Widths per window:
//   source: longest question in tokens + 1        (<eos>)
//   target: longest answer  in tokens + 2, then <sos> in front
//
// The encoded rows are plain Vec<usize>; `to_device` moves a
// batch into Burn tensors for the training loop.

use std::ops::Range;

use burn::prelude::*;

use crate::data::tensorizer::encode_pair;
use crate::domain::sentence_pair::SentencePair;
use crate::domain::vocabulary::{token_count, Vocabulary};
use crate::error::{CorpusError, Result};

// ─── EncodedBatch ─────────────────────────────────────────────────────────────
/// One batch of encoded pairs, still on the host.
/// Row `k` of `source` and row `k` of `target` come from the same pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBatch {
    pub source: Vec<Vec<usize>>,
    pub target: Vec<Vec<usize>>,
}

impl EncodedBatch {
    pub fn rows(&self) -> usize {
        self.source.len()
    }

    pub fn source_width(&self) -> usize {
        self.source.first().map_or(0, Vec::len)
    }

    pub fn target_width(&self) -> usize {
        self.target.first().map_or(0, Vec::len)
    }

    /// Stack the rows into two [rows, width] Int tensors on `device`.
    pub fn to_device<B: Backend>(&self, device: &B::Device) -> PairBatch<B> {
        PairBatch {
            source: stack(&self.source, self.source_width(), device),
            target: stack(&self.target, self.target_width(), device),
        }
    }
}

// ─── PairBatch ────────────────────────────────────────────────────────────────
/// A batch as the training loop consumes it.
///
/// B is the Burn Backend (e.g. NdArray, Wgpu) —
/// generic so the same batches work on any device.
#[derive(Debug, Clone)]
pub struct PairBatch<B: Backend> {
    /// Questions — shape: [batch_size, max_source_tokens + 1]
    pub source: Tensor<B, 2, Int>,

    /// Answers — shape: [batch_size, max_target_tokens + 3]
    pub target: Tensor<B, 2, Int>,
}

/// Flatten rows into one Vec<i32> (Burn uses i32 for Int tensors)
/// and reshape to [rows, width]. All rows share `width`.
fn stack<B: Backend>(rows: &[Vec<usize>], width: usize, device: &B::Device) -> Tensor<B, 2, Int> {
    // Row-major: row k occupies flat[k * width .. (k + 1) * width]
    let flat: Vec<i32> = rows
        .iter()
        .flat_map(|row| row.iter().map(|&x| x as i32))
        .collect();

    // Build as 1-D first, then view it as [rows, width]
    Tensor::<B, 1, Int>::from_ints(flat.as_slice(), device).reshape([rows.len(), width])
}

/// The pair ranges every batch is built from.
pub fn batch_windows(len: usize, batch_size: usize) -> Result<Vec<Range<usize>>> {
    if batch_size == 0 {
        return Err(CorpusError::InvalidConfig(
            "batch_size must be at least 1".to_string(),
        ));
    }

    // Start of the shifted-back window. Below `batch_size` pairs the
    // start wraps from the end once: len - batch_size + len, floored at 0.
    let last_start = if len >= batch_size {
        len - batch_size
    } else {
        (2 * len).saturating_sub(batch_size)
    };

    Ok((0..len)
        .step_by(batch_size)
        .map(|i| {
            // A full stride still fits strictly inside the set
            if i + batch_size < len {
                i..i + batch_size
            } else {
                last_start..len
            }
        })
        .collect())
}

/// Encode `pairs` into per-batch padded rows.
///
/// Every word in `pairs` must already be in `vocabulary`,
/// otherwise this fails with `CorpusError::WordNotFound`.
pub fn generate_batches(
    vocabulary: &Vocabulary,
    pairs:      &[SentencePair],
    batch_size: usize,
) -> Result<Vec<EncodedBatch>> {
    let windows = batch_windows(pairs.len(), batch_size)?;
    let mut batches = Vec::with_capacity(windows.len());

    for window in windows {
        let batch = &pairs[window];

        // ── Step 1: batch-local widths from the longest side ──
        let max_source = batch.iter().map(|p| token_count(&p.question)).max().unwrap_or(0);
        let max_target = batch.iter().map(|p| token_count(&p.answer)).max().unwrap_or(0);

        // ── Step 2: encode every pair to those widths ──
        // Source: tokens + <eos>. Target: one spare slot so padding
        // always happens and <sos> is always prepended.
        let mut source = Vec::with_capacity(batch.len());
        let mut target = Vec::with_capacity(batch.len());
        for pair in batch {
            let (src, trg) = encode_pair(vocabulary, pair, max_source + 1, max_target + 2)?;
            source.push(src);
            target.push(trg);
        }

        // ── Step 3: record the stacked batch ──
        tracing::debug!(
            "Batch {}: {} rows, source width {}, target width {}",
            batches.len(),
            batch.len(),
            max_source + 1,
            max_target + 3
        );
        batches.push(EncodedBatch { source, target });
    }

    Ok(batches)
}
