use burn::data::dataset::Dataset;

use crate::data::batcher::EncodedBatch;

/// Pre-built batches exposed through Burn's Dataset trait, so a
/// training loop can index them or iterate with `Dataset::iter`.
pub struct BatchDataset {
    batches: Vec<EncodedBatch>,
}

impl BatchDataset {
    pub fn new(batches: Vec<EncodedBatch>) -> Self { Self { batches } }

    /// Total rows over all batches (pairs repeated by the last window count twice)
    pub fn row_count(&self) -> usize {
        self.batches.iter().map(EncodedBatch::rows).sum()
    }
}

impl Dataset<EncodedBatch> for BatchDataset {
    fn get(&self, index: usize) -> Option<EncodedBatch> {
        self.batches.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.batches.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(rows: usize) -> EncodedBatch {
        EncodedBatch {
            source: vec![vec![3, 1]; rows],
            target: vec![vec![0, 4, 1]; rows],
        }
    }

    #[test]
    fn test_dataset_indexing() {
        let ds = BatchDataset::new(vec![batch(2), batch(2)]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.row_count(), 4);
        assert_eq!(ds.get(1), Some(batch(2)));
        assert!(ds.get(2).is_none());
    }
}
