// ============================================================
// Infrastructure — Batch Report
// ============================================================
// Records the shape of every generated batch to a CSV file.
//
// Per-batch padding means widths differ from batch to batch;
// the report makes it easy to see how much padding a given
// max_length / batch_size combination produces.
//
// Output file: <output_dir>/batches.csv
//
//   batch,rows,source_width,target_width
//   0,64,10,12
//   1,64,9,12
//   ...

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};
use serde::{Deserialize, Serialize};

use crate::data::batcher::EncodedBatch;

/// One row of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchShape {
    pub batch:        usize,
    pub rows:         usize,
    pub source_width: usize,
    pub target_width: usize,
}

impl BatchShape {
    pub fn of(batch: usize, encoded: &EncodedBatch) -> Self {
        Self {
            batch,
            rows:         encoded.rows(),
            source_width: encoded.source_width(),
            target_width: encoded.target_width(),
        }
    }
}

/// Writes batch shapes to a CSV file.
pub struct BatchReport {
    csv_path: PathBuf,
}

impl BatchReport {
    /// Start a fresh report, truncating any earlier one.
    pub fn create(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let csv_path = dir.join("batches.csv");

        let mut f = fs::File::create(&csv_path)?;
        writeln!(f, "batch,rows,source_width,target_width")?;
        tracing::debug!("Created batch report: '{}'", csv_path.display());

        Ok(Self { csv_path })
    }

    /// Append one batch as a new row
    pub fn log(&self, shape: &BatchShape) -> Result<()> {
        let mut f = OpenOptions::new().append(true).open(&self.csv_path)?;
        writeln!(
            f,
            "{},{},{},{}",
            shape.batch, shape.rows, shape.source_width, shape.target_width
        )?;
        Ok(())
    }

    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_of_batch() {
        let batch = EncodedBatch {
            source: vec![vec![3, 4, 1], vec![5, 1, 2]],
            target: vec![vec![0, 6, 1, 2], vec![0, 7, 1, 2]],
        };
        let shape = BatchShape::of(4, &batch);
        assert_eq!(
            shape,
            BatchShape { batch: 4, rows: 2, source_width: 3, target_width: 4 }
        );
    }

    #[test]
    fn test_report_rows() {
        let dir = std::env::temp_dir().join(format!("cornell-chat-prep-report-{}", std::process::id()));
        let report = BatchReport::create(&dir).unwrap();
        report
            .log(&BatchShape { batch: 0, rows: 2, source_width: 3, target_width: 5 })
            .unwrap();

        let text = fs::read_to_string(report.csv_path()).unwrap();
        assert_eq!(text, "batch,rows,source_width,target_width\n0,2,3,5\n");

        fs::remove_dir_all(&dir).ok();
    }
}
