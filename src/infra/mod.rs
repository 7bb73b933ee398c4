// ============================================================
// Infrastructure Layer
// ============================================================
// File output that does not belong to any pipeline step:
//
//   artifacts.rs — JSON persistence of the config, the
//                  filtered pairs and the vocabulary.
//                  The vocabulary has to be reloaded, not
//                  rebuilt, wherever indices must line up
//                  with an earlier run.
//
//   report.rs    — CSV log of every batch's rows and widths.

/// Config / pairs / vocabulary persistence
pub mod artifacts;

/// Per-batch shape CSV
pub mod report;
