// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Records per-chunk training metrics to a CSV file.
//
// Metrics recorded per chunk:
//   - chunk:      1-based index of the chunk in dataset order
//   - examples:   how many samples the chunk held
//   - train_loss: cross-entropy on the chunk's training rows
//   - val_loss:   cross-entropy on the held-out rows, empty when
//                 the chunk was too small to hold any out
//
// Output file: <checkpoint-dir>/metrics.csv
//
//   chunk,examples,train_loss,val_loss
//   1,64,5.812345,5.904412
//   2,64,5.523001,5.610923
//   ...
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};
use serde::{Deserialize, Serialize};

/// One row of metrics data for a single trained chunk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkMetrics {
    pub chunk:      usize,
    pub examples:   usize,
    pub train_loss: f64,
    pub val_loss:   Option<f64>,
}

impl ChunkMetrics {
    pub fn new(chunk: usize, examples: usize, train_loss: f64, val_loss: Option<f64>) -> Self {
        Self { chunk, examples, train_loss, val_loss }
    }

    /// The CSV row for this record, without trailing newline
    fn to_row(&self) -> String {
        let val = self
            .val_loss
            .map(|v| format!("{v:.6}"))
            .unwrap_or_default();
        format!("{},{},{:.6},{}", self.chunk, self.examples, self.train_loss, val)
    }
}

/// Appends chunk metrics to a CSV file for later analysis.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a new MetricsLogger.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("metrics.csv");

        // Header only on a fresh file, so reruns append
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "chunk,examples,train_loss,val_loss")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one chunk's metrics as a new row.
    pub fn log(&self, m: &ChunkMetrics) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)?;

        writeln!(f, "{}", m.to_row())?;
        Ok(())
    }

    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_format_with_validation_loss() {
        let m = ChunkMetrics::new(3, 64, 5.5, Some(5.75));
        assert_eq!(m.to_row(), "3,64,5.500000,5.750000");
    }

    #[test]
    fn test_row_format_without_validation_loss() {
        let m = ChunkMetrics::new(1, 1, 2.25, None);
        assert_eq!(m.to_row(), "1,1,2.250000,");
    }
}
