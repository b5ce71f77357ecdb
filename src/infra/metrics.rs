// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Records the training loss to a CSV file after each epoch.
//
// Why log metrics to CSV?
//   - Easy to open in a spreadsheet
//   - Can plot the learning curve to diagnose training issues
//   - Provides a permanent record of each training run
//
// Metrics recorded per epoch:
//   - epoch:      the epoch number (1, 2, 3, ...)
//   - train_loss: average mean-absolute-error over the epoch's
//                 batches, in normalized [0,1] units
//
// Output file: {checkpoint_dir}/metrics.csv
//
// Example CSV output:
//   epoch,train_loss
//   1,0.184233
//   2,0.121548
//   ...
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};
use serde::{Deserialize, Serialize};

/// One row of metrics data for a single training epoch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochMetrics {
    /// The epoch number (starts at 1)
    pub epoch: usize,

    /// Average mean-absolute-error over all training batches.
    /// Lower is better; a flat curve means the lr is off.
    pub train_loss: f64,
}

impl EpochMetrics {
    pub fn new(epoch: usize, train_loss: f64) -> Self {
        Self { epoch, train_loss }
    }
}

/// Logs epoch metrics to a CSV file for later analysis.
pub struct MetricsLogger {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a new MetricsLogger.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl Into<String>) -> Result<Self> {
        let dir = PathBuf::from(dir.into());
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("metrics.csv");

        // Write CSV header only if file is new.
        // This allows appending to an existing log across runs.
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "epoch,train_loss")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one epoch's metrics as a new row in the CSV.
    ///
    /// Uses OpenOptions with append=true so we add to the file
    /// without overwriting previous epochs.
    pub fn log(&self, m: &EpochMetrics) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)?;

        writeln!(f, "{},{:.6}", m.epoch, m.train_loss)?;

        tracing::debug!("Logged epoch {} train_loss={:.4}", m.epoch, m.train_loss);
        Ok(())
    }

    /// Return the path to the metrics CSV file
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_header_and_rows() {
        let dir = std::env::temp_dir().join(format!("gld-metrics-{}", std::process::id()));
        let dir_str = dir.to_str().unwrap().to_string();

        let logger = MetricsLogger::new(dir_str).unwrap();
        logger.log(&EpochMetrics::new(1, 0.5)).unwrap();
        logger.log(&EpochMetrics::new(2, 0.25)).unwrap();

        let contents = fs::read_to_string(logger.csv_path()).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "epoch,train_loss");
        assert_eq!(lines[1], "1,0.500000");
        assert_eq!(lines[2], "2,0.250000");

        fs::remove_dir_all(&dir).ok();
    }
}
