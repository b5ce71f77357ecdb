// ============================================================
// Layer 4 — CSV Loader
// ============================================================
// Loads the market data table from disk using the csv crate.
//
// Expected file shape:
//   - a header row naming every column
//   - one date column (dropped — the network never sees dates)
//   - one target column holding the GLD price
//   - every remaining column is a numeric predictor feature
//
// Example:
//   Date,SPX,USO,SLV,EUR/USD,...,GLD Price
//   2011-01-03,1271.87,39.27,29.18,1.3351,...,138.00
//   2011-01-04,1270.20,38.59,28.49,1.3314,...,137.10
//
// Row order is preserved exactly as it appears in the file —
// the downstream split relies on this (time series data must
// not be reordered during loading).
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::{fs::File, path::Path};

use crate::domain::price_record::PriceRecord;
use crate::domain::traits::RecordSource;

/// Loads all rows of a CSV file into PriceRecords.
/// Implements the RecordSource trait from Layer 3.
pub struct CsvLoader {
    /// Path to the CSV file
    path: String,

    /// Name of the column to drop (e.g. "Date")
    date_column: String,

    /// Name of the column holding the value to predict (e.g. "GLD Price")
    target_column: String,
}

impl CsvLoader {
    /// Create a new CsvLoader for the given file and column names
    pub fn new(
        path:          impl Into<String>,
        date_column:   impl Into<String>,
        target_column: impl Into<String>,
    ) -> Self {
        Self {
            path:          path.into(),
            date_column:   date_column.into(),
            target_column: target_column.into(),
        }
    }
}

/// Implement the RecordSource trait so the application layer
/// can call load_all() without knowing about CSV internals
impl RecordSource for CsvLoader {
    fn load_all(&self) -> Result<Vec<PriceRecord>> {
        let file = File::open(Path::new(&self.path))
            .with_context(|| format!("Cannot open data file '{}'", self.path))?;

        // has_headers(true) makes the reader consume the header row
        // separately so it never shows up as a data record
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = reader
            .headers()
            .with_context(|| format!("Cannot read header row of '{}'", self.path))?
            .clone();

        // Locate the two special columns by name.
        // The date column is optional — a file without one simply has
        // nothing to drop. The target column is mandatory.
        let date_idx = headers.iter().position(|h| h == self.date_column);
        if date_idx.is_none() {
            tracing::warn!(
                "Date column '{}' not found in '{}' — keeping all columns",
                self.date_column,
                self.path
            );
        }

        let target_idx = headers
            .iter()
            .position(|h| h == self.target_column)
            .with_context(|| {
                format!(
                    "Target column '{}' not found in '{}' (header: {:?})",
                    self.target_column, self.path, headers
                )
            })?;

        // Every column that is neither the date nor the target is a feature
        let feature_names: Vec<&str> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != date_idx && *i != target_idx)
            .map(|(_, h)| h)
            .collect();

        if feature_names.is_empty() {
            bail!(
                "'{}' has no feature columns besides '{}' and '{}'",
                self.path,
                self.date_column,
                self.target_column
            );
        }

        tracing::info!(
            "Loading '{}': {} feature columns {:?}, target '{}'",
            self.path,
            feature_names.len(),
            feature_names,
            self.target_column
        );

        let mut records = Vec::new();

        for (row, result) in reader.records().enumerate() {
            // CSV line numbers are 1-based and the header occupies line 1
            let line = row + 2;

            let record = result
                .with_context(|| format!("Malformed CSV record at line {line} of '{}'", self.path))?;

            if record.len() != headers.len() {
                bail!(
                    "Line {line} of '{}' has {} cells, expected {}",
                    self.path,
                    record.len(),
                    headers.len()
                );
            }

            let mut features = Vec::with_capacity(feature_names.len());
            let mut target: Option<f64> = None;

            for (col, cell) in record.iter().enumerate() {
                if Some(col) == date_idx {
                    continue;
                }

                let value: f64 = cell.parse().with_context(|| {
                    format!(
                        "Non-numeric value '{}' in column '{}' at line {line} of '{}'",
                        cell,
                        headers.get(col).unwrap_or("?"),
                        self.path
                    )
                })?;

                if col == target_idx {
                    target = Some(value);
                } else {
                    features.push(value);
                }
            }

            // record.len() == headers.len() was checked above, so the
            // target cell is guaranteed to have been visited
            let target = target.context("target cell missing")?;
            records.push(PriceRecord::new(features, target));
        }

        tracing::info!("Loaded {} rows from '{}'", records.len(), self.path);
        Ok(records)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Write a throwaway CSV under the OS temp dir and return its path
    fn write_temp_csv(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(format!("gld-loader-{}-{}", std::process::id(), name));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_drops_date_and_splits_target() {
        let path = write_temp_csv(
            "basic.csv",
            "Date,SPX,USO,GLD Price\n2011-01-03,1271.87,39.27,138.0\n2011-01-04,1270.20,38.59,137.1\n",
        );
        let loader  = CsvLoader::new(&path, "Date", "GLD Price");
        let records = loader.load_all().unwrap();

        assert_eq!(records.len(), 2);
        // Date is gone, target is separated out
        assert_eq!(records[0].features, vec![1271.87, 39.27]);
        assert_eq!(records[0].target, 138.0);
        assert_eq!(records[1].target, 137.1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_target_column_is_an_error() {
        let path = write_temp_csv("no-target.csv", "Date,SPX\n2011-01-03,1271.87\n");
        let loader = CsvLoader::new(&path, "Date", "GLD Price");
        let err = loader.load_all().unwrap_err();
        assert!(err.to_string().contains("GLD Price"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_non_numeric_cell_is_an_error() {
        let path = write_temp_csv(
            "bad-cell.csv",
            "Date,SPX,GLD Price\n2011-01-03,not-a-number,138.0\n",
        );
        let loader = CsvLoader::new(&path, "Date", "GLD Price");
        let err = loader.load_all().unwrap_err();
        assert!(err.to_string().contains("SPX"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let loader = CsvLoader::new("definitely/not/here.csv", "Date", "GLD Price");
        assert!(loader.load_all().is_err());
    }

    #[test]
    fn test_row_order_is_preserved() {
        let path = write_temp_csv(
            "order.csv",
            "Date,X,GLD Price\nd1,1.0,10.0\nd2,2.0,20.0\nd3,3.0,30.0\n",
        );
        let loader  = CsvLoader::new(&path, "Date", "GLD Price");
        let records = loader.load_all().unwrap();
        let targets: Vec<f64> = records.iter().map(|r| r.target).collect();
        assert_eq!(targets, vec![10.0, 20.0, 30.0]);
        std::fs::remove_file(&path).ok();
    }
}
