// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load the CSV rows          (Layer 4 - data)
//   Step 2: Split train/test in order  (Layer 4 - data)
//   Step 3: Min-max normalize splits   (Layer 4 - data)
//   Step 4: Build datasets             (Layer 4 - data)
//   Step 5: Save run config            (Layer 6 - infra)
//   Step 6: Run training loop          (Layer 5 - ml)
//
// Reference: Burn Book §5 (Training)

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    dataset::PriceDataset,
    loader::CsvLoader,
    scaler::MinMaxScaler,
    splitter::split_ordered,
};
use crate::domain::traits::RecordSource;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::trainer::run_training;

// ─── Training Configuration ──────────────────────────────────────────────────
// All hyperparameters for a training run.
// Serialisable so it can be saved to disk and reloaded for evaluation.
// The #[derive(Serialize, Deserialize)] macros from serde handle
// reading/writing this struct to JSON automatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub data_path:      String,
    pub checkpoint_dir: String,
    pub date_column:    String,
    pub target_column:  String,
    pub split_fraction: f64,
    pub batch_size:     usize,
    pub epochs:         usize,
    pub lr:             f64,
    pub hidden_size:    usize,
    pub seed:           Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            data_path:      "data/training_data.csv".to_string(),
            checkpoint_dir: "models".to_string(),
            date_column:    "Date".to_string(),
            target_column:  "GLD Price".to_string(),
            split_fraction: 0.75,
            batch_size:     64,
            epochs:         100,
            lr:             0.1,
            hidden_size:    12,
            seed:           None,
        }
    }
}

// ─── Shared data preparation ─────────────────────────────────────────────────
/// Both normalized splits, ready to be wrapped in data loaders.
pub struct PreparedData {
    pub train: PriceDataset,
    pub test:  PriceDataset,
}

/// Load, split, and normalize the CSV described by `cfg`.
///
/// Both `train` and `evaluate` run through here so the two
/// commands always agree on what the splits contain.
///
/// Each split is normalized with its own min/max statistics —
/// the statistics are NOT shared across splits. See MinMaxScaler
/// for the fit/transform seam that would share them.
pub fn prepare_datasets(cfg: &TrainConfig) -> Result<PreparedData> {
    // ── Load all rows, date column dropped ────────────────────────────────────
    let loader  = CsvLoader::new(&cfg.data_path, &cfg.date_column, &cfg.target_column);
    let records = loader.load_all()?;
    ensure!(!records.is_empty(), "'{}' contains no data rows", cfg.data_path);

    // ── Ordered split: first fraction trains, remainder tests ─────────────────
    let (train_records, test_records) = split_ordered(records, cfg.split_fraction);
    ensure!(
        !train_records.is_empty(),
        "split fraction {} leaves no training rows",
        cfg.split_fraction
    );
    tracing::info!(
        "Split: {} train, {} test rows",
        train_records.len(),
        test_records.len()
    );

    // ── Per-split min-max normalization into [0,1] ────────────────────────────
    let train_samples = MinMaxScaler::fit_transform(&train_records);
    let test_samples  = MinMaxScaler::fit_transform(&test_records);

    Ok(PreparedData {
        train: PriceDataset::new(train_samples),
        test:  PriceDataset::new(test_samples),
    })
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full training pipeline.
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    /// Create a new TrainUseCase with the given configuration
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Steps 1-4: data preparation ───────────────────────────────────────
        let prepared = prepare_datasets(cfg)?;

        // ── Step 5: save config for evaluation ────────────────────────────────
        // `evaluate` needs the run configuration to rebuild the splits
        let ckpt_manager = CheckpointManager::new(&cfg.checkpoint_dir);
        ckpt_manager.save_train_config(cfg)?;

        // ── Step 6: run training loop (Layer 5) ───────────────────────────────
        // Only the training split is consumed here; the testing split
        // is reproduced on demand by the evaluate workflow.
        run_training(cfg, prepared.train, ckpt_manager)?;

        Ok(())
    }
}
