// ============================================================
// Layer 2 — EvaluateUseCase
// ============================================================
// Measures how the trained network does on the held-out testing
// split. Workflow:
//
//   Step 1: Load the saved run config   (Layer 6 - infra)
//   Step 2: Re-create the data splits   (Layer 4 - data)
//   Step 3: Load the trained weights    (Layer 6 - infra)
//   Step 4: Score the testing split     (Layer 5 - ml)
//
// The testing rows were split off BEFORE training and never
// touched a gradient, so the reported error is an honest
// out-of-sample number.

use anyhow::{ensure, Result};

use crate::application::train_use_case::prepare_datasets;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::evaluator::{EvalReport, Evaluator};

pub struct EvaluateUseCase {
    checkpoint_dir: String,

    /// Optional override of the CSV path recorded at training time
    data_path: Option<String>,
}

impl EvaluateUseCase {
    pub fn new(checkpoint_dir: impl Into<String>, data_path: Option<String>) -> Self {
        Self {
            checkpoint_dir: checkpoint_dir.into(),
            data_path,
        }
    }

    /// Run the evaluation workflow and return the error report.
    pub fn execute(&self) -> Result<EvalReport> {
        // ── Step 1: recover the training-time configuration ───────────────────
        let ckpt_manager = CheckpointManager::new(&self.checkpoint_dir);
        let mut cfg = ckpt_manager.load_train_config()?;

        if let Some(path) = &self.data_path {
            cfg.data_path = path.clone();
        }

        // ── Step 2: same preparation as training ──────────────────────────────
        let prepared = prepare_datasets(&cfg)?;
        ensure!(
            prepared.test.sample_count() > 0,
            "split fraction {} leaves no testing rows to evaluate",
            cfg.split_fraction
        );

        // ── Steps 3-4: load weights, score the held-out split ─────────────────
        let evaluator = Evaluator::from_checkpoint(&ckpt_manager, cfg.batch_size)?;
        let report    = evaluator.evaluate(prepared.test)?;

        tracing::info!(
            "Evaluated {} held-out samples: mae={:.6} rmse={:.6}",
            report.sample_count,
            report.mae,
            report.rmse
        );

        Ok(report)
    }
}
