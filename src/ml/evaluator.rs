// ============================================================
// Layer 5 — Evaluator
// ============================================================
// Loads a trained checkpoint on the inner (non-autodiff) backend
// and measures prediction error on held-out data. Runs only on
// demand, after training — never inside the training loop.
use anyhow::Result;
use burn::data::dataloader::{DataLoader, DataLoaderBuilder};

use crate::data::{batcher::PriceBatcher, dataset::PriceDataset};
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::model::GldPredictor;

type EvalBackend = burn::backend::NdArray;

/// Error summary over one evaluated dataset
#[derive(Debug, Clone)]
pub struct EvalReport {
    /// Mean absolute error — same metric the training loss uses
    pub mae: f64,

    /// Root mean squared error — penalizes large misses harder
    pub rmse: f64,

    /// Number of samples evaluated
    pub sample_count: usize,
}

// ─── Running error accumulators ───────────────────────────────────────────────
/// Accumulates absolute and squared error batch by batch,
/// so metrics never require holding all predictions in memory.
#[derive(Debug, Clone, Default)]
pub struct RegressionMetrics {
    sum_abs_error:     f64,
    sum_squared_error: f64,
    count:             usize,
}

impl RegressionMetrics {
    pub fn update(&mut self, predictions: &[f32], targets: &[f32]) {
        for (pred, target) in predictions.iter().zip(targets.iter()) {
            let diff = *pred as f64 - *target as f64;
            self.sum_abs_error     += diff.abs();
            self.sum_squared_error += diff * diff;
            self.count             += 1;
        }
    }

    /// MAE = (1/n) * Σ|y_pred - y_true|
    pub fn mae(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum_abs_error / self.count as f64
        }
    }

    /// RMSE = √((1/n) * Σ(y_pred - y_true)²)
    pub fn rmse(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.sum_squared_error / self.count as f64).sqrt()
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

// ─── Evaluator ────────────────────────────────────────────────────────────────
pub struct Evaluator {
    model:      GldPredictor<EvalBackend>,
    device:     burn::backend::ndarray::NdArrayDevice,
    batch_size: usize,
}

impl Evaluator {
    /// Rebuild the trained model from the saved architecture config
    /// and weight file.
    pub fn from_checkpoint(ckpt_manager: &CheckpointManager, batch_size: usize) -> Result<Self> {
        let device = burn::backend::ndarray::NdArrayDevice::default();

        let model_cfg = ckpt_manager.load_model_config()?;
        let model: GldPredictor<EvalBackend> = model_cfg.init(&device);
        let model = ckpt_manager.load_model(model, &device)?;
        tracing::info!("Model loaded from checkpoint");

        Ok(Self { model, device, batch_size })
    }

    /// Run every sample through the network and report MAE/RMSE
    /// in normalized [0,1] units.
    pub fn evaluate(&self, dataset: PriceDataset) -> Result<EvalReport> {
        let batcher = PriceBatcher::<EvalBackend>::new(self.device.clone());
        let loader  = DataLoaderBuilder::new(batcher)
            .batch_size(self.batch_size)
            .num_workers(1)
            .build(dataset);

        let mut metrics = RegressionMetrics::default();

        for batch in loader.iter() {
            // predictions come out [batch, 1]; flatten for comparison
            let prediction = self.model.forward(batch.features);

            let predictions: Vec<f32> = prediction.into_data().value;
            let targets:     Vec<f32> = batch.targets.into_data().value;

            metrics.update(&predictions, &targets);
        }

        Ok(EvalReport {
            mae:          metrics.mae(),
            rmse:         metrics.rmse(),
            sample_count: metrics.count(),
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_predictions_give_zero_error() {
        let mut m = RegressionMetrics::default();
        m.update(&[0.1, 0.5, 0.9], &[0.1, 0.5, 0.9]);
        assert_eq!(m.mae(), 0.0);
        assert_eq!(m.rmse(), 0.0);
        assert_eq!(m.count(), 3);
    }

    #[test]
    fn test_known_errors() {
        let mut m = RegressionMetrics::default();
        // errors: +0.1 and -0.3 → MAE 0.2, RMSE √((0.01+0.09)/2)
        m.update(&[0.6, 0.2], &[0.5, 0.5]);
        assert!((m.mae() - 0.2).abs() < 1e-6);
        assert!((m.rmse() - (0.05f64).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_rmse_at_least_mae() {
        let mut m = RegressionMetrics::default();
        m.update(&[0.0, 1.0, 0.3], &[0.5, 0.2, 0.4]);
        assert!(m.rmse() >= m.mae());
    }

    #[test]
    fn test_empty_metrics_are_zero() {
        let m = RegressionMetrics::default();
        assert_eq!(m.mae(), 0.0);
        assert_eq!(m.rmse(), 0.0);
        assert_eq!(m.count(), 0);
    }

    #[test]
    fn test_updates_accumulate_across_batches() {
        let mut a = RegressionMetrics::default();
        a.update(&[0.1, 0.2], &[0.0, 0.0]);
        a.update(&[0.3], &[0.0]);

        let mut b = RegressionMetrics::default();
        b.update(&[0.1, 0.2, 0.3], &[0.0, 0.0, 0.0]);

        assert!((a.mae() - b.mae()).abs() < 1e-12);
        assert!((a.rmse() - b.rmse()).abs() < 1e-12);
    }
}
