// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Full training loop using Burn's DataLoader and Adam.
//
// Key points:
//   - Training uses MyBackend (Autodiff<NdArray>) for gradients
//   - Batches are drawn in dataset order — the rows are a time
//     series and the loader is built without .shuffle()
//   - Loss is mean absolute error, matching the scale-free
//     [0,1] targets
//   - Only the FINAL weights are saved; there is no validation
//     pass and no per-epoch checkpointing
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use anyhow::Result;
use burn::{
    data::dataloader::{DataLoader, DataLoaderBuilder},
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
};

use crate::application::train_use_case::TrainConfig;
use crate::data::{batcher::PriceBatcher, dataset::PriceDataset};
use crate::infra::checkpoint::CheckpointManager;
use crate::infra::metrics::{EpochMetrics, MetricsLogger};
use crate::ml::model::{GldPredictor, GldPredictorConfig};

type MyBackend = burn::backend::Autodiff<burn::backend::NdArray>;

/// How often the running loss is printed to stdout
const LOG_EVERY_EPOCHS: usize = 10;

pub fn run_training(
    cfg:           &TrainConfig,
    train_dataset: PriceDataset,
    ckpt_manager:  CheckpointManager,
) -> Result<()> {
    let device = burn::backend::ndarray::NdArrayDevice::default();

    // Unseeded runs keep the backend's default (non-reproducible)
    // initialization; passing --seed pins the weights
    if let Some(seed) = cfg.seed {
        MyBackend::seed(seed);
        tracing::info!("Seeded backend RNG with {}", seed);
    }

    train_loop(cfg, train_dataset, ckpt_manager, device)
}

fn train_loop(
    cfg:           &TrainConfig,
    train_dataset: PriceDataset,
    ckpt_manager:  CheckpointManager,
    device:        burn::backend::ndarray::NdArrayDevice,
) -> Result<()> {

    // ── Build model ───────────────────────────────────────────────────────────
    // Input width comes from the data, not from a hardcoded constant,
    // so the same pipeline trains on any column arrangement
    let model_cfg = GldPredictorConfig::new(train_dataset.feature_count(), cfg.hidden_size);
    let mut model: GldPredictor<MyBackend> = model_cfg.init(&device);
    tracing::info!(
        "Model ready: {} → {} → {} → 1",
        model_cfg.input_size, cfg.hidden_size, cfg.hidden_size,
    );

    // The evaluator rebuilds the exact same architecture from this file
    ckpt_manager.save_model_config(&model_cfg)?;

    // ── Adam optimiser ────────────────────────────────────────────────────────
    // m = β1*m + (1-β1)*g        (mean)
    // v = β2*v + (1-β2)*g²       (variance)
    // θ = θ - lr * m / (√v + ε)  (update)
    let optim_cfg = AdamConfig::new().with_epsilon(1e-8);
    let mut optim = optim_cfg.init();

    // ── Training data loader ──────────────────────────────────────────────────
    // No .shuffle() — batches walk the time series in order
    let train_batcher = PriceBatcher::<MyBackend>::new(device.clone());
    let train_loader  = DataLoaderBuilder::new(train_batcher)
        .batch_size(cfg.batch_size)
        .num_workers(1)
        .build(train_dataset);

    let metrics_logger = MetricsLogger::new(&cfg.checkpoint_dir)?;
    tracing::info!("Logging per-epoch loss to '{}'", metrics_logger.csv_path().display());

    // ── Epoch loop ────────────────────────────────────────────────────────────
    let mut final_loss = f64::NAN;

    for epoch in 1..=cfg.epochs {
        let mut loss_sum = 0.0f64;
        let mut batches  = 0usize;

        for batch in train_loader.iter() {
            let (loss, _prediction) = model.forward_loss(batch.features, batch.targets);

            let loss_val: f64 = loss.clone().into_scalar().elem::<f64>();
            loss_sum += loss_val;
            batches  += 1;

            // Backward pass + Adam update
            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.lr, model, grads);
        }

        let avg_loss = if batches > 0 {
            loss_sum / batches as f64
        } else { f64::NAN };
        final_loss = avg_loss;

        if epoch % LOG_EVERY_EPOCHS == 0 {
            println!(
                "Epoch {:>3}/{} | train_loss={:.6}",
                epoch, cfg.epochs, avg_loss,
            );
        }

        metrics_logger.log(&EpochMetrics::new(epoch, avg_loss))?;
    }

    // ── Final save ────────────────────────────────────────────────────────────
    ckpt_manager.save_model(&model)?;
    tracing::info!("Final weights saved");

    println!("Training Complete. Final loss: {:.6}", final_loss);
    Ok(())
}
