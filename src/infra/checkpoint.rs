// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// Saves and restores model weights using Burn's CompactRecorder.
//
// What gets saved after training:
//   1. Model weights (model.mpk.gz) — all learned parameters
//   2. model_config.json            — network architecture
//   3. train_config.json            — the full run configuration
//
// Why save the configs separately?
//   When loading for evaluation, we need the exact architecture
//   (input width, hidden width) to rebuild the network before
//   the weights can be loaded into it, and the run configuration
//   to re-create the same data splits.
//
// Burn's CompactRecorder:
//   - Serialises model parameters to MessagePack format
//   - Compresses with gzip for smaller file size
//   - Type-safe: loading fails if the architecture doesn't match
//
// Reference: Burn Book §5 (Records and Checkpointing)
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};
use serde_json;

use crate::application::train_use_case::TrainConfig;
use crate::ml::model::{GldPredictor, GldPredictorConfig};

/// Manages saving and loading of the trained model.
/// All files are stored in the configured directory.
pub struct CheckpointManager {
    /// Path to the directory where checkpoint files are stored
    dir: PathBuf,
}

impl CheckpointManager {
    /// Create a new CheckpointManager.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<String>) -> Self {
        let dir = PathBuf::from(dir.into());
        // create_dir_all creates parent directories too, like `mkdir -p`
        // .ok() ignores the error if the directory already exists
        fs::create_dir_all(&dir).ok();
        Self { dir }
    }

    /// Save the final model weights.
    ///
    /// Uses Burn's CompactRecorder which:
    ///   1. Calls model.into_record() to extract all parameters
    ///   2. Serialises to MessagePack binary format
    ///   3. Compresses with gzip
    ///   4. Writes to {dir}/model.mpk.gz
    pub fn save_model<B: Backend>(&self, model: &GldPredictor<B>) -> Result<()> {
        // Build the file path (without extension — recorder adds it)
        let path = self.dir.join("model");

        CompactRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| {
                format!("Failed to save model weights to '{}'", path.display())
            })?;

        tracing::debug!("Saved model weights to '{}'", path.display());
        Ok(())
    }

    /// Load model weights from the saved checkpoint.
    ///
    /// The model parameter must have the correct architecture
    /// (matching the saved checkpoint) or loading will fail.
    /// load_record() returns a new model with the loaded weights.
    pub fn load_model<B: Backend>(
        &self,
        model:  GldPredictor<B>,
        device: &B::Device,
    ) -> Result<GldPredictor<B>> {
        let path = self.dir.join("model");

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!("Cannot load model weights '{}'. Have you trained first?",
                    path.display())
            })?;

        Ok(model.load_record(record))
    }

    /// Save the network architecture config to JSON.
    /// Called by the trainer before the loop starts.
    pub fn save_model_config(&self, cfg: &GldPredictorConfig) -> Result<()> {
        let path = self.dir.join("model_config.json");
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write model config to '{}'", path.display()))?;

        tracing::debug!("Saved model config to '{}'", path.display());
        Ok(())
    }

    /// Load the network architecture config from JSON.
    /// Called by the Evaluator to rebuild the trained network.
    pub fn load_model_config(&self) -> Result<GldPredictorConfig> {
        let path = self.dir.join("model_config.json");

        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read model config from '{}'. \
                     Make sure you have run 'train' before 'evaluate'.",
                    path.display()
                )
            })?;

        Ok(serde_json::from_str(&json)?)
    }

    /// Save the full run configuration to JSON.
    /// This must be written before training starts so `evaluate`
    /// can re-create the same data preparation.
    pub fn save_train_config(&self, cfg: &TrainConfig) -> Result<()> {
        let path = self.dir.join("train_config.json");

        // serde_json::to_string_pretty adds indentation for readability
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved training config to '{}'", path.display());
        Ok(())
    }

    /// Load the run configuration from JSON.
    pub fn load_train_config(&self) -> Result<TrainConfig> {
        let path = self.dir.join("train_config.json");

        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read config from '{}'. \
                     Make sure you have run 'train' before 'evaluate'.",
                    path.display()
                )
            })?;

        Ok(serde_json::from_str(&json)?)
    }
}
