// ============================================================
// Layer 4 — Price Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<PriceSample>
// into backend-ready tensors.
//
// What is a Batcher?
//   A Batcher takes a list of individual samples and stacks
//   them into a single batch tensor, so the backend processes
//   many rows in one forward pass.
//
// How batching works here:
//   Input:  Vec of N PriceSamples, each with F features
//   Output: PriceBatch with a feature tensor of shape [N, F]
//           and a target tensor of shape [N]
//
//   We flatten all features into one long Vec, then reshape:
//   [s1_f1, ..., s1_fF, s2_f1, ..., sN_fF] → [N, F]
//
// Why is this easy here?
//   Every sample has the same feature width — the loader
//   guarantees it because all rows come from one CSV table.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::dataset::PriceSample;

// ─── PriceBatch ───────────────────────────────────────────────────────────────
/// A batch of samples ready for the model forward pass.
///
/// B is the Burn Backend (e.g. NdArray, Autodiff<NdArray>) —
/// generic so the same batcher works for training and evaluation.
#[derive(Debug, Clone)]
pub struct PriceBatch<B: Backend> {
    /// Predictor features — shape: [batch_size, n_features]
    pub features: Tensor<B, 2>,

    /// Normalized GLD prices — shape: [batch_size]
    pub targets: Tensor<B, 1>,
}

// ─── PriceBatcher ─────────────────────────────────────────────────────────────
/// The batcher struct — holds the target device so tensors
/// are created in the right place.
#[derive(Clone, Debug)]
pub struct PriceBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> PriceBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

// ─── Burn Batcher Trait Implementation ────────────────────────────────────────
// This is what makes PriceBatcher work with Burn's DataLoader.
// The DataLoader calls .batch(items) with each mini-batch of samples.
impl<B: Backend> Batcher<PriceSample, PriceBatch<B>> for PriceBatcher<B> {
    fn batch(&self, items: Vec<PriceSample>) -> PriceBatch<B> {
        // The DataLoader never yields an empty batch
        let batch_size = items.len();
        let n_features = items[0].features.len();

        // Flatten Vec<Vec<f64>> into one Vec<f32> in row-major order.
        // The backend's float element is f32, so values narrow here.
        let feature_flat: Vec<f32> = items
            .iter()
            .flat_map(|s| s.features.iter().map(|&x| x as f32))
            .collect();

        let target_flat: Vec<f32> = items
            .iter()
            .map(|s| s.target as f32)
            .collect();

        // 1D tensor from the flat Vec, then reshape to [batch, features]
        let features = Tensor::<B, 1>::from_floats(feature_flat.as_slice(), &self.device)
            .reshape([batch_size, n_features]);

        // Targets stay as a 1D tensor [batch_size]
        let targets = Tensor::<B, 1>::from_floats(target_flat.as_slice(), &self.device);

        PriceBatch { features, targets }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::ndarray::NdArrayDevice;

    type TestBackend = burn::backend::NdArray;

    #[test]
    fn test_batch_shapes() {
        let batcher = PriceBatcher::<TestBackend>::new(NdArrayDevice::default());
        let items = vec![
            PriceSample { features: vec![0.1, 0.2], target: 0.5 },
            PriceSample { features: vec![0.3, 0.4], target: 0.6 },
            PriceSample { features: vec![0.5, 0.6], target: 0.7 },
        ];

        let batch = batcher.batch(items);
        assert_eq!(batch.features.dims(), [3, 2]);
        assert_eq!(batch.targets.dims(), [3]);
    }

    #[test]
    fn test_batch_values_row_major() {
        let batcher = PriceBatcher::<TestBackend>::new(NdArrayDevice::default());
        let items = vec![
            PriceSample { features: vec![1.0, 2.0], target: 10.0 },
            PriceSample { features: vec![3.0, 4.0], target: 20.0 },
        ];

        let batch = batcher.batch(items);
        assert_eq!(batch.features.into_data().value, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(batch.targets.into_data().value, vec![10.0, 20.0]);
    }
}
