// ============================================================
// Layer 5 — GLD Predictor Model
// ============================================================
use burn::{
    nn::{Linear, LinearConfig},
    prelude::*,
    tensor::activation::relu,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct GldPredictorConfig {
    /// Input width — the number of predictor features per row
    pub input_size: usize,

    /// Width of both hidden layers
    pub hidden_size: usize,
}

impl GldPredictorConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> GldPredictor<B> {
        GldPredictor {
            layer1: LinearConfig::new(self.input_size, self.hidden_size).init(device),
            layer2: LinearConfig::new(self.hidden_size, self.hidden_size).init(device),
            // One unit out: the (normalized) GLD price
            output: LinearConfig::new(self.hidden_size, 1).init(device),
        }
    }
}

/// Feed-forward network predicting the price of $GLD.
/// Three affine layers; ReLU after every layer, including the
/// output head — predictions are therefore never negative.
#[derive(Module, Debug)]
pub struct GldPredictor<B: Backend> {
    pub layer1: Linear<B>,
    pub layer2: Linear<B>,
    pub output: Linear<B>,
}

impl<B: Backend> GldPredictor<B> {
    /// features: [batch, n_features] → predictions: [batch, 1]
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = relu(self.layer1.forward(features));
        let x = relu(self.layer2.forward(x));

        // The rectifier on the output head clips negative price
        // predictions to zero
        relu(self.output.forward(x))
    }

    /// Forward pass plus mean-absolute-error loss against the targets.
    ///
    /// targets: [batch] — unsqueezed to [batch, 1] to line up with
    /// the prediction shape before the elementwise difference.
    pub fn forward_loss(
        &self,
        features: Tensor<B, 2>,
        targets:  Tensor<B, 1>,
    ) -> (Tensor<B, 1>, Tensor<B, 2>) {
        let prediction = self.forward(features);
        let targets: Tensor<B, 2> = targets.unsqueeze_dim(1);

        // L1 / mean absolute error: mean(|prediction - target|)
        let loss = (prediction.clone() - targets).abs().mean();

        (loss, prediction)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::ndarray::NdArrayDevice;
    use rand::Rng;

    type TestBackend = burn::backend::NdArray;

    fn random_batch(rows: usize, cols: usize, device: &NdArrayDevice) -> Tensor<TestBackend, 2> {
        let mut rng = rand::thread_rng();
        let flat: Vec<f32> = (0..rows * cols).map(|_| rng.gen_range(-5.0_f32..5.0)).collect();
        Tensor::<TestBackend, 1>::from_floats(flat.as_slice(), device).reshape([rows, cols])
    }

    #[test]
    fn test_output_shape() {
        let device = NdArrayDevice::default();
        let model: GldPredictor<TestBackend> = GldPredictorConfig::new(9, 12).init(&device);

        let prediction = model.forward(random_batch(4, 9, &device));
        assert_eq!(prediction.dims(), [4, 1]);
    }

    #[test]
    fn test_predictions_are_never_negative() {
        // The final ReLU guarantees this for ANY input and ANY weights
        let device = NdArrayDevice::default();
        let model: GldPredictor<TestBackend> = GldPredictorConfig::new(9, 12).init(&device);

        let prediction = model.forward(random_batch(32, 9, &device));
        assert!(prediction.into_data().value.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_loss_is_scalar_and_non_negative() {
        let device = NdArrayDevice::default();
        let model: GldPredictor<TestBackend> = GldPredictorConfig::new(3, 12).init(&device);

        let features = random_batch(8, 3, &device);
        let targets  = Tensor::<TestBackend, 1>::from_floats(
            [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8].as_slice(),
            &device,
        );

        let (loss, prediction) = model.forward_loss(features, targets);
        assert_eq!(prediction.dims(), [8, 1]);
        assert_eq!(loss.dims(), [1]);
        assert!(loss.into_scalar() >= 0.0);
    }
}
