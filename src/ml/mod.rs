// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly — only this one
// and the tensor boundary in the data layer.
//
// What's in this layer:
//
//   model.rs     — The feed-forward regression network
//                  Three affine layers with ReLU activations:
//                  input → 12 hidden → 12 hidden → 1 output
//
//   trainer.rs   — The training loop
//                  Handles forward pass, mean-absolute-error
//                  loss, backward pass, Adam step, loss logging,
//                  and the final weight save
//
//   evaluator.rs — Held-out evaluation
//                  Loads the saved checkpoint, runs the testing
//                  split through the network, reports MAE/RMSE
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)
//            Kingma & Ba (2015) Adam

/// Feed-forward GLD price regression model
pub mod model;

/// Training loop with loss logging and final checkpoint save
pub mod trainer;

/// Evaluation of a trained checkpoint on held-out data
pub mod evaluator;
