// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles cross-cutting concerns that don't belong in
// any specific business layer:
//
//   checkpoint.rs — Saving and loading model weights
//                   Uses Burn's CompactRecorder to serialise
//                   model parameters to disk. Also saves/loads
//                   the training and model configs as JSON so a
//                   later run can rebuild the exact network.
//
//   metrics.rs    — Training metrics logging
//                   Writes the per-epoch loss to a CSV file
//                   for later analysis and plotting.
//
// Reference: Rust Book §7 (Modules)
//            Burn Book §5 (Checkpointing)

/// Model weight and config persistence
pub mod checkpoint;

/// Training metrics CSV logger
pub mod metrics;
