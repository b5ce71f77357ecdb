// ============================================================
// Layer 3 — PriceRecord Domain Type
// ============================================================
// Represents one row of the market data table in domain terms:
//   - a vector of numeric predictor features
//     (index prices, currency rates, related commodities, ...)
//   - the target value being predicted (the GLD price)
//
// By the time a PriceRecord exists, the date column has already
// been dropped and every remaining cell has been parsed to f64 —
// the record is format-agnostic and knows nothing about CSV.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// One observation: predictor features plus the price to predict.
///
/// Values are raw (un-normalized) — scaling to [0,1] happens later
/// in the data pipeline, per split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    /// The predictor columns, in CSV column order
    pub features: Vec<f64>,

    /// The GLD price for this row — what the network learns to predict
    pub target: f64,
}

impl PriceRecord {
    /// Create a new PriceRecord from parsed feature values and a target.
    pub fn new(features: Vec<f64>, target: f64) -> Self {
        Self { features, target }
    }

    /// Number of predictor features in this record.
    /// The model's input width must match this.
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}
