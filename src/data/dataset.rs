// ============================================================
// Layer 4 — Price Dataset
// ============================================================
use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

/// One fully normalized training sample.
/// Every value has already been min-max scaled into [0,1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSample {
    pub features: Vec<f64>,
    pub target:   f64,
}

impl PriceSample {
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}

pub struct PriceDataset {
    samples: Vec<PriceSample>,
}

impl PriceDataset {
    pub fn new(samples: Vec<PriceSample>) -> Self {
        Self { samples }
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Feature width of the samples — the model's input size.
    /// Zero for an empty dataset.
    pub fn feature_count(&self) -> usize {
        self.samples.first().map_or(0, PriceSample::feature_count)
    }
}

impl Dataset<PriceSample> for PriceDataset {
    fn get(&self, index: usize) -> Option<PriceSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample(target: f64) -> PriceSample {
        PriceSample { features: vec![0.1, 0.2, 0.3], target }
    }

    #[test]
    fn test_get_returns_samples_in_order() {
        let ds = PriceDataset::new(vec![sample(0.1), sample(0.9)]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.get(0).unwrap().target, 0.1);
        assert_eq!(ds.get(1).unwrap().target, 0.9);
        assert!(ds.get(2).is_none());
    }

    #[test]
    fn test_feature_count() {
        let ds = PriceDataset::new(vec![sample(0.5)]);
        assert_eq!(ds.feature_count(), 3);
        assert_eq!(PriceDataset::new(Vec::new()).feature_count(), 0);
    }
}
