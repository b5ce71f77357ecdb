// ============================================================
// Layer 4 — Min-Max Scaler
// ============================================================
// Rescales every column (features AND target) linearly into
// [0,1] using that column's observed minimum and maximum:
//
//   scaled = (value - min) / (max - min)
//
// Why normalize at all?
//   The raw columns live on wildly different scales (an index
//   around 1300, a currency rate around 1.3). Without rescaling,
//   the large columns dominate the gradients and the small ones
//   barely train.
//
// The scaler is fitted on the same split it transforms — the
// training and testing splits each get their own statistics.
// fit() and transform() are separate steps, so a caller that
// wants train-derived statistics applied to the test split can
// fit once and transform both.
//
// A constant column has max == min; dividing by that zero range
// would produce NaN, so such columns map to 0.0 instead.
//
// Reference: Rust Book §13 (Iterators)

use crate::data::dataset::PriceSample;
use crate::domain::price_record::PriceRecord;

/// Per-column minimum/maximum statistics for one data split.
#[derive(Debug, Clone)]
pub struct MinMaxScaler {
    /// Per-feature-column minimum, in column order
    feature_mins: Vec<f64>,

    /// Per-feature-column maximum, in column order
    feature_maxs: Vec<f64>,

    /// Observed range of the target column
    target_min: f64,
    target_max: f64,
}

impl MinMaxScaler {
    /// Compute column statistics from the given records.
    /// All records must have the same feature count.
    pub fn fit(records: &[PriceRecord]) -> Self {
        let n_features = records.first().map_or(0, PriceRecord::feature_count);

        let mut feature_mins = vec![f64::INFINITY; n_features];
        let mut feature_maxs = vec![f64::NEG_INFINITY; n_features];
        let mut target_min   = f64::INFINITY;
        let mut target_max   = f64::NEG_INFINITY;

        for record in records {
            for (col, &value) in record.features.iter().enumerate() {
                feature_mins[col] = feature_mins[col].min(value);
                feature_maxs[col] = feature_maxs[col].max(value);
            }
            target_min = target_min.min(record.target);
            target_max = target_max.max(record.target);
        }

        Self { feature_mins, feature_maxs, target_min, target_max }
    }

    /// Rescale records into [0,1] using this scaler's statistics.
    /// The result is the normalized sample type the dataset holds.
    pub fn transform(&self, records: &[PriceRecord]) -> Vec<PriceSample> {
        records
            .iter()
            .map(|record| {
                let features = record
                    .features
                    .iter()
                    .enumerate()
                    .map(|(col, &value)| {
                        rescale(value, self.feature_mins[col], self.feature_maxs[col])
                    })
                    .collect();

                let target = rescale(record.target, self.target_min, self.target_max);

                PriceSample { features, target }
            })
            .collect()
    }

    /// Convenience for the common per-split case: fit and transform
    /// on the same records in one call.
    pub fn fit_transform(records: &[PriceRecord]) -> Vec<PriceSample> {
        Self::fit(records).transform(records)
    }
}

/// Map `value` into [0,1] given a column's observed range.
/// A zero-range (constant) column maps to 0.0 rather than NaN.
fn rescale(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range == 0.0 {
        0.0
    } else {
        (value - min) / range
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn record(features: Vec<f64>, target: f64) -> PriceRecord {
        PriceRecord::new(features, target)
    }

    #[test]
    fn test_values_land_in_unit_interval() {
        // Random rows on assorted scales all map into [0,1]
        let mut rng = rand::thread_rng();
        let records: Vec<PriceRecord> = (0..40)
            .map(|_| {
                record(
                    vec![
                        rng.gen_range(1200.0..1400.0),
                        rng.gen_range(0.9..1.5),
                        rng.gen_range(-50.0..50.0),
                    ],
                    rng.gen_range(100.0..200.0),
                )
            })
            .collect();

        for sample in MinMaxScaler::fit_transform(&records) {
            for &v in &sample.features {
                assert!((0.0..=1.0).contains(&v), "feature {v} outside [0,1]");
            }
            assert!((0.0..=1.0).contains(&sample.target));
        }
    }

    #[test]
    fn test_min_maps_to_zero_and_max_to_one() {
        let records = vec![
            record(vec![10.0], 100.0),
            record(vec![20.0], 300.0),
            record(vec![15.0], 200.0),
        ];
        let samples = MinMaxScaler::fit_transform(&records);

        assert_eq!(samples[0].features[0], 0.0);
        assert_eq!(samples[1].features[0], 1.0);
        assert_eq!(samples[2].features[0], 0.5);
        assert_eq!(samples[0].target, 0.0);
        assert_eq!(samples[1].target, 1.0);
        assert_eq!(samples[2].target, 0.5);
    }

    #[test]
    fn test_constant_column_maps_to_zero() {
        // max == min would divide by zero — must come out 0.0, not NaN
        let records = vec![record(vec![7.0], 5.0), record(vec![7.0], 5.0)];
        for sample in MinMaxScaler::fit_transform(&records) {
            assert_eq!(sample.features[0], 0.0);
            assert_eq!(sample.target, 0.0);
        }
    }

    #[test]
    fn test_separate_fit_and_transform() {
        // Statistics from one split can be applied to another
        let train = vec![record(vec![0.0], 0.0), record(vec![10.0], 10.0)];
        let test  = vec![record(vec![5.0], 20.0)];

        let scaler  = MinMaxScaler::fit(&train);
        let samples = scaler.transform(&test);

        assert_eq!(samples[0].features[0], 0.5);
        // Out-of-range values extrapolate past 1.0 — statistics are
        // the fitted split's, not the transformed split's
        assert_eq!(samples[0].target, 2.0);
    }

    #[test]
    fn test_empty_input() {
        let samples = MinMaxScaler::fit_transform(&[]);
        assert!(samples.is_empty());
    }
}
