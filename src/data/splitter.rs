// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Splits the loaded rows into two sets:
//   - Training set: the first `train_fraction` of rows,
//     used to update model weights
//   - Testing set:  the remainder, held out for evaluation
//
// Why NOT shuffle before splitting?
//   The rows are a time series — each row is one trading day,
//   in chronological order. Shuffling would leak future prices
//   into the training set and make the held-out evaluation
//   meaningless. The split is a simple cut: everything before
//   the cut point trains, everything after it tests.
//
// Because there is no randomness, the same input always
// produces the same two row ranges.
//
// Split ratio: 75% training, 25% testing (configurable)
//
// Reference: Rust Book §8 (Vectors)

/// Split `records` at `train_fraction`, preserving row order.
///
/// # Arguments
/// * `records`        - All loaded rows (consumed by this function)
/// * `train_fraction` - Proportion for training, e.g. 0.75 = 75%
///
/// # Returns
/// A tuple (train_records, test_records)
pub fn split_ordered<T>(mut records: Vec<T>, train_fraction: f64) -> (Vec<T>, Vec<T>) {
    let total = records.len();

    // e.g. 100 rows * 0.75 = 75 → rows [0..75] train, [75..100] test.
    // Truncation (not rounding) matches the usual fractional-index cut.
    let split_at = ((total as f64) * train_fraction) as usize;

    // Clamp to valid range to avoid panics on out-of-range fractions
    let split_at = split_at.min(total);

    // split_off(n) removes elements [n..] from the Vec and returns them
    // After this: records = [0..split_at], test = [split_at..total]
    let test = records.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} training, {} testing rows",
        records.len(),
        test.len(),
    );

    (records, test)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, test)     = split_ordered(items, 0.75);
        assert_eq!(train.len(), 75);
        assert_eq!(test.len(),  25);
    }

    #[test]
    fn test_order_is_preserved() {
        let items: Vec<usize> = (0..10).collect();
        let (train, test)     = split_ordered(items, 0.75);
        // The cut keeps the original ordering on both sides
        assert_eq!(train, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(test,  vec![7, 8, 9]);
    }

    #[test]
    fn test_split_is_deterministic() {
        let a = split_ordered((0..50).collect::<Vec<_>>(), 0.6);
        let b = split_ordered((0..50).collect::<Vec<_>>(), 0.6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_items_preserved() {
        // No items should be lost in the split
        let items: Vec<usize> = (0..53).collect();
        let (train, test)     = split_ordered(items, 0.7);
        assert_eq!(train.len() + test.len(), 53);
    }

    #[test]
    fn test_empty_dataset() {
        let items: Vec<usize> = Vec::new();
        let (train, test)     = split_ordered(items, 0.75);
        assert!(train.is_empty());
        assert!(test.is_empty());
    }

    #[test]
    fn test_full_training_split() {
        // 1.0 fraction means everything goes to training
        let items: Vec<usize> = (0..10).collect();
        let (train, test)     = split_ordered(items, 1.0);
        assert_eq!(train.len(), 10);
        assert!(test.is_empty());
    }
}
