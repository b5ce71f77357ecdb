// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - CsvLoader implements RecordSource
//   - A future ParquetLoader could also implement RecordSource
//   - The application layer only sees RecordSource
//     and works with both without any changes
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::price_record::PriceRecord;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can load price records from a source.
///
/// Implementations:
///   - CsvLoader → loads from a CSV file with a header row
pub trait RecordSource {
    /// Load all available records from this source, in source order.
    /// Returns a Vec of PriceRecords or an error.
    fn load_all(&self) -> Result<Vec<PriceRecord>>;
}
