// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the raw CSV file
// all the way to backend-ready tensor batches.
//
// The pipeline flows in this order:
//
//   training_data.csv
//       │
//       ▼
//   CsvLoader         → reads rows, drops the date column
//       │
//       ▼
//   split_ordered     → first fraction trains, remainder tests
//       │
//       ▼
//   MinMaxScaler      → rescales each column into [0,1]
//       │
//       ▼
//   PriceDataset      → implements Burn's Dataset trait
//       │
//       ▼
//   PriceBatcher      → stacks samples into tensor batches
//       │
//       ▼
//   DataLoader        → feeds batches to the training loop
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Loads price records from a CSV file using the csv crate
pub mod loader;

/// Order-preserving train/test split
pub mod splitter;

/// Column-wise min-max normalization into [0,1]
pub mod scaler;

/// Implements Burn's Dataset trait for normalized samples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
