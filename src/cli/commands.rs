// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `train` and `evaluate`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::train_use_case::TrainConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the GLD price model on CSV market data
    Train(TrainArgs),

    /// Score a trained checkpoint on the held-out testing split
    Evaluate(EvaluateArgs),
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// CSV file with a date column, feature columns, and the target column
    #[arg(long, default_value = "data/training_data.csv")]
    pub data_path: String,

    /// Directory to save the trained weights and configs
    #[arg(long, default_value = "models")]
    pub checkpoint_dir: String,

    /// Name of the column dropped before training
    #[arg(long, default_value = "Date")]
    pub date_column: String,

    /// Name of the column the network learns to predict
    #[arg(long, default_value = "GLD Price")]
    pub target_column: String,

    /// Fraction of rows (from the start of the file) used for training;
    /// the remainder is held out for `evaluate`
    #[arg(long, default_value_t = 0.75)]
    pub split_fraction: f64,

    /// Number of rows processed together in one forward pass
    #[arg(long, default_value_t = 64)]
    pub batch_size: usize,

    /// Number of full passes through the training data
    #[arg(long, default_value_t = 100)]
    pub epochs: usize,

    /// Adam learning rate — too high causes instability,
    /// too low causes slow convergence
    #[arg(long, default_value_t = 0.1)]
    pub lr: f64,

    /// Width of both hidden layers
    #[arg(long, default_value_t = 12)]
    pub hidden_size: usize,

    /// Seed for the backend RNG. Unset = fresh random weights
    /// every run; set it to make a run reproducible
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            data_path:      a.data_path,
            checkpoint_dir: a.checkpoint_dir,
            date_column:    a.date_column,
            target_column:  a.target_column,
            split_fraction: a.split_fraction,
            batch_size:     a.batch_size,
            epochs:         a.epochs,
            lr:             a.lr,
            hidden_size:    a.hidden_size,
            seed:           a.seed,
        }
    }
}

/// All arguments for the `evaluate` command
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Directory where the checkpoint was saved during training
    #[arg(long, default_value = "models")]
    pub checkpoint_dir: String,

    /// Override the CSV path recorded at training time
    #[arg(long)]
    pub data_path: Option<String>,
}
