// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the four subcommands and all their configurable
// flags. Every constant the reference pipeline hardcodes is a
// defaulted --flag here.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::convert_use_case::ConvertConfig;
use crate::application::train_use_case::TrainConfig;
use crate::application::vocab_use_case::VocabConfig;

/// The four top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a CSV of text pairs into a numeric dataset
    Convert(ConvertArgs),

    /// Build a standalone vocabulary (numeric tokens excluded)
    Vocab(VocabArgs),

    /// Train the paraphrase model on a converted dataset
    Train(TrainArgs),

    /// Run a phrase through a trained model
    Predict(PredictArgs),
}

/// Arguments for the `convert` command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// CSV source: header line, then text,paraphrase per line
    #[arg(long, default_value = "data.csv")]
    pub input: String,

    /// Where to write the {data, vocab} dataset document
    #[arg(long, default_value = "data.json")]
    pub output: String,
}

impl From<ConvertArgs> for ConvertConfig {
    fn from(a: ConvertArgs) -> Self {
        ConvertConfig {
            input_path:  a.input,
            output_path: a.output,
        }
    }
}

/// Arguments for the `vocab` command
#[derive(Args, Debug)]
pub struct VocabArgs {
    /// CSV source: header line, then text,paraphrase per line
    #[arg(long, default_value = "data.csv")]
    pub input: String,

    /// Where to write the token → ID mapping
    #[arg(long, default_value = "vocab.json")]
    pub output: String,
}

impl From<VocabArgs> for VocabConfig {
    fn from(a: VocabArgs) -> Self {
        VocabConfig {
            input_path:  a.input,
            output_path: a.output,
        }
    }
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// The converted dataset produced by `convert`
    #[arg(long, default_value = "data.json")]
    pub dataset: String,

    /// Directory for the model weights, config, and metrics
    #[arg(long, default_value = "final-model")]
    pub checkpoint_dir: String,

    /// Samples per chunk — also the bound on live tensor memory
    #[arg(long, default_value_t = 64)]
    pub chunk_size: usize,

    /// Width of each token's embedding vector
    #[arg(long, default_value_t = 32)]
    pub embedding_dim: usize,

    /// Width of the recurrent hidden state
    #[arg(long, default_value_t = 32)]
    pub hidden_size: usize,

    /// Training passes over each chunk before moving on
    #[arg(long, default_value_t = 1)]
    pub epochs_per_chunk: usize,

    /// Trailing fraction of each chunk held out for validation
    #[arg(long, default_value_t = 0.1)]
    pub validation_split: f64,

    /// Adam learning rate
    #[arg(long, default_value_t = 1e-3)]
    pub lr: f64,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            dataset_path:     a.dataset,
            checkpoint_dir:   a.checkpoint_dir,
            chunk_size:       a.chunk_size,
            embedding_dim:    a.embedding_dim,
            hidden_size:      a.hidden_size,
            epochs_per_chunk: a.epochs_per_chunk,
            validation_split: a.validation_split,
            lr:               a.lr,
        }
    }
}

/// All arguments for the `predict` command
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// The phrase to run through the model
    #[arg(long)]
    pub text: String,

    /// Directory where `train` saved the model
    #[arg(long, default_value = "final-model")]
    pub checkpoint_dir: String,

    /// Standalone vocabulary produced by `vocab`
    #[arg(long, default_value = "vocab.json")]
    pub vocab: String,

    /// Fixed sequence length the model is fed at inference
    #[arg(long, default_value_t = 59)]
    pub input_length: usize,
}
