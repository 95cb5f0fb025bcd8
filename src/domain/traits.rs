// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The seams between the pipeline and its collaborators.
//
// By programming against traits instead of concrete types,
// the materializer and the training loop can be exercised
// without a CSV file or a GPU:
//   - CsvPairReader implements PairSource
//   - ParaphraseTrainer (the burn model) implements Trainable
//   - Tests substitute in-memory implementations of both
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::Path;

use anyhow::Result;

use crate::domain::batch::Batch;
use crate::domain::pair::TextPair;

// ─── PairSource ───────────────────────────────────────────────────────────────
/// A finite, pollable sequence of (text, paraphrase) records.
///
/// The sequence is lazy and not restartable: each call to
/// `next_pair` advances past exactly one retained record.
/// Records that fail the line format are dropped internally and
/// counted, never surfaced as errors; an Err from `next_pair`
/// means the underlying source itself failed and is fatal.
pub trait PairSource {
    /// The next retained record, or None once the source is
    /// exhausted.
    fn next_pair(&mut self) -> Option<Result<TextPair>>;

    /// How many malformed records have been dropped so far
    fn skipped(&self) -> usize;
}

// ─── Trainable ────────────────────────────────────────────────────────────────
/// Losses reported by one fit call over one batch.
#[derive(Debug, Clone, Copy)]
pub struct FitReport {
    /// Mean training loss over the batch's training rows
    pub train_loss: f64,

    /// Validation loss on the held-out rows, when the batch
    /// was large enough to hold any out
    pub val_loss: Option<f64>,
}

/// The model capability the training loop drives but does not
/// implement: fit on one batch, persist to disk at the end.
///
/// The layer algebra and optimizer behind `fit` are opaque to
/// the pipeline; all it relies on is that a failed fit leaves
/// the implementation usable for the next batch.
pub trait Trainable {
    /// Run one round of training (and validation) on `batch`.
    fn fit(&mut self, batch: &Batch) -> Result<FitReport>;

    /// Persist the trained model under `dir`.
    fn save(&self, dir: &Path) -> Result<()>;
}
