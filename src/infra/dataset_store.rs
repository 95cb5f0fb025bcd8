// ============================================================
// Layer 6 — Dataset Store
// ============================================================
// JSON persistence for the two documents the pipeline
// materializes:
//
//   dataset file    — { "data": [ {Text, Paraphrase}, ... ],
//                      "vocab": { token: id, ... } }
//   vocabulary file — just the { token: id } mapping, from the
//                     numeric-filtered scan, for reuse at
//                     inference time
//
// Both are written pretty-printed; both are fatal to fail to
// read — a training or prediction run cannot proceed without
// its inputs.
//
// Reference: Rust Book §9 (Error Handling)

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::data::dataset::ParaphraseDataset;
use crate::domain::vocabulary::Vocabulary;

/// Write the materialized dataset document.
pub fn save_dataset(path: impl AsRef<Path>, dataset: &ParaphraseDataset) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(dataset)?;

    fs::write(path, json)
        .with_context(|| format!("Cannot write dataset to '{}'", path.display()))?;

    tracing::info!(
        "Wrote {} samples and {} vocabulary tokens to '{}'",
        dataset.sample_count(),
        dataset.vocabulary().len(),
        path.display()
    );
    Ok(())
}

/// Read a previously materialized dataset document.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<ParaphraseDataset> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read dataset from '{}'", path.display()))?;

    let dataset: ParaphraseDataset = serde_json::from_str(&json)
        .with_context(|| format!("Dataset file '{}' is not valid", path.display()))?;

    tracing::info!(
        "Loaded {} samples and {} vocabulary tokens from '{}'",
        dataset.sample_count(),
        dataset.vocabulary().len(),
        path.display()
    );
    Ok(dataset)
}

/// Write a standalone vocabulary document.
pub fn save_vocabulary(path: impl AsRef<Path>, vocab: &Vocabulary) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(vocab)?;

    fs::write(path, json)
        .with_context(|| format!("Cannot write vocabulary to '{}'", path.display()))?;

    tracing::info!("Wrote {} vocabulary tokens to '{}'", vocab.len(), path.display());
    Ok(())
}

/// Read a standalone vocabulary document.
pub fn load_vocabulary(path: impl AsRef<Path>) -> Result<Vocabulary> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read vocabulary from '{}'", path.display()))?;

    serde_json::from_str(&json)
        .with_context(|| format!("Vocabulary file '{}' is not valid", path.display()))
}
