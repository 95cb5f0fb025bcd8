// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// Saves and restores the trained model using Burn's
// CompactRecorder.
//
// What gets saved:
//   1. Model weights (model.mpk.gz)  — all learned parameters
//   2. model_config.json             — the architecture
//
// Why save the config separately?
//   When loading for inference, we need the exact architecture
//   (num_classes, embedding_dim, hidden_size) to rebuild the
//   model before the weights can be loaded into it.
//
// Burn's CompactRecorder:
//   - Serialises model parameters to MessagePack format
//   - Compresses with gzip for smaller file size
//   - Type-safe: loading fails if the architecture doesn't match
//
// Reference: Burn Book §5 (Records and Checkpointing)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
    tensor::backend::AutodiffBackend,
};

use crate::ml::model::{ParaphraseModel, ParaphraseModelConfig};

/// Manages the single final model bundle in one directory.
pub struct CheckpointManager {
    dir: PathBuf,
}

impl CheckpointManager {
    /// Create a new CheckpointManager.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        fs::create_dir_all(&dir).ok();
        Self { dir }
    }

    /// Save the trained model's weights.
    pub fn save_model<B: AutodiffBackend>(&self, model: &ParaphraseModel<B>) -> Result<()> {
        // Recorder appends its own extension to the path
        let path = self.dir.join("model");

        CompactRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| {
                format!("Failed to save model to '{}'", path.display())
            })?;

        tracing::info!("Model saved to '{}'", self.dir.display());
        Ok(())
    }

    /// Load saved weights into a freshly built model of the same
    /// architecture. A missing or mismatched bundle is fatal.
    pub fn load_model<B: Backend>(
        &self,
        model:  ParaphraseModel<B>,
        device: &B::Device,
    ) -> Result<ParaphraseModel<B>> {
        let path = self.dir.join("model");

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!(
                    "Cannot load model '{}'. Have you trained the model first?",
                    path.display()
                )
            })?;

        Ok(model.load_record(record))
    }

    /// Save the model architecture next to the weights.
    /// Must happen before training completes so a crash-free run
    /// always leaves a loadable pair behind.
    pub fn save_config(&self, cfg: &ParaphraseModelConfig) -> Result<()> {
        let path = self.dir.join("model_config.json");
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write model config to '{}'", path.display()))?;

        tracing::debug!("Saved model config to '{}'", path.display());
        Ok(())
    }

    /// Load the architecture the saved weights were trained with.
    pub fn load_config(&self) -> Result<ParaphraseModelConfig> {
        let path = self.dir.join("model_config.json");

        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read model config from '{}'. \
                     Make sure you have run 'train' before 'predict'.",
                    path.display()
                )
            })?;

        Ok(serde_json::from_str(&json)?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_config_json_round_trip() {
        let cfg = ParaphraseModelConfig::new(10)
            .with_embedding_dim(8)
            .with_hidden_size(4);

        let json = serde_json::to_string(&cfg).unwrap();
        let back: ParaphraseModelConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.num_classes,   10);
        assert_eq!(back.embedding_dim, 8);
        assert_eq!(back.hidden_size,   4);
    }
}
