// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load the materialized dataset  (Layer 6 - infra)
//   Step 2: Build the chunk loader         (Layer 4 - data)
//   Step 3: Build the trainable model      (Layer 5 - ml)
//   Step 4: Save the architecture config   (Layer 6 - infra)
//   Step 5: Run the chunk training loop    (Layer 5 - ml)
//
// Reference: Burn Book §5 (Training)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::loader::ChunkedBatchLoader;
use crate::infra::checkpoint::CheckpointManager;
use crate::infra::dataset_store;
use crate::infra::metrics::MetricsLogger;
use crate::ml::model::ParaphraseModelConfig;
use crate::ml::trainer::{build_trainer, run_training, FitSettings};

// ─── Training Configuration ──────────────────────────────────────────────────
// All hyperparameters for a training run. Serialisable so a
// run's settings can be kept alongside its artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub dataset_path:     String,
    pub checkpoint_dir:   String,
    pub chunk_size:       usize,
    pub embedding_dim:    usize,
    pub hidden_size:      usize,
    pub epochs_per_chunk: usize,
    pub validation_split: f64,
    pub lr:               f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            dataset_path:     "data.json".to_string(),
            checkpoint_dir:   "final-model".to_string(),
            chunk_size:       64,
            embedding_dim:    32,
            hidden_size:      32,
            epochs_per_chunk: 1,
            validation_split: 0.1,
            lr:               1e-3,
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end.
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Step 1: Load the materialized dataset ─────────────────────────────
        let dataset = dataset_store::load_dataset(&cfg.dataset_path)?;
        anyhow::ensure!(
            dataset.sample_count() > 0,
            "Dataset '{}' contains no samples",
            cfg.dataset_path
        );

        // ── Step 2: Chunk loader — fixes max_length and num_classes
        //    once, for every batch of the run ────────────────────────────────
        let mut loader = ChunkedBatchLoader::new(dataset, cfg.chunk_size);
        tracing::info!(
            "Training over {} chunk(s): max_length={}, num_classes={}",
            loader.num_batches(),
            loader.max_length(),
            loader.num_classes(),
        );

        // ── Step 3: Build the trainable model ─────────────────────────────────
        let model_cfg = ParaphraseModelConfig::new(loader.num_classes())
            .with_embedding_dim(cfg.embedding_dim)
            .with_hidden_size(cfg.hidden_size);
        let settings = FitSettings {
            lr:               cfg.lr,
            epochs_per_chunk: cfg.epochs_per_chunk,
            validation_split: cfg.validation_split,
        };
        let mut trainer = build_trainer(&model_cfg, settings);

        // ── Step 4: Persist the architecture before training so the
        //    checkpoint directory is self-describing ─────────────────────────
        let ckpt_manager = CheckpointManager::new(&cfg.checkpoint_dir);
        ckpt_manager.save_config(&model_cfg)?;

        // ── Step 5: Run the chunk loop ────────────────────────────────────────
        let metrics = MetricsLogger::new(&cfg.checkpoint_dir)?;
        run_training(
            &mut loader,
            &mut trainer,
            &metrics,
            Path::new(&cfg.checkpoint_dir),
        )?;

        Ok(())
    }
}
