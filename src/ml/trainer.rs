// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Drives the Trainable over the chunk loader's batches, one
// chunk at a time, in dataset order.
//
// Per chunk: fit (forward, loss, backward, Adam step) for the
// configured number of epochs, validation loss on the trailing
// held-out rows, then the batch is dropped before the next one
// is materialized — peak tensor memory stays at one chunk.
//
// A failed fit is logged and the loop moves on; one bad chunk
// never aborts the run. After the loader is exhausted the model
// is persisted once.
//
// Key Burn insight:
//   - Training uses TrainBackend (Autodiff<Wgpu>) for gradients
//   - model.valid() returns the model on ValidBackend (Wgpu)
//   - Validation tensors must be built on ValidBackend too
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use std::path::Path;

use anyhow::Result;
use burn::{
    module::AutodiffModule,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
};

use crate::data::loader::ChunkedBatchLoader;
use crate::domain::batch::Batch;
use crate::domain::traits::{FitReport, Trainable};
use crate::infra::checkpoint::CheckpointManager;
use crate::infra::metrics::{ChunkMetrics, MetricsLogger};
use crate::ml::model::{ParaphraseModel, ParaphraseModelConfig};

type TrainBackend = burn::backend::Autodiff<burn::backend::Wgpu>;
type ValidBackend = burn::backend::Wgpu;

/// Hyperparameters for fitting one chunk.
#[derive(Debug, Clone, Copy)]
pub struct FitSettings {
    pub lr:               f64,
    pub epochs_per_chunk: usize,
    pub validation_split: f64,
}

// ─── ParaphraseTrainer ────────────────────────────────────────────────────────
/// The burn-backed Trainable: owns the model, the Adam state,
/// and the device for the lifetime of a training run.
///
/// Generic over the optimizer so the Adam state survives from
/// chunk to chunk; build one with `build_trainer`.
pub struct ParaphraseTrainer<O> {
    model:    ParaphraseModel<TrainBackend>,
    optim:    O,
    device:   burn::backend::wgpu::WgpuDevice,
    settings: FitSettings,
}

/// Construct the model and its Adam optimizer on the default
/// WGPU device.
pub fn build_trainer(
    model_cfg: &ParaphraseModelConfig,
    settings:  FitSettings,
) -> ParaphraseTrainer<impl Optimizer<ParaphraseModel<TrainBackend>, TrainBackend>> {
    let device = burn::backend::wgpu::WgpuDevice::default();
    tracing::info!("Using WGPU device: {:?}", device);

    let model: ParaphraseModel<TrainBackend> = model_cfg.init(&device);
    tracing::info!(
        "Model ready: {} classes, embedding_dim={}, hidden_size={}",
        model_cfg.num_classes,
        model_cfg.embedding_dim,
        model_cfg.hidden_size,
    );

    // m = β1*m + (1-β1)*g        (mean)
    // v = β2*v + (1-β2)*g²       (variance)
    // θ = θ - lr * m / (√v + ε)  (update)
    let optim = AdamConfig::new()
        .with_epsilon(1e-8)
        .init::<TrainBackend, ParaphraseModel<TrainBackend>>();

    ParaphraseTrainer { model, optim, device, settings }
}

impl<O> Trainable for ParaphraseTrainer<O>
where
    O: Optimizer<ParaphraseModel<TrainBackend>, TrainBackend>,
{
    fn fit(&mut self, batch: &Batch) -> Result<FitReport> {
        // Trailing rows are held out for validation, without
        // shuffling; a chunk of one row trains on that row.
        let total     = batch.len();
        let val_len   = ((total as f64 * self.settings.validation_split).floor() as usize)
            .min(total.saturating_sub(1));
        let train_len = total - val_len;

        let input = input_tensor::<TrainBackend>(
            &batch.inputs[..train_len], batch.max_length, &self.device,
        );
        let target = target_tensor::<TrainBackend>(
            &batch.targets[..train_len], batch.max_length, batch.num_classes, &self.device,
        );

        // ── Training passes ───────────────────────────────────────────────────
        let mut train_loss = f64::NAN;
        for _ in 0..self.settings.epochs_per_chunk {
            let loss = self.model.forward_loss(input.clone(), target.clone());
            train_loss = loss.clone().into_scalar().elem::<f64>();

            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &self.model);
            self.model = self.optim.step(self.settings.lr, self.model.clone(), grads);
        }

        // ── Validation on the held-out rows ───────────────────────────────────
        // model.valid() → ParaphraseModel<ValidBackend>, no autodiff overhead
        let val_loss = if val_len > 0 {
            let model_valid = self.model.valid();
            let input = input_tensor::<ValidBackend>(
                &batch.inputs[train_len..], batch.max_length, &self.device,
            );
            let target = target_tensor::<ValidBackend>(
                &batch.targets[train_len..], batch.max_length, batch.num_classes, &self.device,
            );
            Some(
                model_valid
                    .forward_loss(input, target)
                    .into_scalar()
                    .elem::<f64>(),
            )
        } else {
            None
        };

        Ok(FitReport { train_loss, val_loss })
    }

    fn save(&self, dir: &Path) -> Result<()> {
        CheckpointManager::new(dir).save_model(&self.model)
    }
}

// ─── Tensor building ──────────────────────────────────────────────────────────
// Rows are flattened sample-major, then reshaped:
// [s1_t1 .. s1_tL, s2_t1 .. sN_tL] → [N, L]

fn input_tensor<B: Backend>(
    rows:       &[Vec<u32>],
    max_length: usize,
    device:     &B::Device,
) -> Tensor<B, 2, Int> {
    let flat: Vec<i32> = rows
        .iter()
        .flat_map(|row| row.iter().map(|&id| id as i32))
        .collect();

    Tensor::<B, 1, Int>::from_ints(flat.as_slice(), device).reshape([rows.len(), max_length])
}

fn target_tensor<B: Backend>(
    grids:       &[Vec<Vec<f32>>],
    max_length:  usize,
    num_classes: usize,
    device:      &B::Device,
) -> Tensor<B, 3> {
    let flat: Vec<f32> = grids
        .iter()
        .flat_map(|grid| grid.iter().flat_map(|row| row.iter().copied()))
        .collect();

    Tensor::<B, 1>::from_floats(flat.as_slice(), device)
        .reshape([grids.len(), max_length, num_classes])
}

// ─── Training loop ────────────────────────────────────────────────────────────
/// Consume `loader` chunk by chunk, fitting `model` on each, and
/// persist the model under `checkpoint_dir` once exhausted.
pub fn run_training(
    loader:         &mut ChunkedBatchLoader,
    model:          &mut dyn Trainable,
    metrics:        &MetricsLogger,
    checkpoint_dir: &Path,
) -> Result<()> {
    let total_chunks = loader.num_batches();
    let mut chunk    = 0usize;

    while let Some(batch) = loader.next_batch() {
        chunk += 1;
        let examples = batch.len();

        match model.fit(&batch) {
            Ok(report) => {
                let val = report
                    .val_loss
                    .map(|v| format!("{v:.4}"))
                    .unwrap_or_else(|| "n/a".to_string());
                println!(
                    "Chunk {:>3}/{} | examples={:>3} | train_loss={:.4} | val_loss={}",
                    chunk, total_chunks, examples, report.train_loss, val,
                );
                metrics.log(&ChunkMetrics::new(
                    chunk, examples, report.train_loss, report.val_loss,
                ))?;
            }
            // One bad chunk forfeits its contribution, nothing more
            Err(e) => {
                tracing::error!("Chunk {}/{} failed, skipping: {e:#}", chunk, total_chunks);
            }
        }

        // Released here, success or failure, before the next
        // chunk's buffers are materialized
        drop(batch);
    }

    model.save(checkpoint_dir)?;
    tracing::info!("Training complete!");
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::{ParaphraseDataset, Sample};
    use crate::data::vocab_builder::VocabularyBuilder;
    use std::cell::RefCell;

    /// Trainable stand-in that records what the loop feeds it.
    struct RecordingTrainable {
        fit_sizes: Vec<usize>,
        fail_on:   Option<usize>,
        saved:     RefCell<bool>,
    }

    impl RecordingTrainable {
        fn new(fail_on: Option<usize>) -> Self {
            Self { fit_sizes: Vec::new(), fail_on, saved: RefCell::new(false) }
        }
    }

    impl Trainable for RecordingTrainable {
        fn fit(&mut self, batch: &Batch) -> Result<FitReport> {
            self.fit_sizes.push(batch.len());
            if self.fail_on == Some(self.fit_sizes.len()) {
                anyhow::bail!("synthetic fit failure");
            }
            Ok(FitReport { train_loss: 1.0, val_loss: None })
        }

        fn save(&self, _dir: &Path) -> Result<()> {
            *self.saved.borrow_mut() = true;
            Ok(())
        }
    }

    fn loader_of(n_samples: usize, chunk_size: usize) -> ChunkedBatchLoader {
        let mut b = VocabularyBuilder::new();
        b.observe("alpha beta");
        let samples = (0..n_samples)
            .map(|_| Sample { text: vec![1], paraphrase: vec![2] })
            .collect();
        ChunkedBatchLoader::new(ParaphraseDataset::new(samples, b.finalize()), chunk_size)
    }

    #[test]
    fn test_loop_visits_every_chunk_in_order_then_saves() {
        let dir        = std::env::temp_dir().join("paraphrase-trainer-test-loop");
        let mut loader = loader_of(5, 2);
        let metrics    = MetricsLogger::new(&dir).unwrap();
        let mut model  = RecordingTrainable::new(None);

        run_training(&mut loader, &mut model, &metrics, &dir).unwrap();

        assert_eq!(model.fit_sizes, vec![2, 2, 1]);
        assert!(*model.saved.borrow());
    }

    #[test]
    fn test_one_failed_chunk_does_not_abort_the_run() {
        let dir        = std::env::temp_dir().join("paraphrase-trainer-test-fail");
        let mut loader = loader_of(4, 2);
        let metrics    = MetricsLogger::new(&dir).unwrap();
        let mut model  = RecordingTrainable::new(Some(1));

        run_training(&mut loader, &mut model, &metrics, &dir).unwrap();

        // Both chunks were attempted despite the first failing
        assert_eq!(model.fit_sizes, vec![2, 2]);
        assert!(*model.saved.borrow());
    }
}
