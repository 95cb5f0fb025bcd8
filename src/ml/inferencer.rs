// ============================================================
// Layer 5 — Inferencer
// ============================================================
use anyhow::Result;
use burn::prelude::*;

use crate::data::loader::pad_array;
use crate::data::numericalizer::numericalize;
use crate::domain::vocabulary::Vocabulary;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::model::ParaphraseModel;

type InferBackend = burn::backend::Wgpu;

pub struct Inferencer {
    model:  ParaphraseModel<InferBackend>,
    device: burn::backend::wgpu::WgpuDevice,
}

impl Inferencer {
    /// Rebuild the trained model from its persisted bundle.
    /// Fails (fatally, for the caller) when either the config or
    /// the weights are missing or mismatched.
    pub fn from_checkpoint(ckpt_manager: &CheckpointManager) -> Result<Self> {
        let device = burn::backend::wgpu::WgpuDevice::default();
        let cfg    = ckpt_manager.load_config()?;

        let model: ParaphraseModel<InferBackend> = cfg.init(&device);
        let model = ckpt_manager.load_model(model, &device)?;
        tracing::info!("Model loaded from checkpoint");

        Ok(Self { model, device })
    }

    /// Run one phrase through the model and decode the
    /// per-position argmax back into words.
    ///
    /// The input is numericalized with the same vocabulary the
    /// model was trained against, then padded/truncated to the
    /// fixed input length the model expects. Positions whose
    /// argmax is the unknown/padding class decode to nothing.
    pub fn predict(
        &self,
        text:         &str,
        vocab:        &Vocabulary,
        input_length: usize,
    ) -> Result<String> {
        let ids    = numericalize(text, vocab);
        let padded = pad_array(&ids, input_length);

        let flat: Vec<i32> = padded.iter().map(|&id| id as i32).collect();
        let input = Tensor::<InferBackend, 1, Int>::from_ints(flat.as_slice(), &self.device)
            .reshape([1, input_length]);

        // [1, input_length, num_classes] → argmax over classes
        let logits    = self.model.forward(input);
        let predicted = logits.argmax(2).reshape([input_length]);
        let class_ids = predicted.into_data().convert::<i64>().value;

        tracing::debug!("Predicted class ids: {:?}", class_ids);

        // Column index equals token ID; 0 is unknown and yields
        // no word, as do positions past the vocabulary
        let words: Vec<&str> = class_ids
            .iter()
            .filter_map(|&id| u32::try_from(id).ok())
            .filter_map(|id| vocab.token_of(id))
            .collect();

        Ok(words.join(" "))
    }
}
