// ============================================================
// Layer 2 — PredictUseCase
// ============================================================
// Loads the trained model and the standalone vocabulary, then
// maps an input phrase to the model's decoded output.
//
// Both loads are fatal when they fail — there is no prediction
// without a model and the vocabulary it was trained against.

use anyhow::Result;

use crate::domain::vocabulary::Vocabulary;
use crate::infra::checkpoint::CheckpointManager;
use crate::infra::dataset_store;
use crate::ml::inferencer::Inferencer;

pub struct PredictUseCase {
    inferencer:   Inferencer,
    vocab:        Vocabulary,
    input_length: usize,
}

impl PredictUseCase {
    /// Build the use case from persisted artifacts.
    /// `input_length` is the fixed sequence length the model is
    /// fed at inference time.
    pub fn new(
        checkpoint_dir: impl Into<String>,
        vocab_path:     impl Into<String>,
        input_length:   usize,
    ) -> Result<Self> {
        let vocab        = dataset_store::load_vocabulary(vocab_path.into())?;
        let ckpt_manager = CheckpointManager::new(checkpoint_dir.into());
        let inferencer   = Inferencer::from_checkpoint(&ckpt_manager)?;

        Ok(Self { inferencer, vocab, input_length })
    }

    /// Predict a paraphrase for `text`.
    pub fn predict(&self, text: &str) -> Result<String> {
        self.inferencer.predict(text, &self.vocab, self.input_length)
    }
}
