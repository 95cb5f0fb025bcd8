use burn::{
    nn::{
        Embedding, EmbeddingConfig,
        Linear, LinearConfig,
        Lstm, LstmConfig,
    },
    prelude::*,
    tensor::activation::log_softmax,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct ParaphraseModelConfig {
    /// One-hot width of the targets; also the projection width
    pub num_classes: usize,

    #[config(default = 32)]
    pub embedding_dim: usize,

    #[config(default = 32)]
    pub hidden_size: usize,
}

impl ParaphraseModelConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> ParaphraseModel<B> {
        // Assignable IDs run 0..=num_classes (0 is the unknown ID and
        // num_classes the last vocabulary entry), so the embedding
        // table carries one extra row on the input side.
        let embedding = EmbeddingConfig::new(self.num_classes + 1, self.embedding_dim)
            .init(device);
        let lstm       = LstmConfig::new(self.embedding_dim, self.hidden_size, true).init(device);
        let projection = LinearConfig::new(self.hidden_size, self.num_classes).init(device);
        ParaphraseModel { embedding, lstm, projection }
    }
}

#[derive(Module, Debug)]
pub struct ParaphraseModel<B: Backend> {
    pub embedding:  Embedding<B>,
    pub lstm:       Lstm<B>,
    pub projection: Linear<B>,
}

impl<B: Backend> ParaphraseModel<B> {
    /// input_ids: [batch, seq_len] → per-position class logits
    /// [batch, seq_len, num_classes]
    pub fn forward(&self, input_ids: Tensor<B, 2, Int>) -> Tensor<B, 3> {
        let embedded = self.embedding.forward(input_ids); // [batch, seq, emb]

        // The recurrent pass keeps the full hidden sequence — every
        // position gets its own class distribution downstream.
        let (_cells, hidden) = self.lstm.forward(embedded, None); // [batch, seq, hidden]

        // Linear applies per position on a rank-3 tensor
        self.projection.forward(hidden) // [batch, seq, classes]
    }

    /// Categorical cross-entropy against one-hot targets.
    ///
    /// All-zero target rows (padding, out-of-range IDs) contribute
    /// nothing to the sum — they are "no signal", not errors.
    pub fn forward_loss(
        &self,
        input_ids: Tensor<B, 2, Int>,
        targets:   Tensor<B, 3>,
    ) -> Tensor<B, 1> {
        let logits    = self.forward(input_ids);
        let log_probs = log_softmax(logits, 2);
        (targets * log_probs).sum_dim(2).neg().mean()
    }
}
