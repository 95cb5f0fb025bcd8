// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn for tensor work — only this
// one (the data layer touches burn solely for its Dataset
// trait).
//
// What's in this layer:
//
//   model.rs      — The sequence-to-sequence architecture:
//                   • Token embedding (unknown ID included)
//                   • LSTM keeping the full hidden sequence
//                   • Per-position dense projection to the
//                     vocabulary classes
//                   • Categorical cross-entropy against the
//                     one-hot targets
//
//   trainer.rs    — The chunk-by-chunk training loop and the
//                   Trainable implementation: Adam updates,
//                   trailing validation split, per-chunk
//                   failure isolation, final checkpoint save
//
//   inferencer.rs — Loads the checkpoint, numericalizes and
//                   pads a phrase, decodes the per-position
//                   argmax back into words
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)
//            Hochreiter & Schmidhuber (1997) LSTM

/// Embedding + LSTM + per-position projection model
pub mod model;

/// Chunk training loop and the Trainable implementation
pub mod trainer;

/// Inference engine — loads the checkpoint and predicts
pub mod inferencer;
