// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from the raw CSV of text pairs to the fixed-shape
// batches the training loop consumes.
//
// The pipeline flows in this order:
//
//   data.csv
//       │
//       ▼
//   CsvPairReader       → header skip, first-comma split,
//       │                 malformed lines dropped and counted
//       ▼
//   Tokenizer           → lowercase alphanumeric word tokens
//       │
//       ▼
//   VocabularyBuilder   → first-seen IDs from 1; 0 = unknown
//       │
//       ▼
//   Numericalizer       → token sequence → ID sequence
//       │
//       ▼
//   DatasetMaterializer → persisted {data, vocab} document
//       │
//       ▼
//   ChunkedBatchLoader  → sequential chunks, padded to the
//                         corpus max length, targets one-hot
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Lowercase word tokenizer
pub mod tokenizer;

/// Builds the vocabulary over a corpus scan, then freezes it
pub mod vocab_builder;

/// Maps token sequences to ID sequences under a vocabulary
pub mod numericalizer;

/// Streams (text, paraphrase) records off the CSV source
pub mod reader;

/// Numericalized samples plus the frozen vocabulary
pub mod dataset;

/// One-pass scan producing the materialized dataset
pub mod materializer;

/// Sequential fixed-size batches with padding and one-hot targets
pub mod loader;
