// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting persistence concerns:
//
//   dataset_store.rs — the materialized dataset JSON and the
//                      standalone vocabulary JSON
//
//   checkpoint.rs    — model weights via Burn's CompactRecorder
//                      plus the architecture config JSON needed
//                      to rebuild the model for inference
//
//   metrics.rs       — per-chunk loss rows appended to a CSV
//
// Reference: Rust Book §7 (Modules)

/// Dataset and vocabulary JSON persistence
pub mod dataset_store;

/// Model checkpoint saving and loading
pub mod checkpoint;

/// Training metrics CSV logger
pub mod metrics;
