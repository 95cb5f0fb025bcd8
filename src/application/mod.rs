// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// one specific goal per use case. Rules for this layer:
//   - No tensor math or model code here
//   - No UI or printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern

// CSV → materialized dataset document
pub mod convert_use_case;

// CSV → standalone vocabulary document (numeric filter on)
pub mod vocab_use_case;

// Materialized dataset → trained model checkpoint
pub mod train_use_case;

// Input phrase → decoded model output
pub mod predict_use_case;
