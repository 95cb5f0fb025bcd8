// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits defining the core concepts of
// the system. Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no GPU needed)
//   - Easy to swap implementations (just implement the trait)
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A raw (text, paraphrase) record from the source corpus
pub mod pair;

// Ordered token → ID mapping with the reserved unknown ID 0
pub mod vocabulary;

// One fixed-shape padded + one-hot encoded training batch
pub mod batch;

// Core abstractions (traits) that other layers implement
pub mod traits;
