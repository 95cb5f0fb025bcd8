// ============================================================
// Layer 3 — Batch Domain Type
// ============================================================
// One fixed-shape training batch: a contiguous slice of the
// dataset with every sequence padded/truncated to the same
// length and the target side one-hot encoded.
//
// A Batch is created lazily by the chunk loader, consumed by
// exactly one fit call, and dropped before the next batch is
// requested — peak memory stays at roughly one batch's buffers.
//
// Kept framework-free (plain Vecs, no tensor types) so the
// domain layer never depends on the ML backend.

/// A fixed-shape batch of padded inputs and one-hot targets.
#[derive(Debug, Clone)]
pub struct Batch {
    /// Padded input ID rows — shape [len][max_length]
    pub inputs: Vec<Vec<u32>>,

    /// One-hot target rows — shape [len][max_length][num_classes]
    pub targets: Vec<Vec<Vec<f32>>>,

    /// The shared padded sequence length
    pub max_length: usize,

    /// Width of each one-hot row
    pub num_classes: usize,
}

impl Batch {
    /// Number of samples in this batch
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}
