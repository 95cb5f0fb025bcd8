// ============================================================
// Layer 4 — Chunked Batch Loader
// ============================================================
// Re-reads a materialized dataset and yields fixed-size batches
// for the training loop, one chunk at a time.
//
// Shapes are decided once, up front:
//   max_length  — the longest Text or Paraphrase anywhere in
//                 the dataset; every sequence in every batch is
//                 padded/truncated to it so all batches agree
//   num_classes — the raw vocabulary size, the width of every
//                 one-hot target row
//
// Batches are contiguous, sequential, and non-shuffled: an
// internal cursor advances chunk_size samples per call, the
// final batch may be short, and once the cursor passes the end
// every further call returns None. Total batches =
// ceil(dataset / chunk_size).
//
// Target encoding is deliberately lenient: a token ID outside
// 0..num_classes leaves its one-hot row all-zero ("no signal")
// instead of failing the batch. The unknown ID 0 one-hots to
// column 0.
//
// Chunking exists to bound memory — only one batch's buffers
// are alive at a time; the training loop drops each batch
// before asking for the next.
//
// Reference: Rust Book §8 (Slices)

use burn::data::dataset::Dataset;

use crate::data::dataset::{ParaphraseDataset, Sample};
use crate::domain::batch::Batch;

pub struct ChunkedBatchLoader {
    dataset:     ParaphraseDataset,
    chunk_size:  usize,
    cursor:      usize,
    max_length:  usize,
    num_classes: usize,
}

impl ChunkedBatchLoader {
    /// Build a loader over `dataset`.
    ///
    /// # Panics
    /// Panics if chunk_size is 0 — a zero-sample chunk can
    /// never advance the cursor.
    pub fn new(dataset: ParaphraseDataset, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be at least 1");

        // One pass over the whole dataset, before any batch exists
        let max_length = dataset
            .samples()
            .iter()
            .map(Sample::longest_len)
            .max()
            .unwrap_or(0);
        let num_classes = dataset.vocabulary().len();

        tracing::debug!(
            "Loader ready: {} samples, max_length={}, num_classes={}",
            dataset.sample_count(),
            max_length,
            num_classes
        );

        Self { dataset, chunk_size, cursor: 0, max_length, num_classes }
    }

    /// Padded sequence length shared by every batch
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// One-hot width shared by every batch
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Total number of batches this loader will yield
    pub fn num_batches(&self) -> usize {
        self.dataset.sample_count().div_ceil(self.chunk_size)
    }

    /// The next contiguous chunk as a fixed-shape batch, or None
    /// once the dataset is exhausted. Safe to call repeatedly
    /// after exhaustion.
    pub fn next_batch(&mut self) -> Option<Batch> {
        if self.cursor >= self.dataset.sample_count() {
            return None;
        }

        let start = self.cursor;
        let end   = (start + self.chunk_size).min(self.dataset.sample_count());
        self.cursor = end;

        // Pull the chunk through the Dataset trait — the same
        // access path any other consumer of the dataset gets
        let chunk: Vec<Sample> = (start..end)
            .filter_map(|i| self.dataset.get(i))
            .collect();

        let inputs: Vec<Vec<u32>> = chunk
            .iter()
            .map(|s| pad_array(&s.text, self.max_length))
            .collect();

        let targets: Vec<Vec<Vec<f32>>> = chunk
            .iter()
            .map(|s| {
                let padded = pad_array(&s.paraphrase, self.max_length);
                one_hot_encode(&padded, self.max_length, self.num_classes)
            })
            .collect();

        // Self-check against encoding bugs: every target grid must
        // flatten to batch_len * max_length * num_classes elements.
        // Logged, never raised.
        let expected = chunk.len() * self.max_length * self.num_classes;
        let actual: usize = targets
            .iter()
            .map(|grid| grid.iter().map(Vec::len).sum::<usize>())
            .sum();
        if expected != actual {
            tracing::error!(
                "One-hot size mismatch: expected {} elements, got {}",
                expected,
                actual
            );
        }

        Some(Batch {
            inputs,
            targets,
            max_length:  self.max_length,
            num_classes: self.num_classes,
        })
    }
}

/// Right-pad `seq` with 0 to `length`, then truncate to exactly
/// `length`. Truncation matters when the target length is
/// shorter than the sequence — the corpus maximum never is, but
/// the operation stays total for reuse with other lengths.
pub fn pad_array(seq: &[u32], length: usize) -> Vec<u32> {
    let mut padded = seq.to_vec();
    padded.resize(length, 0);
    padded
}

/// One-hot encode `seq` into a max_length × num_classes grid.
/// Row i carries a single 1 at column seq[i] iff seq[i] is in
/// range; out-of-range IDs leave the row all-zero, as do rows
/// past the end of `seq`.
pub fn one_hot_encode(seq: &[u32], max_length: usize, num_classes: usize) -> Vec<Vec<f32>> {
    let mut encoded = vec![vec![0.0; num_classes]; max_length];
    for (row, &token) in encoded.iter_mut().zip(seq.iter()) {
        if (token as usize) < num_classes {
            row[token as usize] = 1.0;
        }
    }
    encoded
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::vocab_builder::VocabularyBuilder;
    use crate::domain::vocabulary::Vocabulary;

    fn sample(text: Vec<u32>, paraphrase: Vec<u32>) -> Sample {
        Sample { text, paraphrase }
    }

    fn vocab_of(n: usize) -> Vocabulary {
        let mut b = VocabularyBuilder::new();
        let words: Vec<String> = (0..n).map(|i| format!("w{i}")).collect();
        b.observe(&words.join(" "));
        b.finalize()
    }

    fn loader(samples: Vec<Sample>, vocab_size: usize, chunk_size: usize) -> ChunkedBatchLoader {
        ChunkedBatchLoader::new(
            ParaphraseDataset::new(samples, vocab_of(vocab_size)),
            chunk_size,
        )
    }

    // ── pad_array ─────────────────────────────────────────────────────────────

    #[test]
    fn test_pad_array_extends_short_sequences_with_zeros() {
        assert_eq!(pad_array(&[1, 2], 5), vec![1, 2, 0, 0, 0]);
    }

    #[test]
    fn test_pad_array_truncates_long_sequences() {
        assert_eq!(pad_array(&[1, 2, 3, 4], 2), vec![1, 2]);
    }

    #[test]
    fn test_pad_array_exact_length_is_identity() {
        assert_eq!(pad_array(&[7, 8, 9], 3), vec![7, 8, 9]);
    }

    #[test]
    fn test_pad_array_empty_sequence() {
        assert_eq!(pad_array(&[], 3), vec![0, 0, 0]);
    }

    // ── one_hot_encode ────────────────────────────────────────────────────────

    #[test]
    fn test_one_hot_sets_single_column_per_row() {
        let grid = one_hot_encode(&[2, 0], 2, 4);
        assert_eq!(grid[0], vec![0.0, 0.0, 1.0, 0.0]);
        // ID 0 one-hots to column 0
        assert_eq!(grid[1], vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_one_hot_out_of_range_id_leaves_row_zero() {
        let grid = one_hot_encode(&[4, 1], 2, 4);
        assert_eq!(grid[0], vec![0.0; 4]);
        assert_eq!(grid[1], vec![0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_one_hot_rows_past_sequence_end_are_zero() {
        let grid = one_hot_encode(&[1], 3, 2);
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[1], vec![0.0; 2]);
        assert_eq!(grid[2], vec![0.0; 2]);
    }

    #[test]
    fn test_one_hot_every_row_has_at_most_one_signal() {
        let grid = one_hot_encode(&[0, 1, 2, 9], 4, 3);
        for row in &grid {
            let ones = row.iter().filter(|&&x| x == 1.0).count();
            assert!(ones <= 1);
        }
    }

    // ── ChunkedBatchLoader ────────────────────────────────────────────────────

    #[test]
    fn test_batch_count_is_ceiling_of_division() {
        let samples = (0..5).map(|_| sample(vec![1], vec![2])).collect();
        let l = loader(samples, 3, 2);
        assert_eq!(l.num_batches(), 3);
    }

    #[test]
    fn test_batches_are_sequential_and_cover_dataset_once() {
        let samples: Vec<Sample> = (1..=5).map(|i| sample(vec![i], vec![i])).collect();
        let mut l = loader(samples, 6, 2);

        let mut seen = Vec::new();
        let mut lens = Vec::new();
        while let Some(batch) = l.next_batch() {
            lens.push(batch.len());
            for row in &batch.inputs {
                seen.push(row[0]);
            }
        }

        assert_eq!(lens, vec![2, 2, 1]);
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_chunk_size_one_yields_one_batch_per_sample() {
        let samples = vec![sample(vec![1], vec![2]), sample(vec![2], vec![1])];
        let mut l = loader(samples, 2, 1);

        assert_eq!(l.next_batch().unwrap().len(), 1);
        assert_eq!(l.next_batch().unwrap().len(), 1);
        assert!(l.next_batch().is_none());
    }

    #[test]
    fn test_exhausted_loader_keeps_returning_none() {
        let mut l = loader(vec![sample(vec![1], vec![1])], 1, 4);
        assert!(l.next_batch().is_some());
        assert!(l.next_batch().is_none());
        assert!(l.next_batch().is_none());
    }

    #[test]
    fn test_max_length_spans_both_fields_of_all_samples() {
        let samples = vec![
            sample(vec![1], vec![1, 2, 3]),
            sample(vec![1, 2], vec![1]),
        ];
        let l = loader(samples, 3, 2);
        assert_eq!(l.max_length(), 3);
    }

    #[test]
    fn test_batch_rows_are_padded_to_max_length() {
        let samples = vec![sample(vec![1], vec![2, 3])];
        let mut l = loader(samples, 3, 1);

        let batch = l.next_batch().unwrap();
        assert_eq!(batch.inputs[0], vec![1, 0]);
        assert_eq!(batch.targets[0].len(), 2);
        assert_eq!(batch.targets[0][0], vec![0.0, 0.0, 1.0]);
        // ID 3 equals num_classes — lenient all-zero row
        assert_eq!(batch.targets[0][1], vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_empty_dataset_yields_no_batches() {
        let mut l = loader(Vec::new(), 2, 4);
        assert_eq!(l.max_length(), 0);
        assert_eq!(l.num_batches(), 0);
        assert!(l.next_batch().is_none());
    }
}
