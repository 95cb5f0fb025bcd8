// ============================================================
// Layer 4 — Numericalizer
// ============================================================
// Converts a text field into a sequence of vocabulary IDs.
//
// Pure function of its inputs: tokens found in the vocabulary
// map to their stored ID, everything else maps to the reserved
// unknown ID 0. The vocabulary is never mutated here — growth
// happens only in the VocabularyBuilder.

use crate::data::tokenizer::tokenize;
use crate::domain::vocabulary::{Vocabulary, UNKNOWN_ID};

/// Map `text` to a sequence of IDs under `vocab`, with 0 for
/// tokens the vocabulary does not contain.
pub fn numericalize(text: &str, vocab: &Vocabulary) -> Vec<u32> {
    tokenize(text)
        .iter()
        .map(|token| vocab.id_of(token).unwrap_or(UNKNOWN_ID))
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::vocab_builder::VocabularyBuilder;

    #[test]
    fn test_known_tokens_map_to_their_stored_ids() {
        let mut b = VocabularyBuilder::new();
        b.observe("hello world");
        let v = b.finalize();

        assert_eq!(numericalize("world hello", &v), vec![2, 1]);
    }

    #[test]
    fn test_unknown_tokens_map_to_zero() {
        let mut b = VocabularyBuilder::new();
        b.observe("hello world");
        let v = b.finalize();

        assert_eq!(numericalize("hello there", &v), vec![1, 0]);
    }

    #[test]
    fn test_empty_text_maps_to_empty_sequence() {
        let v = Vocabulary::new();
        assert!(numericalize("", &v).is_empty());
    }

    #[test]
    fn test_does_not_grow_the_vocabulary() {
        let mut b = VocabularyBuilder::new();
        b.observe("hello");
        let v = b.finalize();

        numericalize("brand new words", &v);
        assert_eq!(v.len(), 1);
    }
}
