// ============================================================
// Layer 4 — Vocabulary Builder
// ============================================================
// Owns the mutable vocabulary during the corpus scan and
// freezes it when the scan completes.
//
// The lifecycle is construct → observe* → finalize: the builder
// is the only place the vocabulary is ever mutated, and
// `finalize` hands out an immutable Vocabulary that every
// downstream consumer shares read-only.
//
// Two observation modes:
//   observe             — every unseen token gets the next ID
//   observe_non_numeric — additionally refuses tokens that are
//                         numeric literals; used when building
//                         a vocabulary for reuse outside the
//                         dataset it was scanned from
//
// Reference: Rust Book §8 (HashMaps)

use crate::data::tokenizer::tokenize;
use crate::domain::vocabulary::Vocabulary;

/// Accumulates a vocabulary over a corpus scan, then freezes it.
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    vocab: Vocabulary,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `text` and assign the next ID to each token not
    /// yet seen. Re-observing a known token is a no-op.
    pub fn observe(&mut self, text: &str) {
        for token in tokenize(text) {
            self.vocab.insert(&token);
        }
    }

    /// Like `observe`, but numeric-literal tokens never get an ID.
    pub fn observe_non_numeric(&mut self, text: &str) {
        for token in tokenize(text) {
            if !is_numeric_literal(&token) {
                self.vocab.insert(&token);
            }
        }
    }

    /// Read access to the vocabulary as built so far
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Freeze the builder into an immutable vocabulary
    pub fn finalize(self) -> Vocabulary {
        self.vocab
    }
}

/// Whether `token` is a numeric literal.
///
/// Decided with an actual parse rather than coercion rules.
/// The leading-digit guard is load-bearing: tokens are already
/// lowercase alphanumeric runs, and words like "inf" or "nan"
/// parse as f64 but are not numeric literals in the corpus.
pub fn is_numeric_literal(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_digit()) && token.parse::<f64>().is_ok()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_a_strictly_increasing_sequence() {
        let mut b = VocabularyBuilder::new();
        b.observe("hello world");
        b.observe("hi earth");

        let v = b.finalize();
        assert_eq!(v.id_of("hello"), Some(1));
        assert_eq!(v.id_of("world"), Some(2));
        assert_eq!(v.id_of("hi"),    Some(3));
        assert_eq!(v.id_of("earth"), Some(4));
    }

    #[test]
    fn test_reobserving_never_changes_an_id() {
        let mut b = VocabularyBuilder::new();
        b.observe("hello world");
        b.observe("world hello world");

        let v = b.finalize();
        assert_eq!(v.id_of("hello"), Some(1));
        assert_eq!(v.id_of("world"), Some(2));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_observation_is_case_insensitive() {
        let mut b = VocabularyBuilder::new();
        b.observe("Hello HELLO hello");
        assert_eq!(b.vocabulary().len(), 1);
    }

    #[test]
    fn test_non_numeric_mode_skips_number_tokens() {
        let mut b = VocabularyBuilder::new();
        b.observe_non_numeric("meet at 1030 tomorrow");

        let v = b.finalize();
        assert_eq!(v.id_of("meet"),     Some(1));
        assert_eq!(v.id_of("at"),       Some(2));
        // "1030" was never assigned an ID, so "tomorrow" follows "at"
        assert_eq!(v.id_of("1030"),     None);
        assert_eq!(v.id_of("tomorrow"), Some(3));
    }

    #[test]
    fn test_numeric_literal_predicate() {
        assert!(is_numeric_literal("42"));
        assert!(is_numeric_literal("1030"));
        // scientific notation survives the alphanumeric tokenizer
        assert!(is_numeric_literal("1e5"));

        assert!(!is_numeric_literal("abc123"));
        assert!(!is_numeric_literal("4th"));
        // parse::<f64> accepts these, the corpus does not
        assert!(!is_numeric_literal("inf"));
        assert!(!is_numeric_literal("nan"));
        assert!(!is_numeric_literal(""));
    }
}
