// ============================================================
// Layer 4 — Word Tokenizer
// ============================================================
// Splits raw text into lowercase word tokens.
//
// The rule is fixed: lowercase the input, then take the runs
// of alphanumeric characters. Punctuation and whitespace act
// as separators and are never emitted as tokens themselves.
//
//   "Hello, world!"  →  ["hello", "world"]
//   "it's 2-fold"    →  ["it", "s", "2", "fold"]
//
// Deterministic, no side effects. Empty input (or input that
// is all punctuation) yields an empty sequence.
//
// Reference: Rust Book §8 (Strings in Rust)

/// Split `text` into lowercase alphanumeric word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_words() {
        assert_eq!(tokenize("Hello World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_punctuation_separates_but_is_not_emitted() {
        assert_eq!(tokenize("hi, there!"), vec!["hi", "there"]);
        assert_eq!(tokenize("it's"),       vec!["it", "s"]);
    }

    #[test]
    fn test_digits_are_tokens() {
        assert_eq!(tokenize("room 42"), vec!["room", "42"]);
    }

    #[test]
    fn test_empty_and_punctuation_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("?!... --").is_empty());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(tokenize("a B c"), tokenize("a B c"));
    }
}
