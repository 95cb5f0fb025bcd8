// ============================================================
// Layer 3 — TextPair Domain Type
// ============================================================
// Represents one raw record from the input corpus:
// an input phrase and a paraphrase of it.
//
// This is a plain data struct with no behaviour — by the time
// a TextPair exists, the line it came from has already been
// split and validated (both fields non-empty).
//
// Reference: Rust Book §5 (Structs and Methods)

/// A raw (text, paraphrase) record before tokenisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPair {
    /// The input phrase exactly as it appeared in the source
    pub text: String,

    /// The paraphrase of the input phrase
    pub paraphrase: String,
}

impl TextPair {
    /// Create a new TextPair.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(text: impl Into<String>, paraphrase: impl Into<String>) -> Self {
        Self {
            text:       text.into(),
            paraphrase: paraphrase.into(),
        }
    }
}
