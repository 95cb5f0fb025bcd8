use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::domain::vocabulary::Vocabulary;

/// One numericalized (text, paraphrase) pair.
/// Field names on the wire stay capitalised — that is the shape
/// of the persisted dataset document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(rename = "Text")]
    pub text: Vec<u32>,

    #[serde(rename = "Paraphrase")]
    pub paraphrase: Vec<u32>,
}

impl Sample {
    /// Length of the longer of the two sequences
    pub fn longest_len(&self) -> usize {
        self.text.len().max(self.paraphrase.len())
    }
}

/// The materialized dataset: every sample in corpus order plus
/// the vocabulary frozen when numericalization finished.
///
/// Invariant: every ID in any sample is either 0 (unknown) or
/// an ID the vocabulary assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParaphraseDataset {
    #[serde(rename = "data")]
    samples: Vec<Sample>,

    #[serde(rename = "vocab")]
    vocabulary: Vocabulary,
}

impl ParaphraseDataset {
    pub fn new(samples: Vec<Sample>, vocabulary: Vocabulary) -> Self {
        Self { samples, vocabulary }
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

impl Dataset<Sample> for ParaphraseDataset {
    fn get(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_field_names() {
        let s    = Sample { text: vec![1, 2], paraphrase: vec![3, 4] };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"Text":[1,2],"Paraphrase":[3,4]}"#);
    }

    #[test]
    fn test_dataset_document_shape() {
        let mut vocab = crate::data::vocab_builder::VocabularyBuilder::new();
        vocab.observe("hello hi");
        let ds = ParaphraseDataset::new(
            vec![Sample { text: vec![1], paraphrase: vec![2] }],
            vocab.finalize(),
        );

        let json = serde_json::to_string(&ds).unwrap();
        assert_eq!(
            json,
            r#"{"data":[{"Text":[1],"Paraphrase":[2]}],"vocab":{"hello":1,"hi":2}}"#
        );

        let back: ParaphraseDataset = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sample_count(), 1);
        assert_eq!(back.vocabulary().id_of("hi"), Some(2));
    }
}
