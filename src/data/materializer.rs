// ============================================================
// Layer 4 — Dataset Materializer
// ============================================================
// Drives one end-to-end scan of a pair source and produces the
// materialized dataset: numericalized sample pairs plus the
// final vocabulary.
//
// Per retained record, in order:
//   1. observe both fields into the shared builder
//   2. numericalize both fields against the vocabulary state
//      at that point in the scan
//   3. append the resulting Sample
//
// Numericalization is streaming: a sample never reflects tokens
// first introduced by later lines. IDs are append-only, so the
// sample's own tokens map identically under the final
// vocabulary either way.
//
// A second scan mode builds only a vocabulary, with numeric
// tokens filtered out — the variant used when the vocabulary is
// persisted standalone for reuse at inference time.

use anyhow::Result;

use crate::data::dataset::{ParaphraseDataset, Sample};
use crate::data::numericalizer::numericalize;
use crate::data::vocab_builder::VocabularyBuilder;
use crate::domain::traits::PairSource;
use crate::domain::vocabulary::Vocabulary;

/// Accumulates samples and vocabulary over one source scan.
#[derive(Debug, Default)]
pub struct DatasetMaterializer {
    builder: VocabularyBuilder,
    samples: Vec<Sample>,
}

impl DatasetMaterializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume `source` to the end and freeze the result.
    ///
    /// A source-level read failure aborts materialization;
    /// malformed lines were already dropped (and counted) by
    /// the source itself.
    pub fn run<S: PairSource>(mut self, source: &mut S) -> Result<ParaphraseDataset> {
        while let Some(pair) = source.next_pair() {
            let pair = pair?;

            self.builder.observe(&pair.text);
            self.builder.observe(&pair.paraphrase);

            let vocab = self.builder.vocabulary();
            self.samples.push(Sample {
                text:       numericalize(&pair.text, vocab),
                paraphrase: numericalize(&pair.paraphrase, vocab),
            });
        }

        if source.skipped() > 0 {
            tracing::warn!(
                "Dropped {} malformed line(s) from the pair source",
                source.skipped()
            );
        }

        let vocab = self.builder.finalize();
        tracing::info!(
            "Materialized {} samples over a vocabulary of {} tokens",
            self.samples.len(),
            vocab.len()
        );

        Ok(ParaphraseDataset::new(self.samples, vocab))
    }
}

/// Scan `source` building only a vocabulary, with numeric
/// literals excluded.
pub fn build_vocabulary<S: PairSource>(source: &mut S) -> Result<Vocabulary> {
    let mut builder = VocabularyBuilder::new();

    while let Some(pair) = source.next_pair() {
        let pair = pair?;
        builder.observe_non_numeric(&pair.text);
        builder.observe_non_numeric(&pair.paraphrase);
    }

    if source.skipped() > 0 {
        tracing::warn!(
            "Dropped {} malformed line(s) from the pair source",
            source.skipped()
        );
    }

    let vocab = builder.finalize();
    tracing::info!("Built standalone vocabulary of {} tokens", vocab.len());
    Ok(vocab)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::reader::CsvPairReader;
    use std::io::Cursor;

    fn source(csv: &str) -> CsvPairReader<Cursor<String>> {
        CsvPairReader::new(Cursor::new(csv.to_string())).unwrap()
    }

    #[test]
    fn test_two_line_corpus_end_to_end() {
        let mut src = source("text,paraphrase\nhello world,hi earth\nhello there,hi friend\n");
        let ds = DatasetMaterializer::new().run(&mut src).unwrap();

        let v = ds.vocabulary();
        assert_eq!(v.id_of("hello"),  Some(1));
        assert_eq!(v.id_of("world"),  Some(2));
        assert_eq!(v.id_of("hi"),     Some(3));
        assert_eq!(v.id_of("earth"),  Some(4));
        assert_eq!(v.id_of("there"),  Some(5));
        assert_eq!(v.id_of("friend"), Some(6));

        assert_eq!(ds.samples()[0], Sample { text: vec![1, 2], paraphrase: vec![3, 4] });
        assert_eq!(ds.samples()[1], Sample { text: vec![1, 5], paraphrase: vec![3, 6] });
    }

    #[test]
    fn test_samples_keep_corpus_order() {
        let mut src = source("h\na,b\nc,d\ne,f\n");
        let ds = DatasetMaterializer::new().run(&mut src).unwrap();

        assert_eq!(ds.sample_count(), 3);
        assert_eq!(ds.samples()[0].text, vec![1]);
        assert_eq!(ds.samples()[1].text, vec![3]);
        assert_eq!(ds.samples()[2].text, vec![5]);
    }

    #[test]
    fn test_malformed_lines_do_not_become_samples() {
        let mut src = source("h\njusttext\ntext,\nhello,hi\n");
        let ds = DatasetMaterializer::new().run(&mut src).unwrap();
        assert_eq!(ds.sample_count(), 1);
    }

    #[test]
    fn test_within_line_observation_precedes_numericalization() {
        // Both fields are observed before either is numericalized,
        // so a line's text side already sees its paraphrase tokens
        let mut src = source("h\nshared,shared\n");
        let ds = DatasetMaterializer::new().run(&mut src).unwrap();
        assert_eq!(ds.samples()[0], Sample { text: vec![1], paraphrase: vec![1] });
    }

    #[test]
    fn test_vocab_only_scan_filters_numbers() {
        let mut src = source("h\ncall me at 5,ring me\n");
        let v = build_vocabulary(&mut src).unwrap();

        assert_eq!(v.id_of("call"), Some(1));
        assert_eq!(v.id_of("5"),    None);
        assert_eq!(v.id_of("ring"), Some(4));
        assert_eq!(v.len(), 4);
    }
}
