// ============================================================
// Layer 4 — CSV Pair Reader
// ============================================================
// Reads the line-oriented source of (text, paraphrase) pairs.
//
// Format contract:
//   - the first line is a header and is always discarded
//   - each data line is split on the FIRST comma only into
//     exactly two fields; there is no quoting or escaping, so
//     a comma inside the text field corrupts the split — a
//     documented limitation of the format, not something this
//     reader tries to repair
//   - a line with no comma, or with an empty field, is dropped
//
// Dropped lines are counted rather than silently discarded so
// the caller can report how much of the corpus was lost.
//
// An unreadable file is a fatal error; a malformed line never is.
//
// Reference: Rust Book §12 (Reading a File)
//            Rust Book §13 (Iterators)

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::pair::TextPair;
use crate::domain::traits::PairSource;

/// Streams retained (text, paraphrase) records off a delimited
/// line source, counting the lines it drops.
pub struct CsvPairReader<R: BufRead> {
    lines:   Lines<R>,
    skipped: usize,
}

impl CsvPairReader<BufReader<File>> {
    /// Open a CSV file and position the reader past its header.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Cannot read pair source '{}'", path.display()))?;
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead> CsvPairReader<R> {
    /// Wrap any buffered reader. The header line is consumed
    /// here, unconditionally — even a malformed header is just
    /// a header.
    pub fn new(reader: R) -> Result<Self> {
        let mut lines = reader.lines();
        lines.next().transpose().context("Cannot read header line")?;
        Ok(Self { lines, skipped: 0 })
    }
}

impl<R: BufRead> PairSource for CsvPairReader<R> {
    fn next_pair(&mut self) -> Option<Result<TextPair>> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                // An I/O failure mid-file is a source failure,
                // not a malformed record
                Err(e) => return Some(Err(e).context("Failed reading pair source")),
            };

            match split_pair(&line) {
                Some(pair) => return Some(Ok(pair)),
                None => {
                    self.skipped += 1;
                    tracing::debug!("Dropping malformed line: '{}'", line);
                }
            }
        }
    }

    fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Split a data line on its first comma into two non-empty
/// fields. Returns None for anything else.
fn split_pair(line: &str) -> Option<TextPair> {
    let (text, paraphrase) = line.split_once(',')?;
    if text.is_empty() || paraphrase.is_empty() {
        return None;
    }
    Some(TextPair::new(text, paraphrase))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(input: &str) -> (Vec<TextPair>, usize) {
        let mut reader = CsvPairReader::new(Cursor::new(input.to_string())).unwrap();
        let mut pairs  = Vec::new();
        while let Some(pair) = reader.next_pair() {
            pairs.push(pair.unwrap());
        }
        (pairs, reader.skipped())
    }

    #[test]
    fn test_header_is_always_skipped() {
        let (pairs, skipped) = read_all("text,paraphrase\nhello,hi\n");
        assert_eq!(pairs, vec![TextPair::new("hello", "hi")]);
        assert_eq!(skipped, 0);
    }

    #[test]
    fn test_splits_on_first_comma_only() {
        let (pairs, _) = read_all("h\na,b,c\n");
        // Everything after the first comma stays in the paraphrase field
        assert_eq!(pairs, vec![TextPair::new("a", "b,c")]);
    }

    #[test]
    fn test_line_without_comma_is_dropped() {
        let (pairs, skipped) = read_all("h\njusttext\nok,fine\n");
        assert_eq!(pairs, vec![TextPair::new("ok", "fine")]);
        assert_eq!(skipped, 1);
    }

    #[test]
    fn test_line_with_empty_field_is_dropped() {
        let (pairs, skipped) = read_all("h\ntext,\n,paraphrase\na,b\n");
        assert_eq!(pairs, vec![TextPair::new("a", "b")]);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn test_empty_file_yields_nothing() {
        let (pairs, skipped) = read_all("");
        assert!(pairs.is_empty());
        assert_eq!(skipped, 0);
    }

    #[test]
    fn test_header_only_yields_nothing() {
        let (pairs, _) = read_all("text,paraphrase\n");
        assert!(pairs.is_empty());
    }
}
