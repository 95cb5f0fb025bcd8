// ============================================================
// Layer 2 — VocabUseCase
// ============================================================
// Builds the standalone vocabulary document: same CSV scan as
// conversion, but only the vocabulary is kept and tokens that
// are numeric literals never receive an ID. This is the
// vocabulary reused at inference time.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::materializer::build_vocabulary;
use crate::data::reader::CsvPairReader;
use crate::infra::dataset_store;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabConfig {
    pub input_path:  String,
    pub output_path: String,
}

pub struct VocabUseCase {
    config: VocabConfig,
}

impl VocabUseCase {
    pub fn new(config: VocabConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        tracing::info!("Building vocabulary from '{}'", cfg.input_path);
        let mut source = CsvPairReader::open(&cfg.input_path)?;

        let vocab = build_vocabulary(&mut source)?;

        dataset_store::save_vocabulary(&cfg.output_path, &vocab)?;
        Ok(())
    }
}
