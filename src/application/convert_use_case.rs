// ============================================================
// Layer 2 — ConvertUseCase
// ============================================================
// Orchestrates dataset materialization:
//
//   Step 1: Open the CSV pair source      (Layer 4 - data)
//   Step 2: Scan it end-to-end, building
//           vocabulary + numeric samples  (Layer 4 - data)
//   Step 3: Persist the {data, vocab}
//           dataset document              (Layer 6 - infra)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::materializer::DatasetMaterializer;
use crate::data::reader::CsvPairReader;
use crate::infra::dataset_store;

/// Paths for one conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    pub input_path:  String,
    pub output_path: String,
}

pub struct ConvertUseCase {
    config: ConvertConfig,
}

impl ConvertUseCase {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        tracing::info!("Materializing pairs from '{}'", cfg.input_path);
        let mut source = CsvPairReader::open(&cfg.input_path)?;

        let dataset = DatasetMaterializer::new().run(&mut source)?;

        dataset_store::save_dataset(&cfg.output_path, &dataset)?;
        Ok(())
    }
}
