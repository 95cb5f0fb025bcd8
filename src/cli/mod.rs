// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Four commands are supported:
//   1. `convert` — CSV pairs → numeric dataset document
//   2. `vocab`   — CSV pairs → standalone vocabulary document
//   3. `train`   — dataset document → trained model checkpoint
//   4. `predict` — phrase → model output, decoded to words
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ConvertArgs, PredictArgs, TrainArgs, VocabArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "paraphrase-trainer",
    version = "0.1.0",
    about = "Convert text-pair CSVs and train a paraphrase seq2seq model."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Convert(args) => self.run_convert(args),
            Commands::Vocab(args)   => self.run_vocab(args),
            Commands::Train(args)   => self.run_train(args),
            Commands::Predict(args) => self.run_predict(args),
        }
    }

    fn run_convert(&self, args: ConvertArgs) -> Result<()> {
        use crate::application::convert_use_case::ConvertUseCase;

        let use_case = ConvertUseCase::new(args.into());
        use_case.execute()?;

        println!("CSV converted to token IDs.");
        Ok(())
    }

    fn run_vocab(&self, args: VocabArgs) -> Result<()> {
        use crate::application::vocab_use_case::VocabUseCase;

        let use_case = VocabUseCase::new(args.into());
        use_case.execute()?;

        println!("Vocabulary file created.");
        Ok(())
    }

    fn run_train(&self, args: TrainArgs) -> Result<()> {
        use crate::application::train_use_case::TrainUseCase;

        tracing::info!("Starting training on dataset: {}", args.dataset);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = TrainUseCase::new(args.into());
        use_case.execute()?;

        println!("Model trained and saved.");
        Ok(())
    }

    fn run_predict(&self, args: PredictArgs) -> Result<()> {
        use crate::application::predict_use_case::PredictUseCase;

        let use_case = PredictUseCase::new(
            args.checkpoint_dir.clone(),
            args.vocab.clone(),
            args.input_length,
        )?;

        let output = use_case.predict(&args.text)?;
        println!("\nOutput: {}", output);
        Ok(())
    }
}
