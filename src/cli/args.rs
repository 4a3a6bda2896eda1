//! Command line argument parsing for the percept binaries using clap.

use std::path::PathBuf;

use clap::{Args, Parser};
use log::LevelFilter;

use crate::cli::output::{AVERAGED_MODEL_FILE, PREDICTIONS_FILE, VANILLA_MODEL_FILE};
use crate::ml::perceptron::DEFAULT_EPOCHS;

/// Verbosity flags shared by both binaries.
#[derive(Args, Debug, Clone, Default)]
pub struct VerbosityArgs {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl VerbosityArgs {
    /// Get the effective verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    /// Log level filter matching the verbosity level.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity() {
            0 => LevelFilter::Error, // Quiet mode
            1 => LevelFilter::Warn,  // Default
            2 => LevelFilter::Info,  // Verbose
            _ => LevelFilter::Debug, // Very verbose (3+)
        }
    }
}

/// perceplearn - train vanilla and averaged perceptron models
#[derive(Parser, Debug, Clone)]
#[command(name = "perceplearn")]
#[command(about = "Train vanilla and averaged perceptron review classifiers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LearnArgs {
    /// Labeled training file (`<id> <True|Fake> <Pos|Neg> <words>...` per line)
    #[arg(value_name = "TRAIN_FILE")]
    pub train_file: PathBuf,

    /// Directory receiving the model files
    #[arg(
        short,
        long,
        value_name = "DIR",
        default_value = ".",
        env = "PERCEPT_OUTPUT_DIR"
    )]
    pub output_dir: PathBuf,

    /// Number of passes over the training data
    #[arg(long, default_value_t = DEFAULT_EPOCHS)]
    pub epochs: usize,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,
}

impl LearnArgs {
    /// Path of the vanilla model file.
    pub fn vanilla_model_path(&self) -> PathBuf {
        self.output_dir.join(VANILLA_MODEL_FILE)
    }

    /// Path of the averaged model file.
    pub fn averaged_model_path(&self) -> PathBuf {
        self.output_dir.join(AVERAGED_MODEL_FILE)
    }
}

/// percepclassify - label reviews with a trained perceptron model
#[derive(Parser, Debug, Clone)]
#[command(name = "percepclassify")]
#[command(about = "Classify reviews with a trained perceptron model")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ClassifyArgs {
    /// Model file written by perceplearn
    #[arg(value_name = "MODEL_FILE")]
    pub model_file: PathBuf,

    /// Unlabeled data file (`<id> <ignored> <ignored> <words>...` per line)
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Output file for predictions
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = PREDICTIONS_FILE,
        env = "PERCEPT_OUTPUT"
    )]
    pub output: PathBuf,

    #[command(flatten)]
    pub verbosity: VerbosityArgs,
}
