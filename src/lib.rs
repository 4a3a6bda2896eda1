//! # percept
//!
//! Bag-of-words perceptron classifiers for short text reviews.
//!
//! Every review carries two binary labels, authenticity (`True`/`Fake`) and
//! sentiment (`Pos`/`Neg`), and every model has one linear head per label.
//!
//! ## Features
//!
//! - Token analysis pipeline (punctuation, case, digit and stop word removal)
//! - Vanilla and averaged perceptron training
//! - JSON model files shared between training and classification
//! - `perceplearn` and `percepclassify` command line tools

pub mod analysis;
pub mod cli;
pub mod error;
pub mod ml;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
