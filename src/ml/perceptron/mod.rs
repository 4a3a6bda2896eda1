//! Perceptron training and inference over bag-of-words review features.
//!
//! Every review carries two independent binary labels, so every model has two
//! heads: one for authenticity (`True`/`Fake`) and one for sentiment
//! (`Pos`/`Neg`). Both heads are trained together in a single pass over the
//! same feature vectors.
//!
//! # Architecture
//!
//! - `Trainer` trait: common interface for both training algorithms
//! - `VanillaPerceptron`: classic mistake-driven perceptron
//! - `AveragedPerceptron`: perceptron returning the averaged weights
//! - `TrainingSet`: feature vectors and vocabulary built from labeled records
//! - `Model`: the serializable parameter bundle
//! - `Classifier`: applies a model to unlabeled records
//!
//! # Example
//!
//! ```rust,no_run
//! use percept::ml::corpus::load_training_data;
//! use percept::ml::perceptron::{AveragedPerceptron, Trainer, TrainerConfig, TrainingSet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let records = load_training_data("train-labeled.txt")?;
//! let data = TrainingSet::from_records(&records)?;
//!
//! let trained = AveragedPerceptron::new(TrainerConfig::default()).train(&data)?;
//! trained.model.save("averagedmodel.txt")?;
//! # Ok(())
//! # }
//! ```

mod averaged;
mod classifier;
mod config;
mod dataset;
mod head;
mod model;
mod trainer;
mod vanilla;

// Public exports
pub use averaged::AveragedPerceptron;
pub use classifier::{Classifier, Prediction, Predictions};
pub use config::{DEFAULT_EPOCHS, TrainerConfig};
pub use dataset::{Example, TrainingSet};
pub use head::BinaryHead;
pub use model::Model;
pub use trainer::{Trained, Trainer, TrainingSummary};
pub use vanilla::VanillaPerceptron;
