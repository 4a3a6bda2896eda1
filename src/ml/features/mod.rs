//! Bag-of-words features for review records.
//!
//! Review words go through the [`ReviewAnalyzer`](crate::analysis::analyzer::ReviewAnalyzer)
//! and are counted into a sparse [`FeatureVector`]. During training every
//! surviving word is also recorded in the [`Vocabulary`]; the inference-time
//! extractor has no access to a vocabulary at all.

pub mod extractor;
pub mod vector;
pub mod vocabulary;

pub use extractor::{InferenceExtractor, TrainingExtractor};
pub use vector::FeatureVector;
pub use vocabulary::Vocabulary;
