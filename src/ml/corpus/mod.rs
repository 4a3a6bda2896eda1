//! Labeled and unlabeled review records and their line-oriented file format.

pub mod parser;
pub mod types;

pub use parser::{RecordParser, load_inference_data, load_training_data};
pub use types::{Authenticity, Labels, Record, Sentiment};
