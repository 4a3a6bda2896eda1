//! Machine learning for review classification.
//!
//! - [`corpus`]: record types and the line-oriented input format
//! - [`features`]: bag-of-words extraction and the training vocabulary
//! - [`perceptron`]: trainers, models and the classifier

pub mod corpus;
pub mod features;
pub mod perceptron;
