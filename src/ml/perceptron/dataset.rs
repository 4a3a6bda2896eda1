//! Extracted training examples in training order.

use ahash::AHashMap;
use log::{debug, info};

use crate::error::{PerceptError, Result};
use crate::ml::corpus::types::{Labels, Record};
use crate::ml::features::{FeatureVector, TrainingExtractor, Vocabulary};

/// A labeled feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub identifier: String,
    pub features: FeatureVector,
    pub labels: Labels,
}

/// The training corpus after feature extraction.
///
/// Every input record is one step of an epoch. Records are keyed by
/// identifier: a repeated identifier keeps its step in the order, but all of
/// its steps use the features and labels of its last occurrence.
#[derive(Debug, Clone, Default)]
pub struct TrainingSet {
    examples: Vec<Example>,
    order: Vec<usize>,
    vocabulary: Vocabulary,
}

impl TrainingSet {
    /// Extract features from labeled records with the review analyzer.
    pub fn from_records(records: &[Record]) -> Result<Self> {
        Self::from_records_with(records, TrainingExtractor::new())
    }

    /// Extract features from labeled records with a custom extractor.
    pub fn from_records_with(records: &[Record], mut extractor: TrainingExtractor) -> Result<Self> {
        let mut examples: Vec<Example> = Vec::new();
        let mut positions: AHashMap<String, usize> = AHashMap::new();
        let mut order = Vec::with_capacity(records.len());

        for record in records {
            let labels = record.labels.ok_or_else(|| {
                PerceptError::input_format(format!(
                    "record {} has no labels and cannot be used for training",
                    record.identifier
                ))
            })?;
            let example = Example {
                identifier: record.identifier.clone(),
                features: extractor.extract(&record.review)?,
                labels,
            };

            match positions.get(&record.identifier) {
                Some(&position) => {
                    debug!("Duplicate identifier {} replaces earlier record", record.identifier);
                    examples[position] = example;
                    order.push(position);
                }
                None => {
                    positions.insert(record.identifier.clone(), examples.len());
                    order.push(examples.len());
                    examples.push(example);
                }
            }
        }

        let vocabulary = extractor.into_vocabulary();
        info!(
            "Extracted {} training records ({} distinct), vocabulary size {}",
            order.len(),
            examples.len(),
            vocabulary.len()
        );

        Ok(TrainingSet {
            examples,
            order,
            vocabulary,
        })
    }

    /// Vocabulary of the training corpus.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of steps per epoch, one per input record.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if there is nothing to train on.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of distinct identifiers.
    pub fn distinct_len(&self) -> usize {
        self.examples.len()
    }

    /// Iterate over the examples of one epoch, in training order.
    pub fn iter(&self) -> impl Iterator<Item = &Example> {
        self.order.iter().map(|&position| &self.examples[position])
    }
}
