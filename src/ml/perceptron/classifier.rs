//! Inference engine applying a trained [`Model`] to unlabeled records.

use std::fmt;

use ahash::AHashMap;
use log::info;

use crate::error::Result;
use crate::ml::corpus::types::{Authenticity, Record, Sentiment};
use crate::ml::features::{FeatureVector, InferenceExtractor};
use crate::ml::perceptron::head::BinaryHead;
use crate::ml::perceptron::model::Model;

/// Predicted labels for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub identifier: String,
    pub authenticity: Authenticity,
    pub sentiment: Sentiment,
}

impl fmt::Display for Prediction {
    /// Output line layout: `<identifier> <True|Fake> <Pos|Neg>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.identifier, self.authenticity, self.sentiment)
    }
}

/// Predictions keyed by identifier, in order of first appearance.
///
/// Inserting an identifier that is already present replaces its prediction
/// but keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct Predictions {
    items: Vec<Prediction>,
    positions: AHashMap<String, usize>,
}

impl Predictions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a prediction, replacing any earlier one for the same identifier.
    pub fn insert(&mut self, prediction: Prediction) {
        match self.positions.get(&prediction.identifier) {
            Some(&position) => self.items[position] = prediction,
            None => {
                self.positions
                    .insert(prediction.identifier.clone(), self.items.len());
                self.items.push(prediction);
            }
        }
    }

    /// Prediction for an identifier.
    pub fn get(&self, identifier: &str) -> Option<&Prediction> {
        self.positions
            .get(identifier)
            .map(|&position| &self.items[position])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = &Prediction> {
        self.items.iter()
    }
}

/// Classifier applying both heads of a model to review records.
#[derive(Debug, Clone)]
pub struct Classifier {
    model: Model,
    extractor: InferenceExtractor,
}

impl Classifier {
    /// Create a classifier using the review analyzer for extraction.
    pub fn new(model: Model) -> Self {
        Self::with_extractor(model, InferenceExtractor::new())
    }

    /// Create a classifier with a custom inference extractor.
    pub fn with_extractor(model: Model, extractor: InferenceExtractor) -> Self {
        Classifier { model, extractor }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Activations `(authenticity, sentiment)` of a feature vector.
    ///
    /// Words outside the model vocabulary contribute nothing, not even the bias.
    pub fn activations(&self, features: &FeatureVector) -> (f64, f64) {
        (
            self.activation(self.model.authenticity(), features),
            self.activation(self.model.sentiment(), features),
        )
    }

    fn activation(&self, head: &BinaryHead, features: &FeatureVector) -> f64 {
        let vocabulary = self.model.vocabulary();
        head.activation_over(features.iter().filter(|(word, _)| vocabulary.contains(word)))
    }

    /// Labels for a feature vector; activation 0 goes to the positive class.
    pub fn classify_features(&self, features: &FeatureVector) -> (Authenticity, Sentiment) {
        let (a1, a2) = self.activations(features);
        (
            Authenticity::from_activation(a1),
            Sentiment::from_activation(a2),
        )
    }

    /// Predict the labels of one record. Any labels on the record are ignored.
    pub fn predict(&self, record: &Record) -> Result<Prediction> {
        let features = self.extractor.extract(&record.review)?;
        let (authenticity, sentiment) = self.classify_features(&features);

        Ok(Prediction {
            identifier: record.identifier.clone(),
            authenticity,
            sentiment,
        })
    }

    /// Predict every record, keyed by identifier.
    pub fn classify(&self, records: &[Record]) -> Result<Predictions> {
        let mut predictions = Predictions::new();
        for record in records {
            predictions.insert(self.predict(record)?);
        }
        info!(
            "Classified {} records ({} distinct identifiers)",
            records.len(),
            predictions.len()
        );
        Ok(predictions)
    }
}
