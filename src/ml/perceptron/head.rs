//! A single binary classification head: one weight per word plus a bias.

use std::collections::BTreeMap;

use crate::ml::features::{FeatureVector, Vocabulary};

/// Weights and bias of one binary decision (authenticity or sentiment).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BinaryHead {
    weights: BTreeMap<String, f64>,
    bias: f64,
}

impl BinaryHead {
    /// A head with a zero weight for every vocabulary word and a zero bias.
    pub fn zeros(vocabulary: &Vocabulary) -> Self {
        BinaryHead {
            weights: vocabulary.iter().map(|word| (word.to_string(), 0.0)).collect(),
            bias: 0.0,
        }
    }

    /// A head built from existing parameters.
    pub fn from_parts(weights: BTreeMap<String, f64>, bias: f64) -> Self {
        BinaryHead { weights, bias }
    }

    /// All weights, sorted by word.
    pub fn weights(&self) -> &BTreeMap<String, f64> {
        &self.weights
    }

    /// Weight of a word, if the head knows it.
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Activation over a feature vector.
    ///
    /// The bias is added once per active feature, not once per example:
    /// `a = Σ_d (w[d] * x[d] + b)`. Model files produced by earlier tools
    /// were trained this way, so the quirk is kept. An empty vector has
    /// activation 0 whatever the bias.
    pub fn activation(&self, features: &FeatureVector) -> f64 {
        self.activation_over(features.iter())
    }

    /// Activation over `(word, count)` pairs; words without a weight are skipped.
    pub fn activation_over<'a, I>(&self, features: I) -> f64
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let mut activation = 0.0;
        for (word, count) in features {
            if let Some(weight) = self.weights.get(word) {
                activation += weight * f64::from(count) + self.bias;
            }
        }
        activation
    }

    /// Whether the example sits on the wrong side of, or on, the boundary.
    pub fn violates(&self, features: &FeatureVector, target: f64) -> bool {
        target * self.activation(features) <= 0.0
    }

    /// Perceptron update: `w[d] += y * x[d]` for every active feature, `b += y`.
    pub fn update(&mut self, features: &FeatureVector, target: f64) {
        for (word, count) in features.iter() {
            let delta = target * f64::from(count);
            match self.weights.get_mut(word) {
                Some(weight) => *weight += delta,
                None => {
                    self.weights.insert(word.to_string(), delta);
                }
            }
        }
        self.bias += target;
    }

    /// Subtract cached sums divided by the final example counter.
    pub(crate) fn subtract_averages(
        &mut self,
        cached_weights: &BTreeMap<String, f64>,
        cached_bias: f64,
        counter: f64,
    ) {
        for (word, weight) in self.weights.iter_mut() {
            if let Some(cached) = cached_weights.get(word) {
                *weight -= cached / counter;
            }
        }
        self.bias -= cached_bias / counter;
    }
}
