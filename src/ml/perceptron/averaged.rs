//! Averaged perceptron trainer with deferred averaging.
//!
//! Instead of summing the weight vector after every record, each update at
//! step `c` is also recorded, scaled by `c`, in a cached accumulator. With
//! `c_final` the counter after the last record, the average of all
//! intermediate weight vectors is then
//!
//! ```text
//! w_avg = w - u / c_final        b_avg = b - beta / c_final
//! ```
//!
//! which equals eager averaging in exact arithmetic.

use std::collections::BTreeMap;

use log::debug;

use crate::error::Result;
use crate::ml::features::{FeatureVector, Vocabulary};
use crate::ml::perceptron::config::TrainerConfig;
use crate::ml::perceptron::dataset::TrainingSet;
use crate::ml::perceptron::head::BinaryHead;
use crate::ml::perceptron::model::Model;
use crate::ml::perceptron::trainer::{Trained, Trainer, run_epochs};

/// A head plus its cached accumulators `u` and `beta`.
#[derive(Debug, Clone)]
struct AveragingHead {
    head: BinaryHead,
    cached_weights: BTreeMap<String, f64>,
    cached_bias: f64,
}

impl AveragingHead {
    fn zeros(vocabulary: &Vocabulary) -> Self {
        AveragingHead {
            head: BinaryHead::zeros(vocabulary),
            cached_weights: vocabulary.iter().map(|word| (word.to_string(), 0.0)).collect(),
            cached_bias: 0.0,
        }
    }

    /// Process one record at counter value `counter`. Returns whether the
    /// head was updated.
    fn step(&mut self, features: &FeatureVector, target: f64, counter: f64) -> bool {
        if !self.head.violates(features, target) {
            return false;
        }

        self.head.update(features, target);
        for (word, count) in features.iter() {
            let delta = target * counter * f64::from(count);
            match self.cached_weights.get_mut(word) {
                Some(cached) => *cached += delta,
                None => {
                    self.cached_weights.insert(word.to_string(), delta);
                }
            }
        }
        self.cached_bias += target * counter;
        true
    }

    fn finish(mut self, counter: f64) -> BinaryHead {
        self.head
            .subtract_averages(&self.cached_weights, self.cached_bias, counter);
        self.head
    }
}

/// Averaged perceptron.
///
/// Uses the same activation and violation test as
/// [`VanillaPerceptron`](super::vanilla::VanillaPerceptron). A single counter,
/// starting at 1, is incremented once per record (not per head) and never
/// reset between epochs.
#[derive(Debug, Clone, Default)]
pub struct AveragedPerceptron {
    config: TrainerConfig,
}

impl AveragedPerceptron {
    /// Create a new averaged trainer.
    pub fn new(config: TrainerConfig) -> Self {
        AveragedPerceptron { config }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Counter value after training on `records` records: `1 + epochs × records`.
    pub fn final_counter(&self, records: usize) -> u64 {
        1 + (self.config.epochs as u64) * (records as u64)
    }
}

impl Trainer for AveragedPerceptron {
    fn train(&self, data: &TrainingSet) -> Result<Trained> {
        let mut authenticity = AveragingHead::zeros(data.vocabulary());
        let mut sentiment = AveragingHead::zeros(data.vocabulary());
        let mut counter: u64 = 1;

        let summary = run_epochs(self.name(), &self.config, data, |example| {
            let features = &example.features;
            let c = counter as f64;

            let updated1 = authenticity.step(features, example.labels.authenticity.target(), c);
            let updated2 = sentiment.step(features, example.labels.sentiment.target(), c);

            counter += 1;
            (updated1, updated2)
        })?;

        debug_assert_eq!(counter, self.final_counter(data.len()));
        debug!("[{}] averaging with final counter {}", self.name(), counter);

        let final_counter = counter as f64;
        let model = Model::new(
            data.vocabulary().clone(),
            authenticity.finish(final_counter),
            sentiment.finish(final_counter),
        )?;
        Ok(Trained { model, summary })
    }

    fn name(&self) -> &'static str {
        "averaged"
    }
}
