//! Vanilla perceptron trainer.

use crate::error::Result;
use crate::ml::perceptron::config::TrainerConfig;
use crate::ml::perceptron::dataset::TrainingSet;
use crate::ml::perceptron::head::BinaryHead;
use crate::ml::perceptron::model::Model;
use crate::ml::perceptron::trainer::{Trained, Trainer, run_epochs};

/// Classic mistake-driven perceptron.
///
/// For each record and each head, if `y * a <= 0` the head is updated with
/// `w[d] += y * x[d]` and `b += y`. The weights after the last epoch are the
/// model.
#[derive(Debug, Clone, Default)]
pub struct VanillaPerceptron {
    config: TrainerConfig,
}

impl VanillaPerceptron {
    /// Create a new vanilla trainer.
    pub fn new(config: TrainerConfig) -> Self {
        VanillaPerceptron { config }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }
}

impl Trainer for VanillaPerceptron {
    fn train(&self, data: &TrainingSet) -> Result<Trained> {
        let mut authenticity = BinaryHead::zeros(data.vocabulary());
        let mut sentiment = BinaryHead::zeros(data.vocabulary());

        let summary = run_epochs(self.name(), &self.config, data, |example| {
            let features = &example.features;

            let y1 = example.labels.authenticity.target();
            let updated1 = authenticity.violates(features, y1);
            if updated1 {
                authenticity.update(features, y1);
            }

            let y2 = example.labels.sentiment.target();
            let updated2 = sentiment.violates(features, y2);
            if updated2 {
                sentiment.update(features, y2);
            }

            (updated1, updated2)
        })?;

        let model = Model::new(data.vocabulary().clone(), authenticity, sentiment)?;
        Ok(Trained { model, summary })
    }

    fn name(&self) -> &'static str {
        "vanilla"
    }
}
