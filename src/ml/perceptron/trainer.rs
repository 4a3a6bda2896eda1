//! Trainer trait and the training loop shared by both perceptron variants.

use log::{debug, info};

use crate::error::Result;
use crate::ml::perceptron::config::TrainerConfig;
use crate::ml::perceptron::dataset::{Example, TrainingSet};
use crate::ml::perceptron::model::Model;

/// Trainer trait.
///
/// Implementations learn both heads (authenticity and sentiment) from the
/// same training set in a single run.
pub trait Trainer {
    /// Train a model on the given training set.
    fn train(&self, data: &TrainingSet) -> Result<Trained>;

    /// Get the name of this trainer for logging and output file naming.
    fn name(&self) -> &'static str;
}

/// Statistics of a finished training run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSummary {
    /// Trainer that produced the model.
    pub trainer: &'static str,
    /// Number of epochs run.
    pub epochs: usize,
    /// Number of record steps across all epochs.
    pub steps: u64,
    /// Authenticity head updates across all epochs.
    pub authenticity_updates: u64,
    /// Sentiment head updates across all epochs.
    pub sentiment_updates: u64,
}

/// A trained model together with its training statistics.
#[derive(Debug, Clone)]
pub struct Trained {
    pub model: Model,
    pub summary: TrainingSummary,
}

/// Run `config.epochs` passes over the training set in record order.
///
/// `step` is called once per record and reports whether the authenticity
/// and sentiment heads were updated.
pub(crate) fn run_epochs<F>(
    trainer: &'static str,
    config: &TrainerConfig,
    data: &TrainingSet,
    mut step: F,
) -> Result<TrainingSummary>
where
    F: FnMut(&Example) -> (bool, bool),
{
    config.validate()?;

    let mut summary = TrainingSummary {
        trainer,
        epochs: config.epochs,
        steps: 0,
        authenticity_updates: 0,
        sentiment_updates: 0,
    };

    for epoch in 0..config.epochs {
        let mut epoch_updates = (0u64, 0u64);
        for example in data.iter() {
            let (authenticity, sentiment) = step(example);
            epoch_updates.0 += u64::from(authenticity);
            epoch_updates.1 += u64::from(sentiment);
            summary.steps += 1;
        }
        summary.authenticity_updates += epoch_updates.0;
        summary.sentiment_updates += epoch_updates.1;
        debug!(
            "[{}] epoch {}/{}: {} authenticity and {} sentiment updates",
            trainer,
            epoch + 1,
            config.epochs,
            epoch_updates.0,
            epoch_updates.1
        );
    }

    info!(
        "[{}] trained {} epochs over {} records ({} authenticity, {} sentiment updates)",
        trainer,
        config.epochs,
        data.len(),
        summary.authenticity_updates,
        summary.sentiment_updates
    );

    Ok(summary)
}
