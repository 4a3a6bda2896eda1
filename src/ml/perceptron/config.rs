//! Configuration for perceptron training.

use serde::{Deserialize, Serialize};

use crate::error::{PerceptError, Result};

/// Default number of passes over the training set.
pub const DEFAULT_EPOCHS: usize = 30;

/// Configuration shared by the vanilla and averaged trainers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Number of full passes over the training set, in record order.
    /// There is no early stopping.
    pub epochs: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            epochs: DEFAULT_EPOCHS,
        }
    }
}

impl TrainerConfig {
    /// Set the number of epochs.
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(PerceptError::invalid_config("epochs must be at least 1"));
        }
        Ok(())
    }
}
