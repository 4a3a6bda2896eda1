//! Serializable perceptron model.
//!
//! A model bundles the training vocabulary with the weights and bias of both
//! heads. On disk it is a single JSON object:
//!
//! ```json
//! {"vocabulary":["good"],"w1":{"good":1.0},"b1":0.0,"w2":{"good":1.0},"b2":0.0}
//! ```
//!
//! `w1`/`b1` belong to the authenticity head and `w2`/`b2` to the sentiment
//! head. Integer numbers are accepted when loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{PerceptError, Result};
use crate::ml::features::Vocabulary;
use crate::ml::perceptron::head::BinaryHead;

/// The trained parameter bundle passed from training to inference.
///
/// Both heads hold exactly one weight per vocabulary word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelFile", into = "ModelFile")]
pub struct Model {
    vocabulary: Vocabulary,
    authenticity: BinaryHead,
    sentiment: BinaryHead,
}

/// On-disk layout of a model.
#[derive(Serialize, Deserialize)]
struct ModelFile {
    vocabulary: Vocabulary,
    w1: BTreeMap<String, f64>,
    b1: f64,
    w2: BTreeMap<String, f64>,
    b2: f64,
}

impl Model {
    /// Build a model, checking that both heads cover exactly the vocabulary.
    ///
    /// Scoring looks up a weight for every feature that is in the
    /// vocabulary, so a head missing a vocabulary word could not score a
    /// review containing it. Extra weights outside the vocabulary are never
    /// read and point at a model assembled from mismatched parts.
    pub fn new(vocabulary: Vocabulary, authenticity: BinaryHead, sentiment: BinaryHead) -> Result<Self> {
        check_weights("w1", &vocabulary, authenticity.weights()).map_err(PerceptError::model_file)?;
        check_weights("w2", &vocabulary, sentiment.weights()).map_err(PerceptError::model_file)?;

        Ok(Model {
            vocabulary,
            authenticity,
            sentiment,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Authenticity head (`w1`, `b1`).
    pub fn authenticity(&self) -> &BinaryHead {
        &self.authenticity
    }

    /// Sentiment head (`w2`, `b2`).
    pub fn sentiment(&self) -> &BinaryHead {
        &self.sentiment
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a model from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PerceptError::model_file(e.to_string()))
    }

    /// Write the model to a file, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?).map_err(|e| PerceptError::io_at(path, e))?;
        info!(
            "Wrote model with {} words to {}",
            self.vocabulary.len(),
            path.display()
        );
        Ok(())
    }

    /// Load a model from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PerceptError::model_file(format!("cannot read {}: {e}", path.display()))
        })?;
        let model = Self::from_json(&content).map_err(|e| match e {
            PerceptError::ModelFile(msg) => {
                PerceptError::model_file(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;
        info!(
            "Loaded model with {} words from {}",
            model.vocabulary.len(),
            path.display()
        );
        Ok(model)
    }
}

/// Both directions are checked; see [`Model::new`].
fn check_weights(
    name: &str,
    vocabulary: &Vocabulary,
    weights: &BTreeMap<String, f64>,
) -> std::result::Result<(), String> {
    if let Some(word) = weights.keys().find(|word| !vocabulary.contains(word)) {
        return Err(format!("{name} has a weight for {word:?} which is not in the vocabulary"));
    }
    if let Some(word) = vocabulary.iter().find(|word| !weights.contains_key(*word)) {
        return Err(format!("{name} has no weight for vocabulary word {word:?}"));
    }
    Ok(())
}

impl TryFrom<ModelFile> for Model {
    type Error = String;

    fn try_from(file: ModelFile) -> std::result::Result<Self, Self::Error> {
        check_weights("w1", &file.vocabulary, &file.w1)?;
        check_weights("w2", &file.vocabulary, &file.w2)?;

        Ok(Model {
            vocabulary: file.vocabulary,
            authenticity: BinaryHead::from_parts(file.w1, file.b1),
            sentiment: BinaryHead::from_parts(file.w2, file.b2),
        })
    }
}

impl From<Model> for ModelFile {
    fn from(model: Model) -> Self {
        ModelFile {
            vocabulary: model.vocabulary,
            w1: model.authenticity.weights().clone(),
            b1: model.authenticity.bias(),
            w2: model.sentiment.weights().clone(),
            b2: model.sentiment.bias(),
        }
    }
}
