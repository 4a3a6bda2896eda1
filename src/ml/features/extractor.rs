//! Feature extractors for training and inference.
//!
//! Both extractors share the same analyzer, so a word is normalized the same
//! way at training and classification time. Only [`TrainingExtractor`] owns
//! a [`Vocabulary`]; it is consumed with [`TrainingExtractor::into_vocabulary`]
//! once the corpus is processed, after which the vocabulary is read-only.

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, ReviewAnalyzer};
use crate::error::Result;
use crate::ml::features::vector::FeatureVector;
use crate::ml::features::vocabulary::Vocabulary;

/// Extractor that turns review words into a [`FeatureVector`] without
/// touching any vocabulary.
#[derive(Clone)]
pub struct InferenceExtractor {
    analyzer: Arc<dyn Analyzer>,
}

impl InferenceExtractor {
    /// Create an extractor using the review analyzer.
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(ReviewAnalyzer::new()))
    }

    /// Create an extractor using a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        InferenceExtractor { analyzer }
    }

    /// Analyzer used for normalization.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Count the normalized words of a review.
    pub fn extract(&self, review: &str) -> Result<FeatureVector> {
        let stream = self.analyzer.analyze(review)?;
        Ok(stream.map(|token| token.text).collect())
    }
}

impl Default for InferenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InferenceExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceExtractor")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

/// Extractor that additionally grows the training vocabulary.
#[derive(Debug, Clone, Default)]
pub struct TrainingExtractor {
    inner: InferenceExtractor,
    vocabulary: Vocabulary,
}

impl TrainingExtractor {
    /// Create a training extractor using the review analyzer.
    pub fn new() -> Self {
        Self::with_analyzer(Arc::new(ReviewAnalyzer::new()))
    }

    /// Create a training extractor using a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        TrainingExtractor {
            inner: InferenceExtractor::with_analyzer(analyzer),
            vocabulary: Vocabulary::new(),
        }
    }

    /// Count the normalized words and add each of them to the vocabulary.
    pub fn extract(&mut self, review: &str) -> Result<FeatureVector> {
        let features = self.inner.extract(review)?;
        for word in features.words() {
            self.vocabulary.insert(word);
        }
        Ok(features)
    }

    /// Vocabulary collected so far.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Finish extraction and hand over the vocabulary.
    pub fn into_vocabulary(self) -> Vocabulary {
        self.vocabulary
    }
}
