//! Review analyzer used for perceptron feature extraction.
//!
//! # Pipeline
//!
//! 1. WhitespaceTokenizer
//! 2. PunctuationFilter (ASCII punctuation except the apostrophe)
//! 3. LowercaseFilter
//! 4. StripFilter
//! 5. NumericFilter
//! 6. StopFilter (174 English stop words)
//! 7. RemoveEmptyFilter
//!
//! # Examples
//!
//! ```
//! use percept::analysis::analyzer::{Analyzer, ReviewAnalyzer};
//!
//! let analyzer = ReviewAnalyzer::new();
//! let tokens: Vec<_> = analyzer
//!     .analyze("We stayed 3 nights... THE staff wasn't friendly!!")
//!     .unwrap()
//!     .collect();
//!
//! let words: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(words, vec!["stayed", "nights", "staff", "friendly"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{
    LowercaseFilter, NumericFilter, PunctuationFilter, RemoveEmptyFilter, StopFilter, StripFilter,
};
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::Result;

/// Analyzer producing the bag-of-words vocabulary for review classification.
pub struct ReviewAnalyzer {
    inner: PipelineAnalyzer,
}

impl ReviewAnalyzer {
    /// Create a new review analyzer with the default punctuation and stop words.
    pub fn new() -> Self {
        Self::with_filters(PunctuationFilter::new(), StopFilter::new())
    }

    /// Create a review analyzer with custom punctuation and stop word filters.
    pub fn with_filters(punctuation: PunctuationFilter, stop: StopFilter) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(punctuation))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StripFilter::new()))
            .add_filter(Arc::new(NumericFilter::new()))
            .add_filter(Arc::new(stop))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("review");

        ReviewAnalyzer { inner: analyzer }
    }
}

impl Default for ReviewAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for ReviewAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "review"
    }
}

impl std::fmt::Debug for ReviewAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn words(text: &str) -> Vec<String> {
        let analyzer = ReviewAnalyzer::new();
        analyzer
            .analyze(text)
            .unwrap()
            .map(|token: Token| token.text)
            .collect()
    }

    #[test]
    fn test_review_analyzer() {
        assert_eq!(words("great great movie"), vec!["great", "great", "movie"]);
    }

    #[test]
    fn test_stop_words_any_case() {
        assert!(words("The THE the tHe").is_empty());
        assert!(words("DON'T Wasn't").is_empty());
    }

    #[test]
    fn test_punctuation_and_digits() {
        assert!(words("!!! ... -- 42 1,000 $20.00").is_empty());
        assert_eq!(words("(Excellent!) 5-star"), vec!["excellent", "5star"]);
    }

    #[test]
    fn test_punctuation_exposes_stop_word() {
        // "the," loses its comma first, then matches the stop list
        assert!(words("the, (it's)").is_empty());
    }

    #[test]
    fn test_idempotent_on_normalized_input() {
        let first = words("Clean ROOMS, friendly staff!");
        let second = words(&first.join(" "));
        assert_eq!(first, second);
    }
}
