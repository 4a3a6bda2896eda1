//! Core analyzer trait definition.
//!
//! Analyzers combine a tokenizer and a chain of filters:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
//! ```
//!
//! The record parser hands the review part of each line to an analyzer, so
//! feature words come out of the same tokenizer that splits the header.
//!
//! # Examples
//!
//! ```
//! use percept::analysis::analyzer::{Analyzer, ReviewAnalyzer};
//!
//! let analyzer = ReviewAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("The room was GREAT!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "room");
//! assert_eq!(tokens[1].text, "great");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so an analyzer can be shared behind an
/// `Arc` by both feature extractors.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &'static str;
}
