//! Text analysis module for percept.
//!
//! This module turns raw review words into normalized feature words. A
//! tokenizer splits record lines, and an analyzer runs a chain of token
//! filters (punctuation removal, lowercasing, digit and stop word removal)
//! over the review part of each record.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
