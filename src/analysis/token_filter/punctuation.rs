//! Punctuation filter implementation.
//!
//! Review text is full of attached punctuation ("great!", "(really)",
//! "well-made"). This filter deletes every character of a fixed punctuation
//! set from each token. Characters are removed, never replaced, so
//! "well-made" becomes "wellmade" and "..." becomes an empty token.
//!
//! # Examples
//!
//! ```
//! use percept::analysis::token_filter::Filter;
//! use percept::analysis::token_filter::punctuation::PunctuationFilter;
//! use percept::analysis::token::Token;
//!
//! let filter = PunctuationFilter::new();
//! let tokens = vec![Token::new("great!", 0), Token::new("don't", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result[0].text, "great");
//! // The apostrophe is not part of the default set
//! assert_eq!(result[1].text, "don't");
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default punctuation set: ASCII punctuation without the apostrophe.
pub const DEFAULT_PUNCTUATION: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~";

/// A filter that deletes punctuation characters from every token.
#[derive(Clone, Debug)]
pub struct PunctuationFilter {
    punctuation: Arc<AHashSet<char>>,
}

impl PunctuationFilter {
    /// Create a new punctuation filter with the default punctuation set.
    pub fn new() -> Self {
        Self::from_chars(DEFAULT_PUNCTUATION.chars())
    }

    /// Create a new punctuation filter removing the given characters.
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        PunctuationFilter {
            punctuation: Arc::new(chars.into_iter().collect()),
        }
    }

    /// Check whether a character is removed by this filter.
    pub fn is_punctuation(&self, ch: char) -> bool {
        self.punctuation.contains(&ch)
    }
}

impl Default for PunctuationFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for PunctuationFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() || !token.text.chars().any(|c| self.is_punctuation(c)) {
                    token
                } else {
                    let stripped: String = token
                        .text
                        .chars()
                        .filter(|c| !self.is_punctuation(*c))
                        .collect();
                    token.with_text(stripped)
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
