//! Strip filter implementation.

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// A filter that removes leading and trailing whitespace from tokens.
///
/// A token that is empty after trimming is marked as stopped.
#[derive(Clone, Debug, Default)]
pub struct StripFilter;

impl StripFilter {
    /// Create a new strip filter.
    pub fn new() -> Self {
        StripFilter
    }
}

impl Filter for StripFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if token.is_stopped() {
                    token
                } else {
                    let trimmed = token.text.trim();
                    if trimmed.is_empty() {
                        token.stop()
                    } else if trimmed.len() == token.text.len() {
                        token
                    } else {
                        token.with_text(trimmed)
                    }
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "strip"
    }
}
