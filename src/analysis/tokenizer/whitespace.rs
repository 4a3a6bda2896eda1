//! Whitespace tokenizer implementation.
//!
//! Record lines are whitespace-delimited: the identifier, the two label
//! fields and every review word are separated by runs of Unicode whitespace.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }

    /// Split text into tokens carrying their byte offsets.
    fn split_with_offsets(text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (offset, ch) in text.char_indices() {
            match (ch.is_whitespace(), start) {
                (true, Some(word_start)) => {
                    tokens.push(Token::with_offsets(
                        &text[word_start..offset],
                        tokens.len(),
                        word_start,
                        offset,
                    ));
                    start = None;
                }
                (false, None) => start = Some(offset),
                _ => {}
            }
        }

        if let Some(word_start) = start {
            tokens.push(Token::with_offsets(
                &text[word_start..],
                tokens.len(),
                word_start,
                text.len(),
            ));
        }

        tokens
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        Ok(Box::new(Self::split_with_offsets(text).into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_offsets_for_repeated_words() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize(" great great\n").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (1, 6));
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (7, 12));
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_blank_line() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize(" \t \r\n").unwrap().count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
