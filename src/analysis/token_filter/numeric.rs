//! Numeric filter implementation.
//!
//! A token counts as numeric when every character is a decimal digit
//! (general category `Nd`, any script) or one of the compatibility digits
//! listed in [`DIGIT_RANGES`] such as superscripts and circled digits.
//! Fractions and Roman numerals are numbers but not digits, so "½" and "Ⅻ"
//! are kept as words.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Characters with a digit value that are not decimal digits (`Numeric_Type=Digit`).
const DIGIT_RANGES: &[(char, char)] = &[
    ('\u{b2}', '\u{b3}'),
    ('\u{b9}', '\u{b9}'),
    ('\u{1369}', '\u{1371}'),
    ('\u{19da}', '\u{19da}'),
    ('\u{2070}', '\u{2070}'),
    ('\u{2074}', '\u{2079}'),
    ('\u{2080}', '\u{2089}'),
    ('\u{2460}', '\u{2468}'),
    ('\u{2474}', '\u{247c}'),
    ('\u{2488}', '\u{2490}'),
    ('\u{24ea}', '\u{24ea}'),
    ('\u{24f5}', '\u{24fd}'),
    ('\u{24ff}', '\u{24ff}'),
    ('\u{2776}', '\u{277e}'),
    ('\u{2780}', '\u{2788}'),
    ('\u{278a}', '\u{2792}'),
    ('\u{10a40}', '\u{10a43}'),
    ('\u{10e60}', '\u{10e68}'),
    ('\u{11052}', '\u{1105a}'),
    ('\u{1f100}', '\u{1f10a}'),
];

/// A filter that marks tokens made up entirely of digits as stopped.
///
/// Mixed tokens such as "4k" or "mp3" are kept.
#[derive(Clone, Debug, Default)]
pub struct NumericFilter;

impl NumericFilter {
    /// Create a new numeric filter.
    pub fn new() -> Self {
        NumericFilter
    }

    /// Check whether a character is a digit.
    pub fn is_digit(c: char) -> bool {
        c.general_category() == GeneralCategory::DecimalNumber
            || DIGIT_RANGES
                .iter()
                .any(|&(start, end)| (start..=end).contains(&c))
    }

    /// Check whether a token text is a pure digit run.
    pub fn is_numeric(text: &str) -> bool {
        !text.is_empty() && text.chars().all(Self::is_digit)
    }
}

impl Filter for NumericFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                if !token.is_stopped() && Self::is_numeric(&token.text) {
                    token.stop()
                } else {
                    token
                }
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "numeric"
    }
}
