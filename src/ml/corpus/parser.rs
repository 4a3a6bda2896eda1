//! Line parser for review data files.
//!
//! Training lines look like `<id> <True|Fake> <Pos|Neg> <word>...`. Inference
//! lines share the layout, but the two label fields are ignored whatever
//! they contain. Every line is a record: a blank line has fewer than three
//! fields and is rejected like any other short line.

use std::fs;
use std::path::Path;

use log::debug;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::{PerceptError, Result};
use crate::ml::corpus::types::{Labels, Record};

/// Number of leading fields before the review words.
pub const HEADER_FIELDS: usize = 3;

/// Parser turning whitespace-delimited lines into [`Record`]s.
#[derive(Debug, Clone, Default)]
pub struct RecordParser {
    tokenizer: WhitespaceTokenizer,
}

/// The three header fields of a line and the review text that follows them.
struct SplitLine<'a> {
    identifier: String,
    header: [String; 2],
    review: &'a str,
}

impl RecordParser {
    /// Create a new record parser.
    pub fn new() -> Self {
        RecordParser {
            tokenizer: WhitespaceTokenizer::new(),
        }
    }

    /// Parse one training line.
    ///
    /// `line_number` is 1-based and only used in error messages.
    pub fn parse_training_line(&self, line_number: usize, line: &str) -> Result<Record> {
        let split = self.split_line(line_number, line)?;

        let labels = Labels {
            authenticity: split.header[0]
                .parse()
                .map_err(|e| Self::at_line(line_number, e))?,
            sentiment: split.header[1]
                .parse()
                .map_err(|e| Self::at_line(line_number, e))?,
        };

        Ok(Record::labeled(split.identifier, labels, split.review))
    }

    /// Parse one inference line.
    pub fn parse_inference_line(&self, line_number: usize, line: &str) -> Result<Record> {
        let split = self.split_line(line_number, line)?;
        Ok(Record::unlabeled(split.identifier, split.review))
    }

    /// Parse every line of a training file's contents.
    pub fn parse_training(&self, content: &str) -> Result<Vec<Record>> {
        self.parse_lines(content, |number, line| self.parse_training_line(number, line))
    }

    /// Parse every line of an inference file's contents.
    pub fn parse_inference(&self, content: &str) -> Result<Vec<Record>> {
        self.parse_lines(content, |number, line| self.parse_inference_line(number, line))
    }

    fn parse_lines<F>(&self, content: &str, parse: F) -> Result<Vec<Record>>
    where
        F: Fn(usize, &str) -> Result<Record>,
    {
        let records = content
            .lines()
            .enumerate()
            .map(|(index, line)| parse(index + 1, line))
            .collect::<Result<Vec<_>>>()?;
        debug!("Parsed {} records", records.len());
        Ok(records)
    }

    /// Split a line into identifier, the two label fields and the review text.
    fn split_line<'a>(&self, line_number: usize, line: &'a str) -> Result<SplitLine<'a>> {
        let mut fields = self.tokenizer.tokenize(line)?;

        let (Some(identifier), Some(first), Some(second)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(PerceptError::input_format(format!(
                "line {line_number}: expected at least {HEADER_FIELDS} fields \
                 (<identifier> <authenticity> <sentiment> <words>...)"
            )));
        };

        // The review starts at the first word after the header.
        let review = fields
            .next()
            .map_or("", |word: Token| &line[word.start_offset..]);

        Ok(SplitLine {
            identifier: identifier.text,
            header: [first.text, second.text],
            review,
        })
    }

    fn at_line(line_number: usize, error: PerceptError) -> PerceptError {
        match error {
            PerceptError::InputFormat(msg) => {
                PerceptError::input_format(format!("line {line_number}: {msg}"))
            }
            other => other,
        }
    }
}

/// Load labeled training records from a file.
pub fn load_training_data<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let content = read_data_file(path.as_ref())?;
    RecordParser::new().parse_training(&content)
}

/// Load unlabeled inference records from a file.
pub fn load_inference_data<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let content = read_data_file(path.as_ref())?;
    RecordParser::new().parse_inference(&content)
}

fn read_data_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| PerceptError::io_at(path, e))
}
