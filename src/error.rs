//! Error types for the percept library.
//!
//! Every failure in percept is fatal: a malformed input record, an unreadable
//! file or a corrupt model file aborts the run. All of them are represented by
//! the [`PerceptError`] enum so that the binaries can report a single
//! descriptive message and exit with a non-zero status.
//!
//! # Examples
//!
//! ```
//! use percept::error::{PerceptError, Result};
//!
//! fn parse_line(line: &str) -> Result<()> {
//!     if line.split_whitespace().count() < 3 {
//!         return Err(PerceptError::input_format("expected at least 3 fields"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(parse_line("id1 True").is_err());
//! ```

use std::io;
use std::path::Path;

use thiserror::Error;

/// The main error type for percept operations.
#[derive(Error, Debug)]
pub enum PerceptError {
    /// I/O errors (file not found, unreadable, unwritable)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed training or inference record
    #[error("Input format error: {0}")]
    InputFormat(String),

    /// Missing, corrupt or inconsistent model file
    #[error("Model file error: {0}")]
    ModelFile(String),

    /// Invalid trainer or CLI configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with PerceptError.
pub type Result<T> = std::result::Result<T, PerceptError>;

impl PerceptError {
    /// Create a new input format error.
    pub fn input_format<S: Into<String>>(msg: S) -> Self {
        PerceptError::InputFormat(msg.into())
    }

    /// Create a new model file error.
    pub fn model_file<S: Into<String>>(msg: S) -> Self {
        PerceptError::ModelFile(msg.into())
    }

    /// Wrap an I/O error so that its message names the file involved.
    pub fn io_at<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        let path = path.as_ref();
        PerceptError::Io(io::Error::new(
            source.kind(),
            format!("{}: {source}", path.display()),
        ))
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        PerceptError::InvalidConfig(msg.into())
    }
}
