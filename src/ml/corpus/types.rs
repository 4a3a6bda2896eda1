//! Common types for review records.

use std::fmt;
use std::str::FromStr;

use crate::error::{PerceptError, Result};

/// Authenticity label of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Authenticity {
    /// Review written by a genuine customer.
    True,
    /// Fabricated review.
    Fake,
}

/// Sentiment label of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    /// Positive review.
    Pos,
    /// Negative review.
    Neg,
}

impl Authenticity {
    /// Signed perceptron target: `True` is +1, `Fake` is -1.
    pub fn target(self) -> f64 {
        match self {
            Authenticity::True => 1.0,
            Authenticity::Fake => -1.0,
        }
    }

    /// Label for an activation; zero falls on the `True` side.
    pub fn from_activation(activation: f64) -> Self {
        if activation < 0.0 {
            Authenticity::Fake
        } else {
            Authenticity::True
        }
    }

    /// Label text as it appears in data and output files.
    pub fn as_str(self) -> &'static str {
        match self {
            Authenticity::True => "True",
            Authenticity::Fake => "Fake",
        }
    }
}

impl Sentiment {
    /// Signed perceptron target: `Pos` is +1, `Neg` is -1.
    pub fn target(self) -> f64 {
        match self {
            Sentiment::Pos => 1.0,
            Sentiment::Neg => -1.0,
        }
    }

    /// Label for an activation; zero falls on the `Pos` side.
    pub fn from_activation(activation: f64) -> Self {
        if activation < 0.0 {
            Sentiment::Neg
        } else {
            Sentiment::Pos
        }
    }

    /// Label text as it appears in data and output files.
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Pos => "Pos",
            Sentiment::Neg => "Neg",
        }
    }
}

/// Parses the exact label text.
///
/// Anything other than `True` or `Fake` is rejected, including other
/// spellings such as `true`, so a typo in a label column stops training
/// instead of being counted as `Fake`.
impl FromStr for Authenticity {
    type Err = PerceptError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "True" => Ok(Authenticity::True),
            "Fake" => Ok(Authenticity::Fake),
            other => Err(PerceptError::input_format(format!(
                "unknown authenticity label {other:?}, expected True or Fake"
            ))),
        }
    }
}

/// Parses the exact label text.
///
/// Anything other than `Pos` or `Neg` is rejected instead of being read as
/// `Neg`.
impl FromStr for Sentiment {
    type Err = PerceptError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Pos" => Ok(Sentiment::Pos),
            "Neg" => Ok(Sentiment::Neg),
            other => Err(PerceptError::input_format(format!(
                "unknown sentiment label {other:?}, expected Pos or Neg"
            ))),
        }
    }
}

impl fmt::Display for Authenticity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ground-truth labels of a training record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub authenticity: Authenticity,
    pub sentiment: Sentiment,
}

/// A review record: identifier, optional labels and the raw review text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Unique review identifier.
    pub identifier: String,
    /// Labels, present for training records only.
    pub labels: Option<Labels>,
    /// Review text following the header fields, words in input order.
    pub review: String,
}

impl Record {
    /// Create a labeled training record.
    pub fn labeled<S, R>(identifier: S, labels: Labels, review: R) -> Self
    where
        S: Into<String>,
        R: Into<String>,
    {
        Record {
            identifier: identifier.into(),
            labels: Some(labels),
            review: review.into(),
        }
    }

    /// Create an unlabeled inference record.
    pub fn unlabeled<S, R>(identifier: S, review: R) -> Self
    where
        S: Into<String>,
        R: Into<String>,
    {
        Record {
            identifier: identifier.into(),
            labels: None,
            review: review.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing() {
        assert_eq!("True".parse::<Authenticity>().unwrap(), Authenticity::True);
        assert_eq!("Fake".parse::<Authenticity>().unwrap(), Authenticity::Fake);
        assert_eq!("Pos".parse::<Sentiment>().unwrap(), Sentiment::Pos);
        assert_eq!("Neg".parse::<Sentiment>().unwrap(), Sentiment::Neg);

        let err = "true".parse::<Authenticity>().unwrap_err();
        assert!(matches!(err, PerceptError::InputFormat(_)));
        assert!("Positive".parse::<Sentiment>().is_err());
        assert!("neg".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_targets() {
        assert_eq!(Authenticity::True.target(), 1.0);
        assert_eq!(Authenticity::Fake.target(), -1.0);
        assert_eq!(Sentiment::Pos.target(), 1.0);
        assert_eq!(Sentiment::Neg.target(), -1.0);
    }

    #[test]
    fn test_zero_activation_is_positive() {
        assert_eq!(Authenticity::from_activation(0.0), Authenticity::True);
        assert_eq!(Authenticity::from_activation(-0.5), Authenticity::Fake);
        assert_eq!(Sentiment::from_activation(0.0), Sentiment::Pos);
        assert_eq!(Sentiment::from_activation(-1e-12), Sentiment::Neg);
    }

    #[test]
    fn test_display() {
        assert_eq!(Authenticity::Fake.to_string(), "Fake");
        assert_eq!(Sentiment::Pos.to_string(), "Pos");
    }
}
