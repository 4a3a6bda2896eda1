//! Vocabulary of known feature words.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The set of every word seen by the training extractor.
///
/// Kept sorted so that serialized models are byte-stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    words: BTreeSet<String>,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word. Returns `true` if it was not known yet.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.words.contains(word) {
            false
        } else {
            self.words.insert(word.to_string())
        }
    }

    /// Check whether a word is known.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the known words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Vocabulary {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
