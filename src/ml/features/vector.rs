//! Sparse word-count vectors.

use ahash::AHashMap;

/// Sparse mapping from normalized word to occurrence count.
///
/// Entries iterate in first-appearance order, which keeps the summation
/// order of activations identical from run to run.
#[derive(Debug, Clone, Default)]
pub struct FeatureVector {
    entries: Vec<(String, u32)>,
    index: AHashMap<String, usize>,
}

impl FeatureVector {
    /// Create an empty feature vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count of a word, inserting it with count 1 if absent.
    pub fn increment(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    /// Count of a word, if present.
    pub fn get(&self, word: &str) -> Option<u32> {
        self.index.get(word).map(|&position| self.entries[position].1)
    }

    /// Check whether a word is present.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no word survived extraction.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(word, count)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
    }

    /// Iterate over the words in first-appearance order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(word, _)| word.as_str())
    }
}

impl<S: AsRef<str>> FromIterator<S> for FeatureVector {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vector = FeatureVector::new();
        for word in iter {
            vector.increment(word.as_ref());
        }
        vector
    }
}

// Equality ignores order: two vectors are equal when they hold the same counts.
impl PartialEq for FeatureVector {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(word, count)| other.get(word) == Some(count))
    }
}

impl Eq for FeatureVector {}
