//! Per-length word buckets

use crate::filter::{MAX_LENGTH, MIN_LENGTH};

use std::collections::BTreeMap;

/// Accepted words grouped by exact length, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    words: BTreeMap<usize, Vec<String>>,
}

impl Buckets {
    /// Create one empty bucket per supported length
    pub fn new() -> Self {
        let words = (MIN_LENGTH..=MAX_LENGTH).map(|len| (len, Vec::new())).collect();
        Self { words }
    }

    /// Append a word to the bucket matching its length.
    ///
    /// Returns false when no bucket has that length.
    pub fn push(&mut self, word: &str) -> bool {
        let len = word.chars().count();
        match self.words.get_mut(&len) {
            Some(bucket) => {
                bucket.push(word.to_string());
                true
            }
            None => false,
        }
    }

    pub fn get(&self, length: usize) -> Option<&[String]> {
        self.words.get(&length).map(Vec::as_slice)
    }

    /// Buckets in ascending length order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> + '_ {
        self.words.iter().map(|(&len, words)| (len, words.as_slice()))
    }

    /// Total words across all buckets
    pub fn total(&self) -> usize {
        self.words.values().map(Vec::len).sum()
    }
}

impl Default for Buckets {
    fn default() -> Self {
        Self::new()
    }
}
