//! Length-bucketed candidate index.
//!
//! Two words at edit distance one differ in length by at most one, so the
//! candidates for a word of length `L` are exactly the words of length
//! `L - 1`, `L` and `L + 1`. Sorting the dictionary by length makes those
//! words one contiguous slice.

use std::collections::BTreeMap;
use std::ops::Range;
use std::time::Instant;

use log::info;

use crate::dictionary::Dictionary;

/// Words sorted by length with the index range of every length bucket.
#[derive(Debug, Clone, Default)]
pub struct LengthIndex {
    /// Words in ascending length order.
    words: Vec<String>,
    /// Half-open range into `words` for each length present.
    buckets: BTreeMap<usize, Range<usize>>,
}

impl LengthIndex {
    /// Build the index, taking ownership of the dictionary's words.
    ///
    /// Words are sorted by length, then lexicographically, and duplicates are
    /// stored once. Sorting is O(n log n) and bucket detection is a single O(n)
    /// scan. Every bucket is closed explicitly, including the one for the
    /// longest words.
    pub fn build(dictionary: Dictionary) -> Self {
        let start = Instant::now();

        let mut keyed: Vec<(usize, String)> = dictionary
            .into_words()
            .into_iter()
            .map(|word| (word.chars().count(), word))
            .collect();
        keyed.sort_unstable();
        keyed.dedup();

        let mut buckets = BTreeMap::new();
        let mut bucket_start = 0;

        for (i, (length, _)) in keyed.iter().enumerate() {
            let next_length = keyed.get(i + 1).map(|(next, _)| *next);
            if next_length != Some(*length) {
                buckets.insert(*length, bucket_start..i + 1);
                bucket_start = i + 1;
            }
        }

        let words: Vec<String> = keyed.into_iter().map(|(_, word)| word).collect();

        info!(
            "Built length index over {} words in {} buckets ({:?})",
            words.len(),
            buckets.len(),
            start.elapsed()
        );

        LengthIndex { words, buckets }
    }

    /// Every word of length `length - 1`, `length` or `length + 1`.
    ///
    /// Missing neighbouring buckets contribute nothing; an empty slice is
    /// returned if none of the three lengths is present.
    pub fn candidates_near(&self, length: usize) -> &[String] {
        let low = length.saturating_sub(1);
        let high = length.saturating_add(1);

        let mut window = self.buckets.range(low..=high);
        let Some((_, first)) = window.next() else {
            return &[];
        };
        let end = window.next_back().map_or(first.end, |(_, last)| last.end);

        &self.words[first.start..end]
    }

    /// Words of exactly `length`.
    pub fn bucket(&self, length: usize) -> &[String] {
        match self.buckets.get(&length) {
            Some(range) => &self.words[range.clone()],
            None => &[],
        }
    }

    /// `(length, count)` for each bucket in ascending length order.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.buckets
            .iter()
            .map(|(length, range)| (*length, range.len()))
    }

    /// All indexed words, shortest first.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the number of indexed words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
