//! Direct friends of a word.
//!
//! A [`NeighborFinder`] answers "which dictionary words are at edit distance
//! exactly one from this word?". Both implementations are read-only after
//! construction and can be shared across threads.

use rayon::prelude::*;

use crate::dictionary::Dictionary;
use crate::index::{LengthIndex, WordTrie};
use crate::network::oracle::FriendQuery;

/// Source of a word's direct friends.
pub trait NeighborFinder: Send + Sync {
    /// Direct friends of `word`. Never contains `word` itself.
    fn friends_of<'a>(&'a self, word: &str) -> Vec<&'a str>;

    /// Number of words the finder draws friends from.
    fn word_count(&self) -> usize;
}

/// Finds friends by filtering the length window of a [`LengthIndex`].
#[derive(Debug, Clone)]
pub struct LengthBucketFinder {
    index: LengthIndex,
    parallel: bool,
}

impl LengthBucketFinder {
    /// Build the length index over the dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        LengthBucketFinder {
            index: LengthIndex::build(dictionary),
            parallel: false,
        }
    }

    /// Filter candidates on the rayon thread pool. Output order is unchanged.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl NeighborFinder for LengthBucketFinder {
    fn friends_of<'a>(&'a self, word: &str) -> Vec<&'a str> {
        let query = FriendQuery::new(word);
        let candidates = self.index.candidates_near(query.len());

        if self.parallel {
            candidates
                .par_iter()
                .filter(|candidate| query.is_friend(candidate))
                .map(String::as_str)
                .collect()
        } else {
            candidates
                .iter()
                .filter(|candidate| query.is_friend(candidate))
                .map(String::as_str)
                .collect()
        }
    }

    fn word_count(&self) -> usize {
        self.index.len()
    }
}

/// Finds friends with a pruned walk over a [`WordTrie`].
#[derive(Debug, Clone)]
pub struct TrieFinder {
    trie: WordTrie,
}

impl TrieFinder {
    /// Build the trie over the dictionary.
    pub fn new(dictionary: Dictionary) -> Self {
        TrieFinder {
            trie: WordTrie::build(dictionary),
        }
    }
}

impl NeighborFinder for TrieFinder {
    fn friends_of<'a>(&'a self, word: &str) -> Vec<&'a str> {
        self.trie.friends_of(word)
    }

    fn word_count(&self) -> usize {
        self.trie.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words([
            "cat", "cats", "bat", "at", "dog", "cart", "causes", "cot", "a", "cat",
        ])
    }

    fn sorted(mut words: Vec<&str>) -> Vec<&str> {
        words.sort_unstable();
        words
    }

    #[test]
    fn test_length_bucket_friends() {
        let finder = LengthBucketFinder::new(dictionary());
        let friends = finder.friends_of("cat");
        assert_eq!(sorted(friends), vec!["at", "bat", "cart", "cats", "cot"]);
    }

    #[test]
    fn test_friends_follow_length_sorted_order() {
        let finder = LengthBucketFinder::new(dictionary());
        let friends = finder.friends_of("cat");
        let lengths: Vec<usize> = friends.iter().map(|w| w.chars().count()).collect();
        let mut expected = lengths.clone();
        expected.sort_unstable();
        assert_eq!(lengths, expected);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = LengthBucketFinder::new(dictionary());
        let parallel = LengthBucketFinder::new(dictionary()).parallel(true);

        for word in ["cat", "at", "causes", "zzz", ""] {
            assert_eq!(sequential.friends_of(word), parallel.friends_of(word));
        }
    }

    #[test]
    fn test_trie_matches_length_buckets() {
        let buckets = LengthBucketFinder::new(dictionary());
        let trie = TrieFinder::new(dictionary());

        for word in ["cat", "at", "causes", "cause", "a", ""] {
            let from_buckets = sorted(buckets.friends_of(word));
            assert_eq!(from_buckets, trie.friends_of(word), "word {word}");
        }
    }

    #[test]
    fn test_never_own_friend() {
        let finder = LengthBucketFinder::new(dictionary());
        for word in ["cat", "cats", "a"] {
            assert!(!finder.friends_of(word).contains(&word));
        }
    }

    #[test]
    fn test_word_counts() {
        assert_eq!(LengthBucketFinder::new(dictionary()).word_count(), 9);
        assert_eq!(TrieFinder::new(dictionary()).word_count(), 9);
    }

    #[test]
    fn test_duplicate_words_reported_once() {
        let words = || Dictionary::from_words(["cat", "cat", "bat"]);
        let buckets = LengthBucketFinder::new(words());
        let parallel = LengthBucketFinder::new(words()).parallel(true);
        let trie = TrieFinder::new(words());

        assert_eq!(buckets.friends_of("bat"), vec!["cat"]);
        assert_eq!(parallel.friends_of("bat"), vec!["cat"]);
        assert_eq!(trie.friends_of("bat"), vec!["cat"]);
        assert_eq!(buckets.word_count(), trie.word_count());
    }

    #[test]
    fn test_empty_dictionary_has_no_friends() {
        let finder = LengthBucketFinder::new(Dictionary::new());
        assert!(finder.friends_of("cat").is_empty());
        let finder = TrieFinder::new(Dictionary::new());
        assert!(finder.friends_of("cat").is_empty());
    }
}
