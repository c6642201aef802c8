//! The friendship test between two words.

use crate::util::levenshtein::levenshtein_distance_to;

/// Two words are friends if their edit distance is exactly this value.
pub const FRIENDSHIP: usize = 1;

/// Check whether two words are friends, i.e. their Levenshtein distance is exactly one.
///
/// Words are compared as sequences of code points. Identical words are not friends
/// (distance zero), and words whose lengths differ by more than one are rejected
/// before any row of the distance matrix is computed.
pub fn are_friends(a: &str, b: &str) -> bool {
    FriendQuery::new(a).is_friend(b)
}

/// A word decoded once and then tested against many candidates.
#[derive(Debug, Clone)]
pub struct FriendQuery<'w> {
    word: &'w str,
    letters: Vec<char>,
}

impl<'w> FriendQuery<'w> {
    /// Decode `word` into code points.
    pub fn new(word: &'w str) -> Self {
        FriendQuery {
            word,
            letters: word.chars().collect(),
        }
    }

    /// Length of the query word in code points.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Check if the query word is empty.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Same as [`are_friends`] with the query word first.
    pub fn is_friend(&self, candidate: &str) -> bool {
        if candidate == self.word {
            return false;
        }
        levenshtein_distance_to(&self.letters, candidate, FRIENDSHIP) == Some(FRIENDSHIP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_edits() {
        assert!(are_friends("cat", "cats")); // insertion
        assert!(are_friends("cat", "bat")); // substitution
        assert!(are_friends("cat", "at")); // deletion
        assert!(are_friends("cat", "car"));
    }

    #[test]
    fn test_non_friends() {
        assert!(!are_friends("cat", "dog")); // distance 3
        assert!(!are_friends("cat", "cost")); // distance 2
        assert!(!are_friends("cat", "act")); // transposition costs 2
        assert!(!are_friends("causes", "clauses!"));
    }

    #[test]
    fn test_cart_is_one_insertion_away() {
        // "cat" -> "cart" inserts a single 'r'.
        assert!(are_friends("cat", "cart"));
        assert!(!are_friends("cat", "carts"));
    }

    #[test]
    fn test_word_is_not_its_own_friend() {
        for word in ["", "a", "cat", "causes", "日本語"] {
            assert!(!are_friends(word, word), "{word} must not befriend itself");
        }
    }

    #[test]
    fn test_length_gap_is_never_friendship() {
        assert!(!are_friends("a", "abc"));
        assert!(!are_friends("abcd", "ab"));
        assert!(!are_friends("", "ab"));
    }

    #[test]
    fn test_empty_word() {
        assert!(are_friends("", "a"));
        assert!(are_friends("x", ""));
        assert!(!are_friends("", ""));
    }

    #[test]
    fn test_multibyte_characters() {
        assert!(are_friends("café", "cafe"));
        assert!(are_friends("日本", "日本語"));
        assert!(!are_friends("ü", "üüü"));
    }

    #[test]
    fn test_query_reused_across_candidates() {
        let query = FriendQuery::new("cat");
        assert_eq!(query.len(), 3);

        let candidates = ["cat", "cats", "at", "bat", "cost", "act", "dog", "cart"];
        let friends: Vec<&str> = candidates
            .into_iter()
            .filter(|candidate| query.is_friend(candidate))
            .collect();
        assert_eq!(friends, vec!["cats", "at", "bat", "cart"]);

        for candidate in candidates {
            assert_eq!(query.is_friend(candidate), are_friends("cat", candidate));
        }
    }

    #[test]
    fn test_empty_query() {
        let query = FriendQuery::new("");
        assert!(query.is_empty());
        assert!(query.is_friend("a"));
        assert!(query.is_friend("ü"));
        assert!(!query.is_friend(""));
        assert!(!query.is_friend("ab"));
    }

    #[test]
    fn test_symmetry() {
        let pairs = [("cat", "cats"), ("hello", "help"), ("at", "a"), ("abc", "xyz")];
        for (a, b) in pairs {
            assert_eq!(are_friends(a, b), are_friends(b, a));
        }
    }
}
