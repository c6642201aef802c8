//! Prefix trie walked with a single Levenshtein row per node.
//!
//! Words sharing a prefix share the rows computed for that prefix, and a
//! subtree is abandoned as soon as every cell of its row exceeds the
//! friendship distance. The walk keeps an explicit stack instead of recursing.

use std::collections::BTreeMap;
use std::time::Instant;

use log::info;

use crate::dictionary::Dictionary;
use crate::network::oracle::FRIENDSHIP;
use crate::util::levenshtein::{advance_row, initial_row};

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Children keyed by code point, ordered so walks are deterministic.
    children: BTreeMap<char, usize>,
    /// Index into `WordTrie::words` if a word ends here.
    word: Option<usize>,
}

/// A prefix trie over the distinct words of a dictionary.
#[derive(Debug, Clone)]
pub struct WordTrie {
    nodes: Vec<TrieNode>,
    words: Vec<String>,
}

impl WordTrie {
    /// Create a new empty trie.
    pub fn new() -> Self {
        WordTrie {
            nodes: vec![TrieNode::default()],
            words: Vec::new(),
        }
    }

    /// Build a trie from every word of the dictionary. Duplicates are stored once.
    pub fn build(dictionary: Dictionary) -> Self {
        let start = Instant::now();
        let mut trie = WordTrie::new();
        for word in dictionary.into_words() {
            trie.insert(word);
        }

        info!(
            "Built word trie over {} distinct words with {} nodes ({:?})",
            trie.words.len(),
            trie.nodes.len(),
            start.elapsed()
        );

        trie
    }

    /// Insert a word. Returns false if it was already present.
    pub fn insert(&mut self, word: String) -> bool {
        let mut current = ROOT;

        for letter in word.chars() {
            current = match self.nodes[current].children.get(&letter) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(letter, child);
                    child
                }
            };
        }

        if self.nodes[current].word.is_some() {
            return false;
        }
        self.nodes[current].word = Some(self.words.len());
        self.words.push(word);
        true
    }

    /// Every stored word at edit distance exactly one from `word`, in
    /// lexicographic order.
    pub fn friends_of(&self, word: &str) -> Vec<&str> {
        let target: Vec<char> = word.chars().collect();
        let mut results = Vec::new();
        let mut stack = vec![(ROOT, initial_row(&target))];

        while let Some((node_id, row)) = stack.pop() {
            let node = &self.nodes[node_id];

            if let Some(word_id) = node.word
                && row[target.len()] == FRIENDSHIP
            {
                results.push(self.words[word_id].as_str());
            }

            // Reverse so the smallest letter is expanded first.
            for (&letter, &child) in node.children.iter().rev() {
                let mut child_row = vec![0; target.len() + 1];
                let min_in_row = advance_row(&row, letter, &target, &mut child_row);
                if min_in_row <= FRIENDSHIP {
                    stack.push((child, child_row));
                }
            }
        }

        results
    }

    /// Get the number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordTrie {
    fn default() -> Self {
        Self::new()
    }
}
