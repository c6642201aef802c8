//! Word lists that the friendship network is computed over.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::{Result, WordFriendsError};

/// An ordered sequence of words.
///
/// The list is kept exactly as loaded: order is preserved and duplicates are
/// allowed. Indexes built from it take ownership of the words and reorder them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Dictionary { words: Vec::new() }
    }

    /// Create a dictionary from an existing list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dictionary {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a dictionary from whitespace-delimited text.
    pub fn from_text(text: &str) -> Self {
        Dictionary::from_words(text.split_whitespace())
    }

    /// Read whitespace-delimited words from a buffered reader.
    ///
    /// Invalid UTF-8 is reported as a dictionary error naming the offending line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| match e.kind() {
                ErrorKind::InvalidData => {
                    WordFriendsError::dictionary(format!("line {}: {}", line_num + 1, e))
                }
                _ => WordFriendsError::Io(e),
            })?;
            words.extend(line.split_whitespace().map(str::to_string));
        }

        Ok(Dictionary { words })
    }

    /// Load a dictionary from a text file with one word per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Dictionary::from_reader(BufReader::new(file))
    }

    /// Add a word to the end of the dictionary.
    pub fn push<S: Into<String>>(&mut self, word: S) {
        self.words.push(word.into());
    }

    /// Get all words in load order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Consume the dictionary, returning its words.
    pub fn into_words(self) -> Vec<String> {
        self.words
    }

    /// Check if a word is present. This is a linear scan.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Get the number of words, duplicates included.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dictionary::from_words(iter)
    }
}
