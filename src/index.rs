//! Candidate indexes that bound which dictionary words are compared against a query word.

pub mod length;
pub mod trie;

pub use length::LengthIndex;
pub use trie::WordTrie;
