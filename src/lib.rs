//! # wordfriends
//!
//! Discover the friendship network of a word: two words are friends when their
//! Levenshtein distance is exactly one, and a word's network is every
//! dictionary word reachable from it through friendships.
//!
//! ## Features
//!
//! - Two-row edit distance over Unicode code points
//! - Length-bucketed candidate index, or a pruned prefix-trie walk
//! - Iterative depth-first or breadth-first expansion with a progress hook
//! - Optional parallel candidate filtering

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod index;
pub mod network;
pub mod util;

pub mod prelude {
    pub use crate::dictionary::Dictionary;
    pub use crate::error::{Result, WordFriendsError};
    pub use crate::network::{
        CandidateStrategy, NetworkConfig, NetworkReport, TraversalOrder, WordNetwork, are_friends,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
