//! Configuration for building and exploring a word network.

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordFriendsError};

/// How candidate words are selected before the distance test.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateStrategy {
    /// Compare against words of length L-1, L and L+1 from a length-sorted list
    #[default]
    #[value(name = "length")]
    #[serde(rename = "length")]
    LengthBuckets,
    /// Walk a prefix trie, pruning branches already more than one edit away
    Trie,
}

/// Order in which discovered words are expanded.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalOrder {
    /// Last discovered, first expanded
    #[default]
    #[value(name = "dfs")]
    #[serde(rename = "dfs")]
    DepthFirst,
    /// First discovered, first expanded
    #[value(name = "bfs")]
    #[serde(rename = "bfs")]
    BreadthFirst,
}

/// Configuration for a [`WordNetwork`](crate::network::WordNetwork).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Candidate selection strategy.
    pub strategy: CandidateStrategy,
    /// Frontier discipline.
    pub traversal: TraversalOrder,
    /// Filter length-bucket candidates on the rayon thread pool.
    pub parallel: bool,
    /// Report the seed as the first member of its own network.
    pub include_seed: bool,
    /// Number of expansions between progress reports.
    pub progress_interval: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig {
            strategy: CandidateStrategy::LengthBuckets,
            traversal: TraversalOrder::DepthFirst,
            parallel: false,
            include_seed: false,
            progress_interval: 1000,
        }
    }
}

impl NetworkConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading network config {}", path.display()))?;
        let config: NetworkConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the options can be used together.
    pub fn validate(&self) -> Result<()> {
        if self.parallel && self.strategy == CandidateStrategy::Trie {
            return Err(WordFriendsError::invalid_config(
                "parallel candidate filtering is only available with the length strategy",
            ));
        }
        if self.progress_interval == 0 {
            return Err(WordFriendsError::invalid_config(
                "progress_interval must be greater than zero",
            ));
        }
        Ok(())
    }
}
