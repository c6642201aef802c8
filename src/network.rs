//! Word friendship networks.
//!
//! Two words are friends when their Levenshtein distance is exactly one. A
//! word's network is everything reachable from it through friendships.
//!
//! [`WordNetwork`] ties the pieces together: it builds the candidate index
//! selected by [`NetworkConfig`] once, when it is constructed, and every query
//! afterwards borrows that immutable index.
//!
//! ```
//! use wordfriends::dictionary::Dictionary;
//! use wordfriends::network::{NetworkConfig, WordNetwork};
//!
//! let dictionary = Dictionary::from_text("cat cot cog dog bird");
//! let network = WordNetwork::new(dictionary, NetworkConfig::default()).unwrap();
//!
//! let mut members = network.network_of("cat");
//! members.sort();
//! assert_eq!(members, vec!["cog", "cot", "dog"]);
//! ```

pub mod config;
pub mod explorer;
pub mod neighbors;
pub mod oracle;

use std::time::{Duration, Instant};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;
use crate::error::Result;

pub use config::{CandidateStrategy, NetworkConfig, TraversalOrder};
pub use explorer::{Exploration, NetworkExplorer, Progress};
pub use neighbors::{LengthBucketFinder, NeighborFinder, TrieFinder};
pub use oracle::{FRIENDSHIP, FriendQuery, are_friends};

/// Result of exploring one seed word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkReport {
    /// The seed word.
    pub seed: String,
    /// Number of network members.
    pub size: usize,
    /// Members in discovery order.
    pub members: Vec<String>,
    /// Number of words expanded.
    pub expansions: usize,
    /// Wall-clock time of the traversal.
    #[serde(with = "duration_ms")]
    pub elapsed: Duration,
}

/// A dictionary indexed for friendship queries.
pub struct WordNetwork {
    finder: Box<dyn NeighborFinder>,
    config: NetworkConfig,
}

impl WordNetwork {
    /// Build the candidate index for `dictionary`.
    pub fn new(dictionary: Dictionary, config: NetworkConfig) -> Result<Self> {
        config.validate()?;

        if dictionary.is_empty() {
            warn!("Building a word network over an empty dictionary");
        }

        let finder: Box<dyn NeighborFinder> = match config.strategy {
            CandidateStrategy::LengthBuckets => {
                Box::new(LengthBucketFinder::new(dictionary).parallel(config.parallel))
            }
            CandidateStrategy::Trie => Box::new(TrieFinder::new(dictionary)),
        };

        Ok(WordNetwork { finder, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Number of words in the index.
    pub fn word_count(&self) -> usize {
        self.finder.word_count()
    }

    /// Direct friends of `word`.
    pub fn friends_of(&self, word: &str) -> Vec<String> {
        self.finder
            .friends_of(word)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Every word reachable from `seed`.
    pub fn network_of(&self, seed: &str) -> Vec<String> {
        self.explorer().network_of(seed)
    }

    /// Explore the network of `seed`, timing the traversal.
    pub fn explore(&self, seed: &str) -> NetworkReport {
        self.explore_with_progress(seed, |_| {})
    }

    /// Explore the network of `seed`, calling `on_progress` after every expansion.
    pub fn explore_with_progress<P>(&self, seed: &str, on_progress: P) -> NetworkReport
    where
        P: FnMut(&Progress),
    {
        let start = Instant::now();
        let exploration = self.explorer().explore(seed, on_progress);
        let elapsed = start.elapsed();

        info!(
            "Explored network of {:?}: {} words in {:?}",
            seed,
            exploration.members.len(),
            elapsed
        );

        NetworkReport {
            seed: seed.to_string(),
            size: exploration.members.len(),
            members: exploration.members,
            expansions: exploration.expansions,
            elapsed,
        }
    }

    fn explorer(&self) -> NetworkExplorer<'_, dyn NeighborFinder> {
        NetworkExplorer::new(self.finder.as_ref())
            .order(self.config.traversal)
            .include_seed(self.config.include_seed)
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = f64::deserialize(deserializer)?;
        Ok(Duration::from_secs_f64(millis.max(0.0) / 1000.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WordFriendsError;

    const WORDS: &str = "a at cat cot cog dog dig bat bit zebra zebras";

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort_unstable();
        words
    }

    #[test]
    fn test_strategies_agree() {
        let mut networks = Vec::new();
        for strategy in [CandidateStrategy::LengthBuckets, CandidateStrategy::Trie] {
            for traversal in [TraversalOrder::DepthFirst, TraversalOrder::BreadthFirst] {
                let config = NetworkConfig {
                    strategy,
                    traversal,
                    ..Default::default()
                };
                let network = WordNetwork::new(Dictionary::from_text(WORDS), config).unwrap();
                networks.push(sorted(network.network_of("cat")));
            }
        }

        let expected = vec!["a", "at", "bat", "bit", "cog", "cot", "dig", "dog"];
        for network in networks {
            assert_eq!(network, expected);
        }
    }

    #[test]
    fn test_parallel_network() {
        let config = NetworkConfig {
            parallel: true,
            ..Default::default()
        };
        let network = WordNetwork::new(Dictionary::from_text(WORDS), config).unwrap();
        assert_eq!(sorted(network.network_of("zebra")), vec!["zebras"]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = NetworkConfig {
            strategy: CandidateStrategy::Trie,
            parallel: true,
            ..Default::default()
        };
        let result = WordNetwork::new(Dictionary::from_text(WORDS), config);
        assert!(matches!(result, Err(WordFriendsError::Config(_))));
    }

    #[test]
    fn test_explore_report() {
        let network = WordNetwork::new(Dictionary::from_text(WORDS), NetworkConfig::default())
            .unwrap();
        let report = network.explore("zebra");

        assert_eq!(report.seed, "zebra");
        assert_eq!(report.size, 1);
        assert_eq!(report.members, vec!["zebras"]);
        assert_eq!(report.expansions, 2);
    }

    #[test]
    fn test_report_serializes_elapsed_as_millis() {
        let report = NetworkReport {
            seed: "cat".to_string(),
            size: 0,
            members: Vec::new(),
            expansions: 1,
            elapsed: Duration::from_millis(1500),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["elapsed"], 1500.0);

        let back: NetworkReport = serde_json::from_value(json).unwrap();
        assert_eq!(back.elapsed, Duration::from_millis(1500));
    }

    #[test]
    fn test_friends_of() {
        let network = WordNetwork::new(Dictionary::from_text(WORDS), NetworkConfig::default())
            .unwrap();
        assert_eq!(sorted(network.friends_of("cat")), vec!["at", "bat", "cot"]);
        assert_eq!(network.word_count(), 11);
    }
}
