//! Command implementations for the wordfriends CLI.

use std::path::Path;

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::Dictionary;
use crate::error::{Result, WordFriendsError};
use crate::index::LengthIndex;
use crate::network::{CandidateStrategy, NetworkConfig, WordNetwork, are_friends};
use crate::util::levenshtein::levenshtein_distance;

/// Execute a CLI command.
pub fn execute_command(args: WordFriendsArgs) -> Result<()> {
    match &args.command {
        Command::Network(network_args) => discover_network(network_args, &args),
        Command::Friends(friends_args) => list_friends(friends_args, &args),
        Command::Distance(distance_args) => compare_words(distance_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Discover the network of a seed word.
fn discover_network(args: &NetworkArgs, cli_args: &WordFriendsArgs) -> Result<()> {
    let config = network_config(args)?;
    let dictionary = load_word_list(&args.word_list)?;
    if !dictionary.contains(&args.seed) {
        warn!("Seed {:?} is not in the word list", args.seed);
    }
    let network = WordNetwork::new(dictionary, config)?;

    let interval = network.config().progress_interval;
    let report = if args.progress {
        network.explore_with_progress(&args.seed, |progress| {
            if progress.expanded % interval == 0 {
                eprintln!(
                    "Current size is {} ({} expanded, {} pending)",
                    progress.discovered, progress.expanded, progress.frontier
                );
            }
        })
    } else {
        network.explore(&args.seed)
    };

    output_result(
        &NetworkOutput {
            seed: report.seed,
            size: report.size,
            expansions: report.expansions,
            duration_ms: report.elapsed.as_secs_f64() * 1000.0,
            members: args.list.then_some(report.members),
        },
        cli_args,
    )
}

/// List the direct friends of a word.
fn list_friends(args: &FriendsArgs, cli_args: &WordFriendsArgs) -> Result<()> {
    let config = NetworkConfig {
        strategy: args.strategy.unwrap_or_default(),
        ..Default::default()
    };
    let dictionary = load_word_list(&args.word_list)?;
    let network = WordNetwork::new(dictionary, config)?;

    output_result(
        &FriendsOutput {
            word: args.word.clone(),
            friends: network.friends_of(&args.word),
        },
        cli_args,
    )
}

/// Compare two words.
fn compare_words(args: &DistanceArgs, cli_args: &WordFriendsArgs) -> Result<()> {
    output_result(
        &DistanceOutput {
            a: args.a.clone(),
            b: args.b.clone(),
            distance: levenshtein_distance(&args.a, &args.b),
            friends: are_friends(&args.a, &args.b),
        },
        cli_args,
    )
}

/// Show per-length statistics for a word list.
fn show_stats(args: &StatsArgs, cli_args: &WordFriendsArgs) -> Result<()> {
    let index = LengthIndex::build(load_word_list(&args.word_list)?);
    let buckets: Vec<LengthBucket> = index
        .buckets()
        .map(|(length, words)| LengthBucket { length, words })
        .collect();

    output_result(
        &StatsOutput {
            total_words: index.len(),
            distinct_lengths: buckets.len(),
            buckets,
        },
        cli_args,
    )
}

/// Merge the optional config file with command line overrides.
fn network_config(args: &NetworkArgs) -> Result<NetworkConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading network config from: {}", path.display());
            NetworkConfig::load_from_file(path)?
        }
        None => NetworkConfig::default(),
    };

    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(order) = args.order {
        config.traversal = order;
    }
    if args.parallel {
        config.parallel = true;
    }
    if args.include_seed {
        config.include_seed = true;
    }
    if config.parallel && config.strategy == CandidateStrategy::Trie {
        warn!("--parallel has no effect with the trie strategy");
        config.parallel = false;
    }

    config.validate()?;
    Ok(config)
}

/// Load a word list, refusing an empty one.
fn load_word_list(path: &Path) -> Result<Dictionary> {
    info!("Loading word list from: {}", path.display());
    let dictionary = Dictionary::load_from_file(path)?;
    if dictionary.is_empty() {
        return Err(WordFriendsError::dictionary(format!(
            "word list {} contains no words",
            path.display()
        )));
    }
    info!("Loaded {} words", dictionary.len());
    Ok(dictionary)
}
