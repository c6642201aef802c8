//! Command line argument parsing for the wordfriends CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::network::{CandidateStrategy, TraversalOrder};

/// wordfriends - explore networks of words one edit apart
#[derive(Parser, Debug, Clone)]
#[command(name = "wordfriends")]
#[command(about = "Explore networks of words that are one edit apart")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordFriendsArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordFriendsArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Discover the full network of a seed word
    Network(NetworkArgs),

    /// List the direct friends of a word
    Friends(FriendsArgs),

    /// Show the edit distance between two words
    Distance(DistanceArgs),

    /// Show word-list statistics
    Stats(StatsArgs),
}

/// Arguments for network discovery
#[derive(Parser, Debug, Clone)]
pub struct NetworkArgs {
    /// Word list file, one word per line
    #[arg(value_name = "WORD_LIST")]
    pub word_list: PathBuf,

    /// Seed word
    #[arg(value_name = "SEED", default_value = "causes")]
    pub seed: String,

    /// Network configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Candidate selection strategy
    #[arg(short, long)]
    pub strategy: Option<CandidateStrategy>,

    /// Traversal order
    #[arg(short, long)]
    pub order: Option<TraversalOrder>,

    /// Filter candidates in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Count the seed as a member of its own network
    #[arg(long)]
    pub include_seed: bool,

    /// Include every network member in the output
    #[arg(short, long)]
    pub list: bool,

    /// Report progress while exploring
    #[arg(long)]
    pub progress: bool,
}

/// Arguments for listing direct friends
#[derive(Parser, Debug, Clone)]
pub struct FriendsArgs {
    /// Word list file, one word per line
    #[arg(value_name = "WORD_LIST")]
    pub word_list: PathBuf,

    /// Word whose friends to list
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Candidate selection strategy
    #[arg(short, long)]
    pub strategy: Option<CandidateStrategy>,
}

/// Arguments for comparing two words
#[derive(Parser, Debug, Clone)]
pub struct DistanceArgs {
    /// First word
    #[arg(value_name = "A")]
    pub a: String,

    /// Second word
    #[arg(value_name = "B")]
    pub b: String,
}

/// Arguments for word-list statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Word list file, one word per line
    #[arg(value_name = "WORD_LIST")]
    pub word_list: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
