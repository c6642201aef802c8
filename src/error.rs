//! Error types for the wordfriends library.
//!
//! The friendship core (distance oracle, candidate indexes, neighbor finders and
//! the network explorer) is total and never fails. Errors only come from the
//! word-list loader and from configuration handling, and all of them are
//! represented by the [`WordFriendsError`] enum.
//!
//! # Examples
//!
//! ```
//! use wordfriends::error::{WordFriendsError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordFriendsError::dictionary("word list is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordfriends operations.
#[derive(Error, Debug)]
pub enum WordFriendsError {
    /// I/O errors (opening or reading a word list, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Word-list errors (malformed UTF-8, empty list)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with WordFriendsError.
pub type Result<T> = std::result::Result<T, WordFriendsError>;

impl WordFriendsError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        WordFriendsError::Dictionary(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordFriendsError::Config(msg.into())
    }
}
