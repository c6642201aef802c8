//! Shared utility modules used across wordfriends components.

pub mod levenshtein;
