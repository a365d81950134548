//! Error types used by this crate.

use std::io;

use thiserror::Error;

/// Custom error type returned when something goes wrong with loading or deduplicating game
/// titles.
///
/// Normalizing, scoring and clustering names can't fail, so this only covers the surfaces
/// around them: reading the dataset, reading configuration and pipeline preconditions.
#[derive(Error, Debug)]
pub enum DedupError {
    /// Error originating from [`io::Error`]
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Error originating from [`csv::Error`]
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A dataset row which could be read, but not understood
    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    /// A configuration value which could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The pipeline was asked to build a mapping, but there are no game names to build it from
    #[error("No game names to deduplicate")]
    NoGameNames,

    /// Error originating from any other source
    #[error("Other error: {0}")]
    Other(String),
}
