//! Error types for vcdb
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! An absent category manifest is deliberately not represented here: it
//! yields an empty module registry, not an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vcdb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for vcdb
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// A source file produced no entries after parsing
    #[error("Empty input: {} has no entries", .0.display())]
    EmptyInput(PathBuf),

    /// Index document (or index directory) does not exist
    #[error("Index not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Persisted index could not be parsed into the expected shape
    #[error("Corrupt index {}: {reason}", .path.display())]
    Corrupt {
        /// Location of the offending document
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// Build found no source files at the given location
    #[error("No source files found in {}", .0.display())]
    NoSources(PathBuf),

    /// Invalid argument supplied by the caller
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file could not be parsed or holds invalid values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error while encoding an index
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl Error {
    /// Build a `Corrupt` error for the document at `path`
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::Corrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors that mean "could not search" at query time
    pub fn is_index_error(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::Corrupt { .. })
    }
}
