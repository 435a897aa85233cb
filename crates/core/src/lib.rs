//! Core types for vcdb
//!
//! This crate defines the foundational types used throughout the system:
//! - Error: error taxonomy shared by indexing and search
//! - DatabaseKind / IndexMetadata: provenance stored with every index
//! - SearchResult: enriched match returned by queries
//! - VcdbConfig: `vcdb.toml` configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{VcdbConfig, CONFIG_FILE_NAME, DEFAULT_MANIFEST_NAME};
pub use error::{Error, Result};
pub use types::{DatabaseKind, IndexMetadata, SearchResult};
