//! TF-IDF indexing and search for vcdb
//!
//! This crate provides:
//! - tokenizer: lowercase `\w+` tokens
//! - vectorizer / index: TF-IDF model fitted per source file
//! - scorer: sparse vectors and cosine similarity
//! - store: JSON index documents on disk
//! - registry: module name -> id table with a per-directory cache
//! - query: ranking within one or many indexes
//! - enrich: op name, params and signature of a match
//! - build / searcher: the batch vectorizer and the query entry points
//!
//! # Usage
//!
//! ```ignore
//! use vcdb_search::{vectorize_configured, Searcher};
//!
//! let config = vcdb_core::VcdbConfig::load_or_default(std::path::Path::new("vcdb.toml"))?;
//! vectorize_configured(&config)?;
//! let results = Searcher::new(config).search_configured("add two numbers", 3)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod build;
pub mod enrich;
pub mod index;
pub mod query;
pub mod registry;
pub mod scorer;
pub mod searcher;
pub mod source;
pub mod store;
pub mod tokenizer;
pub mod vectorizer;

// Re-export commonly used types
pub use build::{vectorize, vectorize_configured, vectorize_file, BuildReport, BuiltIndex, SkippedSource};
pub use enrich::{enrich, make_signature, parse_op_name, parse_params};
pub use index::DatabaseIndex;
pub use query::{search, search_databases, ScoredEntry, ScoredHit};
pub use registry::{ModuleRegistry, RegistryCache};
pub use scorer::{cosine_similarity, SparseVector};
pub use searcher::Searcher;
pub use source::{database_name, discover_sources, parse_entries, read_entries};
pub use store::{load_index, write_index, IndexStore};
pub use tokenizer::{tokenize, tokens};
pub use vectorizer::TfIdfModel;
