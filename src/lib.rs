//! vcdb - TF-IDF indexing and cosine search for operation catalogs
//!
//! A catalog is a directory of text files, one per module, each holding
//! blank-line-separated entries such as
//! `add | Adds two numbers. Parameters: a, b.`. A category manifest lists the
//! modules themselves; its record order defines module ids.
//!
//! # Quick Start
//!
//! ```ignore
//! use vcdb::{vectorize_configured, Searcher, VcdbConfig};
//!
//! let config = VcdbConfig::default();
//! vectorize_configured(&config)?;
//!
//! let searcher = Searcher::new(config);
//! for r in searcher.search_configured("how to add numbers", 3)? {
//!     println!("{:.3} {}", r.similarity, r.signature);
//! }
//! ```
//!
//! # Architecture
//!
//! - `vcdb-core`: errors, configuration and result types
//! - `vcdb-search`: tokenizer, vectorizer, index store, registry, query engine

pub use vcdb_core::*;
pub use vcdb_search::*;
