//! Per-database vector index
//!
//! `DatabaseIndex` is the value persisted for one source file:
//! entries, vocab, idf, vectors and metadata. It is immutable after build;
//! a changed source is re-vectorized from scratch.
//!
//! # Invariants
//!
//! - `vectors.len() == entries.len()`
//! - every vector key is `< vocab.len()`
//! - `vocab` is strictly ascending (sorted, no duplicates)
//!
//! Build guarantees them; `validate` re-checks them on load.

use crate::scorer::SparseVector;
use crate::vectorizer::TfIdfModel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vcdb_core::IndexMetadata;

/// TF-IDF index of one database
///
/// Field order matches the persisted document layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseIndex {
    /// Sorted, deduplicated tokens
    pub vocab: Vec<String>,
    /// Inverse document frequency per token
    pub idf: BTreeMap<String, f64>,
    /// One sparse vector per entry
    pub vectors: Vec<SparseVector>,
    /// Original entry text
    pub entries: Vec<String>,
    /// Provenance
    pub metadata: IndexMetadata,
}

impl DatabaseIndex {
    /// Vectorize `entries` into a new index
    pub fn build(entries: Vec<String>, metadata: IndexMetadata) -> Self {
        let TfIdfModel {
            vocab,
            idf,
            vectors,
        } = TfIdfModel::fit(&entries);
        DatabaseIndex {
            vocab,
            idf,
            vectors,
            entries,
            metadata,
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of `token` in the vocabulary
    pub fn vocab_position(&self, token: &str) -> Option<u32> {
        self.vocab
            .binary_search_by(|w| w.as_str().cmp(token))
            .ok()
            .map(|i| i as u32)
    }

    /// idf of `token`, 0.0 if unknown
    pub fn idf_of(&self, token: &str) -> f64 {
        self.idf.get(token).copied().unwrap_or(0.0)
    }

    /// Check the structural invariants
    ///
    /// Returns a description of the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if self.vectors.len() != self.entries.len() {
            return Err(format!(
                "{} vectors for {} entries",
                self.vectors.len(),
                self.entries.len()
            ));
        }
        if let Some(pair) = self.vocab.windows(2).find(|p| p[0] >= p[1]) {
            return Err(format!(
                "vocab not strictly sorted at {:?} / {:?}",
                pair[0], pair[1]
            ));
        }
        for (pos, v) in self.vectors.iter().enumerate() {
            if let Some(max) = v.max_index() {
                if max as usize >= self.vocab.len() {
                    return Err(format!(
                        "vector {} references vocab index {} (vocab size {})",
                        pos,
                        max,
                        self.vocab.len()
                    ));
                }
            }
        }
        Ok(())
    }
}
