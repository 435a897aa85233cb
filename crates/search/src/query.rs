//! Query engine
//!
//! A query is projected into an existing database's vector space: term
//! frequencies are normalized by the query's own token count, weights come
//! from that database's idf, and tokens outside its vocabulary are dropped
//! (they are not penalized, which keeps scores comparable across databases
//! of different vocabulary size).
//!
//! Ranking is brute force over every entry:
//! 1. Score entries in position order
//! 2. Sort by (score desc, position asc)
//! 3. Truncate to k

use crate::index::DatabaseIndex;
use crate::scorer::{cosine_similarity, SparseVector};
use crate::tokenizer::tokenize;
use crate::vectorizer::term_frequencies;
use std::cmp::Ordering;

/// A scored entry of one database
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredEntry {
    /// Entry position within its database
    pub position: usize,
    /// Cosine similarity to the query
    pub score: f64,
}

/// A scored entry of one of several databases
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredHit {
    /// Index of the database in the slice passed to `search_databases`
    pub database: usize,
    /// Entry position within that database
    pub position: usize,
    /// Cosine similarity to the query
    pub score: f64,
}

/// Project `tokens` into `index`'s vector space
pub fn query_vector(tokens: &[String], index: &DatabaseIndex) -> SparseVector {
    term_frequencies(tokens, |t| index.vocab_position(t).is_some())
        .into_iter()
        .filter_map(|(t, tf)| {
            index
                .vocab_position(t)
                .map(|pos| (pos, tf * index.idf_of(t)))
        })
        .collect()
}

/// Score every entry of `index` against an already projected query
fn score_all(query: &SparseVector, index: &DatabaseIndex) -> Vec<ScoredEntry> {
    index
        .vectors
        .iter()
        .enumerate()
        .map(|(position, v)| ScoredEntry {
            position,
            score: cosine_similarity(query, v),
        })
        .collect()
}

fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Rank the entries of `index` against `query_text`
///
/// Returns at most `top_k` entries, highest score first, ties by position.
/// A query without tokens, an empty index or `top_k == 0` yields nothing.
pub fn search(query_text: &str, index: &DatabaseIndex, top_k: usize) -> Vec<ScoredEntry> {
    let tokens = tokenize(query_text);
    if tokens.is_empty() || top_k == 0 {
        return Vec::new();
    }
    let query = query_vector(&tokens, index);
    let mut results = score_all(&query, index);

    // Stable sort: equal scores keep ascending position order
    results.sort_by(|a, b| by_score_desc(a.score, b.score));
    results.truncate(top_k);
    results
}

/// Rank `query_text` against several databases and merge
///
/// Each database is scored in its own vector space; the union is sorted by
/// score (ties by database order, then position) and truncated to `top_k`.
pub fn search_databases(
    query_text: &str,
    databases: &[&DatabaseIndex],
    top_k: usize,
) -> Vec<ScoredHit> {
    let mut merged: Vec<ScoredHit> = databases
        .iter()
        .enumerate()
        .flat_map(|(database, index)| {
            search(query_text, index, top_k)
                .into_iter()
                .map(move |e| ScoredHit {
                    database,
                    position: e.position,
                    score: e.score,
                })
        })
        .collect();

    merged.sort_by(|a, b| by_score_desc(a.score, b.score));
    merged.truncate(top_k);
    merged
}
