//! Sparse vectors and cosine scoring
//!
//! A sparse vector maps a vocabulary position to a TF-IDF weight. Only
//! non-zero weights are stored. Keys are kept ordered so that iteration,
//! and therefore serialization and floating-point summation order, is
//! deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// SparseVector
// ============================================================================

/// Sparse weight map: vocabulary index → weight
///
/// Serializes as a JSON object whose keys are the decimal indices
/// (`{"3": 0.12, "17": 0.4}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseVector(BTreeMap<u32, f64>);

impl SparseVector {
    /// Create an empty vector
    pub fn new() -> Self {
        SparseVector(BTreeMap::new())
    }

    /// Set the weight at `index`; zero weights are not stored
    pub fn insert(&mut self, index: u32, weight: f64) {
        if weight != 0.0 {
            self.0.insert(index, weight);
        } else {
            self.0.remove(&index);
        }
    }

    /// Weight at `index` (0.0 if absent)
    pub fn get(&self, index: u32) -> f64 {
        self.0.get(&index).copied().unwrap_or(0.0)
    }

    /// Number of stored (non-zero) weights
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no weight is stored
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(index, weight)` in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0.iter().map(|(&i, &w)| (i, w))
    }

    /// Largest stored index
    pub fn max_index(&self) -> Option<u32> {
        self.0.keys().next_back().copied()
    }

    /// Dot product
    ///
    /// Walks the smaller vector and probes the larger one.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .0
            .iter()
            .filter_map(|(k, a)| large.0.get(k).map(|b| a * b))
            .sum()
    }

    /// L2 norm (Euclidean length)
    pub fn norm(&self) -> f64 {
        self.0.values().map(|w| w * w).sum::<f64>().sqrt()
    }
}

impl FromIterator<(u32, f64)> for SparseVector {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        let mut v = SparseVector::new();
        for (i, w) in iter {
            v.insert(i, w);
        }
        v
    }
}

// ============================================================================
// Cosine similarity
// ============================================================================

/// Cosine similarity: dot(a,b) / (||a|| * ||b||)
///
/// Returns 0.0 if either vector has zero norm (including empty vectors).
/// TF-IDF weights are non-negative, so the result lies in [0, 1]; it is
/// capped at 1.0 against rounding overshoot on identical vectors.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (a.dot(b) / (norm_a * norm_b)).min(1.0)
}
