//! vcdb Comprehensive Test Suite
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Index Invariants** (alignment, vocab bounds, determinism)
//! - **Tier 2: Search Correctness** (ranking, ties, empty queries, merging)
//! - **Tier 3: Enrichment** (module ids, signatures, category results)
//! - **Tier 4: Persistence** (round trip, corruption, missing indexes)
//! - **Tier 5: Batch Build** (skip semantics, manifest tagging)
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test vcdb_comprehensive
//! cargo test --test vcdb_comprehensive tier2
//! ```

mod test_utils;



// Tier 3: Enrichment
mod tier3_enrichment;

// Tier 4: Persistence
mod tier4_persistence;

// Tier 5: Batch Build
mod tier5_build;
