//! Shared value types
//!
//! - DatabaseKind: whether an index holds operations or the category manifest
//! - IndexMetadata: provenance stored alongside every persisted index
//! - SearchResult: one enriched, ranked match

use serde::{Deserialize, Serialize};

// ============================================================================
// DatabaseKind
// ============================================================================

/// What a database's entries describe
///
/// Decided when the index is built and stored in its metadata, so query
/// time never has to compare database names against the manifest name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatabaseKind {
    /// Entries are operations of a single module
    #[serde(rename = "op")]
    Operation,
    /// Entries are the modules themselves (the category manifest)
    #[serde(rename = "category")]
    CategoryManifest,
}

impl DatabaseKind {
    /// Kind of the database named `database_name`, given the manifest name
    pub fn for_database(database_name: &str, manifest_name: &str) -> Self {
        if database_name == manifest_name {
            DatabaseKind::CategoryManifest
        } else {
            DatabaseKind::Operation
        }
    }

    /// Wire name (`"op"` / `"category"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseKind::Operation => "op",
            DatabaseKind::CategoryManifest => "category",
        }
    }
}

impl std::fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// IndexMetadata
// ============================================================================

/// Provenance of a persisted index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMetadata {
    /// Original source file name (e.g. `mymod.txt`)
    pub source: String,
    /// Kind of entries; absent in documents written by older builds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<DatabaseKind>,
}

impl IndexMetadata {
    /// Metadata for an index built from `source`
    pub fn new(source: impl Into<String>, kind: DatabaseKind) -> Self {
        IndexMetadata {
            source: source.into(),
            kind: Some(kind),
        }
    }

    /// Stored kind, or the kind derived from the database name
    pub fn kind_or_derive(&self, database_name: &str, manifest_name: &str) -> DatabaseKind {
        self.kind
            .unwrap_or_else(|| DatabaseKind::for_database(database_name, manifest_name))
    }
}

// ============================================================================
// SearchResult
// ============================================================================

/// One ranked match, enriched with its structured identity
///
/// Field names are part of the JSON output contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matched entry text
    pub entry: String,
    /// Position of the entry within its database
    pub opcode: usize,
    /// Cosine similarity to the query
    pub similarity: f64,
    /// Database the entry came from
    pub database: String,
    /// Operation or category entry
    pub kind: DatabaseKind,
    /// Resolved module name
    pub module_name: String,
    /// Module id from the category manifest, if the module is listed
    pub module_id: Option<usize>,
    /// Name before the first `|`
    pub op_name: String,
    /// Parsed parameter names
    pub params: Vec<String>,
    /// `moduleId.opcode(params)`, empty for category entries
    pub signature: String,
}
