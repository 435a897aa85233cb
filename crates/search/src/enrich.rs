//! Result enrichment
//!
//! Maps a matched entry back to its structured identity:
//! - op entries: module = the database, params parsed from the
//!   `Parameters: a, b.` clause, signature `"{module_id}.{opcode}(a, b)"`
//! - category entries: the entry names a module; no params, no signature
//!
//! An unresolved module id prints as `?` in the signature.

use crate::registry::ModuleRegistry;
use once_cell::sync::Lazy;
use regex::Regex;
use vcdb_core::{DatabaseKind, SearchResult};

/// `Parameters:` (or `Parameter:`) up to the next period
static PARAMS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)parameters?:\s*([^.]+)").unwrap());

/// Name of an entry: the text before the first `|`, trimmed
pub fn parse_op_name(entry: &str) -> &str {
    entry.split('|').next().unwrap_or(entry).trim()
}

/// Parameter names from the first `Parameters:` clause of `entry`
///
/// # Example
///
/// ```
/// use vcdb_search::enrich::parse_params;
///
/// assert_eq!(parse_params("rect | Draws. Parameters: x, y, w, h."), vec!["x", "y", "w", "h"]);
/// assert!(parse_params("clear | Clears the screen.").is_empty());
/// ```
pub fn parse_params(entry: &str) -> Vec<String> {
    PARAMS
        .captures(entry)
        .and_then(|c| c.get(1))
        .map(|m| {
            m.as_str()
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Canonical signature `"{module_id or ?}.{opcode}({params})"`
pub fn make_signature(module_id: Option<usize>, opcode: usize, params: &[String]) -> String {
    let module = match module_id {
        Some(id) => id.to_string(),
        None => "?".to_string(),
    };
    format!("{}.{}({})", module, opcode, params.join(", "))
}

/// Build the structured result for one match
pub fn enrich(
    entry: &str,
    opcode: usize,
    similarity: f64,
    database: &str,
    kind: DatabaseKind,
    registry: &ModuleRegistry,
) -> SearchResult {
    let op_name = parse_op_name(entry).to_string();

    let (module_name, params, has_signature) = match kind {
        DatabaseKind::Operation => (database.to_string(), parse_params(entry), true),
        DatabaseKind::CategoryManifest => (op_name.clone(), Vec::new(), false),
    };
    let module_id = registry.id_of(&module_name);
    let signature = if has_signature {
        make_signature(module_id, opcode, &params)
    } else {
        String::new()
    };

    SearchResult {
        entry: entry.to_string(),
        opcode,
        similarity,
        database: database.to_string(),
        kind,
        module_name,
        module_id,
        op_name,
        params,
        signature,
    }
}
