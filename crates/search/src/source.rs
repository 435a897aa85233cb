//! Source catalog reading
//!
//! A source file holds one entry per blank-line-separated block. The first
//! `|`-delimited segment of an entry is its name, the rest free text.

use std::path::{Path, PathBuf};
use vcdb_core::{Error, Result};

/// Split catalog text into trimmed, non-empty entries
pub fn parse_entries(text: &str) -> Vec<String> {
    let normalized;
    let text = if text.contains('\r') {
        normalized = text.replace("\r\n", "\n");
        normalized.as_str()
    } else {
        text
    };
    text.split("\n\n")
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(String::from)
        .collect()
}

/// Read the entries of one source file
///
/// # Errors
///
/// `EmptyInput` if the file has no entries, `IoError` if it cannot be read.
pub fn read_entries(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    let entries = parse_entries(&text);
    if entries.is_empty() {
        return Err(Error::EmptyInput(path.to_path_buf()));
    }
    Ok(entries)
}

/// Files in `dir` with the given extension, sorted by path
///
/// A missing directory yields an empty list.
pub fn discover_sources(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    list_with_extension(dir, extension)
}

pub(crate) fn list_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let read_dir = match std::fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let mut files = Vec::new();
    for entry in read_dir {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Database name of a file: its stem
pub fn database_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
