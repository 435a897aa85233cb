//! Index store: one JSON document per database
//!
//! Documents live in a single directory as `<database>.<ext>` (`.dat` by
//! default). The layout is human-readable, pretty-printed JSON:
//!
//! ```text
//! { "vocab": [...], "idf": {token: f64}, "vectors": [{"<index>": f64}],
//!   "entries": [...], "metadata": {"source": "...", "kind": "op"} }
//! ```
//!
//! Written atomically via temp + rename. Floats are written in shortest
//! round-trip form and parsed exactly, so `load(persist(x)) == x`.

use crate::index::DatabaseIndex;
use crate::source::{database_name, list_with_extension};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use vcdb_core::{Error, Result};

/// Directory of persisted indexes
#[derive(Debug, Clone)]
pub struct IndexStore {
    dir: PathBuf,
    extension: String,
}

impl IndexStore {
    /// Store rooted at `dir` using the `.dat` extension
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_extension(dir, "dat")
    }

    /// Store rooted at `dir` using a custom extension
    pub fn with_extension(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        IndexStore {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Handle (path) of database `name`
    pub fn handle(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, self.extension))
    }

    /// Write `index` as database `name`, returning its handle
    ///
    /// Creates the directory if needed and replaces any previous document.
    pub fn persist(&self, name: &str, index: &DatabaseIndex) -> Result<PathBuf> {
        let path = self.handle(name);
        write_index(&path, index)?;
        Ok(path)
    }

    /// Load the document behind `handle`
    pub fn load(&self, handle: &Path) -> Result<DatabaseIndex> {
        load_index(handle)
    }

    /// Load database `name`
    pub fn load_named(&self, name: &str) -> Result<DatabaseIndex> {
        load_index(&self.handle(name))
    }

    /// Handles of every document in the store, sorted by file name
    ///
    /// # Errors
    ///
    /// `NotFound` if the directory does not exist.
    pub fn list(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Err(Error::NotFound(self.dir.clone()));
        }
        list_with_extension(&self.dir, &self.extension)
    }

    /// Database names in the store, sorted
    pub fn names(&self) -> Result<Vec<String>> {
        Ok(self.list()?.iter().map(|p| database_name(p)).collect())
    }
}

/// Serialize `index` to `path` atomically (temp + fsync + rename)
pub fn write_index(path: &Path, index: &DatabaseIndex) -> Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir)?;

    let mut payload =
        serde_json::to_vec_pretty(index).map_err(|e| Error::SerializationError(e.to_string()))?;
    payload.push(b'\n');

    let tmp_path = path.with_extension("tmp");
    if let Err(e) = write_synced(&tmp_path, &payload) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    std::fs::rename(&tmp_path, path)?;
    debug!(path = %path.display(), bytes = payload.len(), "index written");
    Ok(())
}

fn write_synced(path: &Path, payload: &[u8]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(payload)?;
    file.sync_all()
}

/// Parse and validate the document at `path`
///
/// # Errors
///
/// `NotFound` if there is no file, `Corrupt` if it is not a well-formed
/// index (bad JSON, missing field, wrong value types, broken invariants).
pub fn load_index(path: &Path) -> Result<DatabaseIndex> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };
    let index: DatabaseIndex =
        serde_json::from_slice(&bytes).map_err(|e| Error::corrupt(path, e.to_string()))?;
    index
        .validate()
        .map_err(|reason| Error::corrupt(path, reason))?;
    debug!(
        path = %path.display(),
        entries = index.len(),
        vocab = index.vocab.len(),
        "index loaded"
    );
    Ok(index)
}
