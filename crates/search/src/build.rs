//! Batch vectorization
//!
//! Every source file becomes one index named after its stem. A file that
//! cannot be read or has no entries is reported and skipped; it never
//! aborts its siblings. The category manifest is vectorized like any other
//! source but tagged `CategoryManifest` so its matches enrich as modules.

use crate::index::DatabaseIndex;
use crate::source::{database_name, discover_sources, read_entries};
use crate::store::IndexStore;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use vcdb_core::{DatabaseKind, Error, IndexMetadata, Result, VcdbConfig};

/// One successfully written index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltIndex {
    /// Source file
    pub source: PathBuf,
    /// Written index document
    pub output: PathBuf,
    /// Number of entries indexed
    pub entries: usize,
    /// Kind recorded in the metadata
    pub kind: DatabaseKind,
}

/// A source file that was not indexed
#[derive(Debug)]
pub struct SkippedSource {
    /// Source file
    pub source: PathBuf,
    /// Why it was skipped
    pub error: Error,
}

/// Outcome of a batch build
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Indexes written, in source-name order
    pub built: Vec<BuiltIndex>,
    /// Sources skipped, in source-name order
    pub skipped: Vec<SkippedSource>,
}

impl BuildReport {
    /// Total entries across all written indexes
    pub fn total_entries(&self) -> usize {
        self.built.iter().map(|b| b.entries).sum()
    }

    /// True if every discovered source was indexed
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Vectorize one source file into `store`
///
/// # Errors
///
/// `EmptyInput` if the file has no entries; I/O errors from reading the
/// source or writing the index.
pub fn vectorize_file(
    source: &Path,
    store: &IndexStore,
    manifest_name: &str,
) -> Result<BuiltIndex> {
    let entries = read_entries(source)?;
    let name = database_name(source);
    let kind = DatabaseKind::for_database(&name, manifest_name);
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.clone());

    let count = entries.len();
    let index = DatabaseIndex::build(entries, IndexMetadata::new(file_name, kind));
    let output = store.persist(&name, &index)?;

    Ok(BuiltIndex {
        source: source.to_path_buf(),
        output,
        entries: count,
        kind,
    })
}

/// Vectorize every source file in `source_dir` into `dest_dir`
///
/// File discovery and naming follow `config` (extensions, manifest name);
/// its directories are ignored in favour of the explicit arguments.
///
/// # Errors
///
/// `NoSources` if `source_dir` holds no source files. Per-file failures
/// are collected in the report instead.
pub fn vectorize(source_dir: &Path, dest_dir: &Path, config: &VcdbConfig) -> Result<BuildReport> {
    let sources = discover_sources(source_dir, &config.source_extension)?;
    if sources.is_empty() {
        return Err(Error::NoSources(source_dir.to_path_buf()));
    }

    info!(
        count = sources.len(),
        source = %source_dir.display(),
        "vectorizing source files"
    );

    let store = IndexStore::with_extension(dest_dir, config.index_extension.clone());
    let mut report = BuildReport::default();

    for source in sources {
        match vectorize_file(&source, &store, &config.manifest_name) {
            Ok(built) => {
                info!(
                    "{} -> {} ({} entries)",
                    file_label(&built.source),
                    file_label(&built.output),
                    built.entries
                );
                report.built.push(built);
            }
            Err(error) => {
                warn!(source = %source.display(), %error, "skipping source file");
                report.skipped.push(SkippedSource { source, error });
            }
        }
    }

    info!(
        built = report.built.len(),
        skipped = report.skipped.len(),
        entries = report.total_entries(),
        "vectorization done"
    );
    Ok(report)
}

/// Vectorize `config.source_dir` into `config.vectors_dir`
pub fn vectorize_configured(config: &VcdbConfig) -> Result<BuildReport> {
    vectorize(&config.source_dir, &config.vectors_dir, config)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
