//! Module registry
//!
//! The category manifest lists one module per blank-line-separated record
//! (`name | description`). A module's id is its zero-based position among
//! the records that have a name, so reordering the manifest renumbers
//! modules.
//!
//! A missing manifest is not an error: the registry is simply empty and
//! every lookup resolves to `None`.
//!
//! `RegistryCache` keeps one parsed registry per source directory for as
//! long as the cache lives. Callers own the cache (usually through a
//! `Searcher`) and call `clear()` between independent sessions.

use crate::source::parse_entries;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};
use vcdb_core::{Result, VcdbConfig, DEFAULT_MANIFEST_NAME};

// ============================================================================
// ModuleRegistry
// ============================================================================

/// Module name → module id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleRegistry {
    ids: HashMap<String, usize>,
    /// Names in id order
    names: Vec<String>,
}

impl ModuleRegistry {
    /// Registry with no modules
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse manifest text
    pub fn parse(text: &str) -> Self {
        let mut registry = ModuleRegistry::default();
        for record in parse_entries(text) {
            let name = record.split('|').next().unwrap_or("").trim();
            if name.is_empty() {
                continue;
            }
            let id = registry.names.len();
            registry.names.push(name.to_string());
            if let Some(previous) = registry.ids.insert(name.to_string(), id) {
                warn!(module = name, previous, id, "duplicate module in manifest, last one wins");
            }
        }
        registry
    }

    /// Load the manifest at `path`; absent file → empty registry
    pub fn load_file(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let registry = Self::parse(&text);
                debug!(
                    manifest = %path.display(),
                    modules = registry.len(),
                    "loaded module registry"
                );
                Ok(registry)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(manifest = %path.display(), "no category manifest, module ids unresolved");
                Ok(Self::empty())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load `<source_dir>/<manifest_name>.<extension>`
    pub fn load(source_dir: &Path, manifest_name: &str, extension: &str) -> Result<Self> {
        Self::load_file(&manifest_path(source_dir, manifest_name, extension))
    }

    /// Id of module `name`
    pub fn id_of(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Name of the module at `id`
    pub fn name_of(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Number of named records (ids run `0..len`)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no module is registered
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(name, id)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.names.iter().enumerate().map(|(id, n)| (n.as_str(), id))
    }
}

fn manifest_path(source_dir: &Path, manifest_name: &str, extension: &str) -> PathBuf {
    source_dir.join(format!("{}.{}", manifest_name, extension))
}

// ============================================================================
// RegistryCache
// ============================================================================

/// Parsed registries keyed by source directory
///
/// Repeated lookups for the same directory return the same `Arc` without
/// re-reading the manifest. Guarded by a mutex so one cache can be shared
/// across threads.
#[derive(Debug)]
pub struct RegistryCache {
    manifest_name: String,
    extension: String,
    entries: Mutex<HashMap<PathBuf, Arc<ModuleRegistry>>>,
}

impl Default for RegistryCache {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST_NAME)
    }
}

impl RegistryCache {
    /// Cache reading `<dir>/<manifest_name>.txt`
    pub fn new(manifest_name: impl Into<String>) -> Self {
        RegistryCache {
            manifest_name: manifest_name.into(),
            extension: "txt".to_string(),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Cache following the manifest name and source extension of `config`
    pub fn for_config(config: &VcdbConfig) -> Self {
        RegistryCache {
            manifest_name: config.manifest_name.clone(),
            extension: config.source_extension.clone(),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Manifest file stem this cache reads
    pub fn manifest_name(&self) -> &str {
        &self.manifest_name
    }

    /// Registry of `source_dir`, parsed on first use
    pub fn get_or_load(&self, source_dir: &Path) -> Result<Arc<ModuleRegistry>> {
        let mut entries = self.entries.lock();
        if let Some(registry) = entries.get(source_dir) {
            debug!(source = %source_dir.display(), "module registry cache hit");
            return Ok(Arc::clone(registry));
        }
        let registry = Arc::new(ModuleRegistry::load(
            source_dir,
            &self.manifest_name,
            &self.extension,
        )?);
        entries.insert(source_dir.to_path_buf(), Arc::clone(&registry));
        Ok(registry)
    }

    /// Forget the registry of one directory
    pub fn invalidate(&self, source_dir: &Path) -> bool {
        self.entries.lock().remove(source_dir).is_some()
    }

    /// Forget every cached registry
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Number of cached directories
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// True if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
