//! Query entry points
//!
//! `Searcher` ties configuration, the module registry cache and the index
//! store together:
//! - `search`: one index document
//! - `search_all`: every index document in a directory, merged by score
//!
//! Failures to search (missing or corrupt index) are errors; "no match" is
//! an empty `Ok`.

use crate::enrich::enrich;
use crate::index::DatabaseIndex;
use crate::query::{search as rank, search_databases};
use crate::registry::{ModuleRegistry, RegistryCache};
use crate::source::database_name;
use crate::store::{load_index, IndexStore};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use vcdb_core::{Error, Result, SearchResult, VcdbConfig};

/// Search handle owning the registry cache
///
/// Build one per session; call `reset` to drop cached registries.
#[derive(Debug)]
pub struct Searcher {
    config: VcdbConfig,
    registries: Arc<RegistryCache>,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(VcdbConfig::default())
    }
}

impl Searcher {
    /// Searcher with its own registry cache
    pub fn new(config: VcdbConfig) -> Self {
        let registries = Arc::new(RegistryCache::for_config(&config));
        Searcher { config, registries }
    }

    /// Searcher sharing an existing registry cache
    pub fn with_cache(config: VcdbConfig, registries: Arc<RegistryCache>) -> Self {
        Searcher { config, registries }
    }

    /// Active configuration
    pub fn config(&self) -> &VcdbConfig {
        &self.config
    }

    /// Shared registry cache
    pub fn registries(&self) -> &Arc<RegistryCache> {
        &self.registries
    }

    /// Drop every cached module registry
    pub fn reset(&self) {
        self.registries.clear();
    }

    /// Registry of the configured source directory
    pub fn registry(&self) -> Result<Arc<ModuleRegistry>> {
        self.registries.get_or_load(&self.config.source_dir)
    }

    /// Search one index document
    pub fn search(&self, query: &str, index_path: &Path, top_k: usize) -> Result<Vec<SearchResult>> {
        let registry = self.registry()?;
        self.search_with_registry(query, index_path, top_k, &registry)
    }

    /// Search one index document, resolving module ids with `registry`
    pub fn search_with_registry(
        &self,
        query: &str,
        index_path: &Path,
        top_k: usize,
        registry: &ModuleRegistry,
    ) -> Result<Vec<SearchResult>> {
        check_top_k(top_k)?;
        let index = load_index(index_path)?;
        let name = database_name(index_path);

        let results: Vec<SearchResult> = rank(query, &index, top_k)
            .into_iter()
            .map(|hit| self.enrich_hit(&index, &name, hit.position, hit.score, registry))
            .collect();

        debug!(
            database = %name,
            query,
            results = results.len(),
            "searched index"
        );
        Ok(results)
    }

    /// Search every index document in `index_dir`
    ///
    /// Each database contributes at most `top_k` matches; the union is
    /// sorted by descending similarity and truncated to `top_k`.
    pub fn search_all(&self, query: &str, index_dir: &Path, top_k: usize) -> Result<Vec<SearchResult>> {
        let registry = self.registry()?;
        self.search_all_with_registry(query, index_dir, top_k, &registry)
    }

    /// `search_all` with an explicit registry
    pub fn search_all_with_registry(
        &self,
        query: &str,
        index_dir: &Path,
        top_k: usize,
        registry: &ModuleRegistry,
    ) -> Result<Vec<SearchResult>> {
        check_top_k(top_k)?;
        let store = IndexStore::with_extension(index_dir, self.config.index_extension.clone());

        let mut names = Vec::new();
        let mut indexes = Vec::new();
        for handle in store.list()? {
            names.push(database_name(&handle));
            indexes.push(load_index(&handle)?);
        }
        let refs: Vec<&DatabaseIndex> = indexes.iter().collect();

        let results: Vec<SearchResult> = search_databases(query, &refs, top_k)
            .into_iter()
            .map(|hit| {
                self.enrich_hit(
                    &indexes[hit.database],
                    &names[hit.database],
                    hit.position,
                    hit.score,
                    registry,
                )
            })
            .collect();

        debug!(
            databases = indexes.len(),
            query,
            results = results.len(),
            "searched all indexes"
        );
        Ok(results)
    }

    /// `search_all` over the configured vectors directory
    pub fn search_configured(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        self.search_all(query, &self.config.vectors_dir, top_k)
    }

    fn enrich_hit(
        &self,
        index: &DatabaseIndex,
        name: &str,
        position: usize,
        score: f64,
        registry: &ModuleRegistry,
    ) -> SearchResult {
        let kind = index
            .metadata
            .kind_or_derive(name, &self.config.manifest_name);
        enrich(&index.entries[position], position, score, name, kind, registry)
    }
}

fn check_top_k(top_k: usize) -> Result<()> {
    if top_k == 0 {
        return Err(Error::InvalidInput("top_k must be at least 1".to_string()));
    }
    Ok(())
}
