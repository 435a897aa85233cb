//! Tier 3: Enrichment
//!
//! Module ids follow manifest order; op results carry params and a
//! signature, category results name a module.

use super::test_utils::*;
use std::sync::Arc;
use vcdb::{DatabaseKind, ModuleRegistry, RegistryCache};

/// Ids are dense and follow manifest order
#[test]
fn test_tier3_registry_ids() {
    let registry = ModuleRegistry::parse("alpha | x\n\nbeta | y\n");
    assert_eq!(registry.id_of("alpha"), Some(0));
    assert_eq!(registry.id_of("beta"), Some(1));
    assert_eq!(registry.id_of("gamma"), None);
    assert_eq!(registry.name_of(1), Some("beta"));
}

/// The second module's ops carry its id
#[test]
fn test_tier3_signature_uses_module_id() {
    let catalog = built_catalog();
    let results = catalog
        .searcher()
        .search("circle", &catalog.index_path("draw"), 1)
        .unwrap();
    assert_eq!(results[0].module_name, "draw");
    assert_eq!(results[0].module_id, Some(1));
    assert_eq!(results[0].signature, "1.1(x, y, r)");
}

/// Ops without a parameter clause get an empty parameter list
#[test]
fn test_tier3_no_params() {
    let catalog = built_catalog();
    let results = catalog
        .searcher()
        .search("clears the screen", &catalog.index_path("draw"), 1)
        .unwrap();
    assert_eq!(results[0].op_name, "clear");
    assert!(results[0].params.is_empty());
    assert_eq!(results[0].signature, "1.2()");
}

/// A module missing from the manifest keeps a `?` id
#[test]
fn test_tier3_unregistered_module() {
    let catalog = Catalog::standard();
    catalog.write("sound", "beep | Plays a beep. Parameters: hz.\n\nmute | Silences output.\n");
    catalog.build();

    let results = catalog
        .searcher()
        .search("beep", &catalog.index_path("sound"), 1)
        .unwrap();
    assert_eq!(results[0].module_id, None);
    assert_eq!(results[0].signature, "?.0(hz)");
}

/// No manifest at all: everything is unregistered, nothing fails
#[test]
fn test_tier3_missing_manifest() {
    let catalog = Catalog::empty();
    catalog.write("mymod", MYMOD);
    catalog.build();

    let results = catalog
        .searcher()
        .search("add numbers", &catalog.index_path("mymod"), 1)
        .unwrap();
    assert_eq!(results[0].module_id, None);
    assert_eq!(results[0].signature, "?.0(a, b)");
}

/// Category matches resolve the named module
#[test]
fn test_tier3_category_result() {
    let catalog = built_catalog();
    let results = catalog
        .searcher()
        .search("example module", &catalog.index_path("vector-categories"), 1)
        .unwrap();
    let r = &results[0];
    assert_eq!(r.kind, DatabaseKind::CategoryManifest);
    assert_eq!(r.database, "vector-categories");
    assert_eq!(r.module_name, "mymod");
    assert_eq!(r.module_id, Some(0));
    assert!(r.params.is_empty());
    assert!(r.signature.is_empty());
}

/// Reordering the manifest renumbers modules once the cache is reset
#[test]
fn test_tier3_reorder_after_reset() {
    let catalog = built_catalog();
    let searcher = catalog.searcher();
    let path = catalog.index_path("mymod");

    assert_eq!(searcher.search("add", &path, 1).unwrap()[0].module_id, Some(0));

    catalog.write("vector-categories", "draw | Drawing.\n\nmymod | Example.\n");
    assert_eq!(
        searcher.search("add", &path, 1).unwrap()[0].module_id,
        Some(0),
        "cached registry until reset"
    );

    searcher.reset();
    let r = &searcher.search("add", &path, 1).unwrap()[0];
    assert_eq!(r.module_id, Some(1));
    assert_eq!(r.signature, "1.0(a, b)");
}

/// Searchers can share one registry cache
#[test]
fn test_tier3_shared_cache() {
    let catalog = built_catalog();
    let cache = Arc::new(RegistryCache::for_config(&catalog.config));
    let a = vcdb::Searcher::with_cache(catalog.config.clone(), Arc::clone(&cache));
    let b = vcdb::Searcher::with_cache(catalog.config.clone(), Arc::clone(&cache));

    a.search_configured("add", 1).unwrap();
    b.search_configured("add", 1).unwrap();
    assert_eq!(cache.len(), 1);
    assert!(Arc::ptr_eq(&a.registry().unwrap(), &b.registry().unwrap()));
}

/// A module listed twice takes the id of its last record
#[test]
fn test_tier3_duplicate_manifest_name() {
    let catalog = Catalog::empty();
    catalog.write(
        "vector-categories",
        "mymod | Example.\n\ndraw | Drawing.\n\nmymod | Listed again.\n",
    );
    catalog.write("mymod", MYMOD);
    catalog.build();

    let r = &catalog
        .searcher()
        .search("how to add numbers", &catalog.index_path("mymod"), 1)
        .unwrap()[0];
    assert_eq!(r.module_id, Some(2));
    assert_eq!(r.signature, "2.0(a, b)");
}
