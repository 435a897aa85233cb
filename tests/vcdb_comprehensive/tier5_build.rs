//! Tier 5: Batch Build
//!
//! A bad source file is reported and skipped; its siblings still build.

use super::test_utils::*;
use vcdb::{load_index, vectorize, DatabaseKind, Error, IndexStore};

/// One index per source file, named after its stem
#[test]
fn test_tier5_one_index_per_source() {
    let catalog = Catalog::standard();
    let report = catalog.build();

    assert!(report.is_complete());
    assert_eq!(report.built.len(), 3);
    assert_eq!(report.total_entries(), 2 + 3 + 2);

    let store = IndexStore::new(catalog.vectors_dir());
    assert_eq!(
        store.names().unwrap(),
        vec!["draw", "mymod", "vector-categories"]
    );
}

/// Only the manifest is tagged as a category database
#[test]
fn test_tier5_kinds() {
    let catalog = Catalog::standard();
    let report = catalog.build();
    for built in &report.built {
        let expected = if built.source.ends_with("vector-categories.txt") {
            DatabaseKind::CategoryManifest
        } else {
            DatabaseKind::Operation
        };
        assert_eq!(built.kind, expected);
        assert_eq!(load_index(&built.output).unwrap().metadata.kind, Some(expected));
    }
}

/// Empty sources are skipped, the rest still build
#[test]
fn test_tier5_empty_source_skipped() {
    let catalog = Catalog::standard();
    catalog.write("blank", "\n\n   \n\n");
    let report = catalog.build();

    assert_eq!(report.built.len(), 3);
    assert_eq!(report.skipped.len(), 1);
    assert!(matches!(report.skipped[0].error, Error::EmptyInput(_)));
    assert!(!catalog.index_path("blank").exists());
}

/// Rebuilding replaces a stale index
#[test]
fn test_tier5_rebuild_replaces() {
    let catalog = built_catalog();
    catalog.write("mymod", "neg | Negates a value. Parameters: x.\n");
    catalog.build();

    let index = load_index(&catalog.index_path("mymod")).unwrap();
    assert_eq!(index.len(), 1);
    let r = &catalog
        .searcher()
        .search("negates a value", &catalog.index_path("mymod"), 5)
        .unwrap()[0];
    assert_eq!(r.op_name, "neg");
}

/// Nothing to build is an error
#[test]
fn test_tier5_no_sources() {
    let catalog = Catalog::empty();
    let err = vectorize(
        &catalog.config.source_dir,
        &catalog.config.vectors_dir,
        &catalog.config,
    )
    .unwrap_err();
    assert!(matches!(err, Error::NoSources(_)));
}

/// Other files in the source directory are ignored
#[test]
fn test_tier5_ignores_other_extensions() {
    let catalog = Catalog::standard();
    std::fs::write(catalog.config.source_dir.join("README.md"), "# notes\n").unwrap();
    let report = catalog.build();
    assert_eq!(report.built.len(), 3);
    assert!(report.is_complete());
}
