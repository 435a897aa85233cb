//! Tier 4: Persistence
//!
//! Index documents round-trip exactly; damaged or missing documents are
//! errors, never empty results.

use super::test_utils::*;
use vcdb::{load_index, DatabaseIndex, DatabaseKind, Error, IndexMetadata, IndexStore};

/// persist then load gives back the same index
#[test]
fn test_tier4_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = IndexStore::new(dir.path());
    let index = DatabaseIndex::build(
        vec![
            "add | Adds two numbers. Parameters: a, b.".to_string(),
            "print | Prints a value. Parameters: value.".to_string(),
            "sqrt | Square root (√x). Parameters: x.".to_string(),
        ],
        IndexMetadata::new("mymod.txt", DatabaseKind::Operation),
    );
    let handle = store.persist("mymod", &index).unwrap();
    assert_eq!(load_index(&handle).unwrap(), index);
}

/// The on-disk layout is the documented JSON object
#[test]
fn test_tier4_document_layout() {
    let catalog = built_catalog();
    let text = std::fs::read_to_string(catalog.index_path("vector-categories")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert!(doc["vocab"].is_array());
    assert!(doc["idf"].is_object());
    assert!(doc["vectors"].is_array());
    assert_eq!(doc["entries"].as_array().unwrap().len(), 2);
    assert_eq!(doc["metadata"]["source"], "vector-categories.txt");
    assert_eq!(doc["metadata"]["kind"], "category");
}

/// Missing index file
#[test]
fn test_tier4_missing_index() {
    let catalog = built_catalog();
    let err = catalog
        .searcher()
        .search("add", &catalog.index_path("nothing"), 1)
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

/// Missing index directory
#[test]
fn test_tier4_missing_directory() {
    let catalog = Catalog::standard();
    let err = catalog.searcher().search_configured("add", 1).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

/// Truncated document
#[test]
fn test_tier4_truncated_document() {
    let catalog = built_catalog();
    let path = catalog.index_path("mymod");
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, &text[..text.len() / 2]).unwrap();

    let err = catalog.searcher().search("add", &path, 1).unwrap_err();
    assert!(matches!(err, Error::Corrupt { .. }));
    assert!(err.is_index_error());
}

/// Vector pointing past the vocabulary
#[test]
fn test_tier4_out_of_range_key() {
    let catalog = built_catalog();
    let path = catalog.index_path("mymod");
    let mut doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    doc["vectors"][0] = serde_json::json!({ "9999": 0.5 });
    std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

    match load_index(&path) {
        Err(Error::Corrupt { reason, .. }) => assert!(reason.contains("9999")),
        other => panic!("expected Corrupt, got {:?}", other),
    }
}

/// One corrupt document fails the whole directory search
#[test]
fn test_tier4_corrupt_sibling_fails_search_all() {
    let catalog = built_catalog();
    std::fs::write(catalog.vectors_dir().join("zz.dat"), "[]").unwrap();
    let err = catalog.searcher().search_configured("add", 1).unwrap_err();
    assert!(matches!(err, Error::Corrupt { .. }));
}

/// Documents without a stored kind derive it from their name
#[test]
fn test_tier4_kind_derived_when_absent() {
    let catalog = built_catalog();
    let path = catalog.index_path("vector-categories");
    let mut doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    doc["metadata"].as_object_mut().unwrap().remove("kind");
    std::fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();

    let results = catalog.searcher().search("drawing shapes", &path, 1).unwrap();
    assert_eq!(results[0].kind, DatabaseKind::CategoryManifest);
    assert_eq!(results[0].module_name, "draw");
}
