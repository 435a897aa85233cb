//! Test utilities for vcdb comprehensive tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vcdb::{vectorize_configured, BuildReport, Searcher, VcdbConfig};

pub const MANIFEST: &str = "mymod | Example module for tests.\n\ndraw | Drawing shapes on screen.\n";

pub const MYMOD: &str =
    "add | Adds two numbers. Parameters: a, b.\n\nprint | Prints a value. Parameters: value.\n";

pub const DRAW: &str = "line | Draws a line. Parameters: x1, y1, x2, y2.\n\n\
circle | Draws a circle. Parameters: x, y, r.\n\n\
clear | Clears the screen.\n";

/// Catalog workspace on disk: `source/` plus the `vectors/` it builds into
pub struct Catalog {
    pub dir: TempDir,
    pub config: VcdbConfig,
}

impl Catalog {
    /// Empty workspace with default config
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = VcdbConfig::default().resolve(dir.path());
        std::fs::create_dir_all(&config.source_dir).unwrap();
        Catalog { dir, config }
    }

    /// Manifest plus the `mymod` and `draw` modules
    pub fn standard() -> Self {
        let catalog = Self::empty();
        catalog.write("vector-categories", MANIFEST);
        catalog.write("mymod", MYMOD);
        catalog.write("draw", DRAW);
        catalog
    }

    /// Write source file `<name>.txt`
    pub fn write(&self, name: &str, text: &str) -> PathBuf {
        let path = self.config.source_dir.join(format!("{}.txt", name));
        std::fs::write(&path, text).unwrap();
        path
    }

    /// Vectorize every source file
    pub fn build(&self) -> BuildReport {
        vectorize_configured(&self.config).expect("build failed")
    }

    /// Index document of database `name`
    pub fn index_path(&self, name: &str) -> PathBuf {
        self.config.vectors_dir.join(format!("{}.dat", name))
    }

    pub fn vectors_dir(&self) -> &Path {
        &self.config.vectors_dir
    }

    pub fn searcher(&self) -> Searcher {
        Searcher::new(self.config.clone())
    }
}

/// Catalog built and ready to search
pub fn built_catalog() -> Catalog {
    let catalog = Catalog::standard();
    catalog.build();
    catalog
}
