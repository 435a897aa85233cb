//! Configuration via `vcdb.toml`
//!
//! Every key is optional. A missing file means defaults; `vcdb init` writes
//! a commented default file next to the catalog sources.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "vcdb.toml";

/// Default name (file stem) of the category manifest.
pub const DEFAULT_MANIFEST_NAME: &str = "vector-categories";

/// vcdb configuration loaded from `vcdb.toml`.
///
/// # Example
///
/// ```toml
/// source_dir = "source"
/// vectors_dir = "vectors"
/// manifest_name = "vector-categories"
/// default_top_k = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcdbConfig {
    /// Directory holding the source `.txt` catalogs and the manifest.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
    /// Directory receiving the persisted indexes.
    #[serde(default = "default_vectors_dir")]
    pub vectors_dir: PathBuf,
    /// File stem of the category manifest inside `source_dir`.
    #[serde(default = "default_manifest_name")]
    pub manifest_name: String,
    /// Extension of source files.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    /// Extension of persisted index documents.
    #[serde(default = "default_index_extension")]
    pub index_extension: String,
    /// Number of results returned when the caller does not ask for more.
    #[serde(default = "default_top_k")]
    pub default_top_k: usize,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("source")
}

fn default_vectors_dir() -> PathBuf {
    PathBuf::from("vectors")
}

fn default_manifest_name() -> String {
    DEFAULT_MANIFEST_NAME.to_string()
}

fn default_source_extension() -> String {
    "txt".to_string()
}

fn default_index_extension() -> String {
    "dat".to_string()
}

fn default_top_k() -> usize {
    1
}

impl Default for VcdbConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            vectors_dir: default_vectors_dir(),
            manifest_name: default_manifest_name(),
            source_extension: default_source_extension(),
            index_extension: default_index_extension(),
            default_top_k: default_top_k(),
        }
    }
}

impl VcdbConfig {
    /// Check values that parse but cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.default_top_k == 0 {
            return Err(Error::InvalidConfig(
                "default_top_k must be at least 1".to_string(),
            ));
        }
        if self.manifest_name.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "manifest_name must not be empty".to_string(),
            ));
        }
        if self.source_extension.is_empty() || self.index_extension.is_empty() {
            return Err(Error::InvalidConfig(
                "source_extension and index_extension must not be empty".to_string(),
            ));
        }
        if self.source_extension == self.index_extension {
            return Err(Error::InvalidConfig(format!(
                "source and index files cannot share the extension '{}'",
                self.source_extension
            )));
        }
        Ok(())
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: VcdbConfig =
            toml::from_str(content).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// Relative directories are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content).map_err(|e| match e {
            Error::InvalidConfig(msg) => {
                Error::InvalidConfig(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        let base = path.parent().unwrap_or(Path::new("."));
        Ok(config.resolve(base))
    }

    /// Load from `path` if it exists, otherwise defaults resolved against
    /// the path's directory.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            let base = path.parent().unwrap_or(Path::new("."));
            Ok(Self::default().resolve(base))
        }
    }

    /// Make relative directories relative to `base`.
    pub fn resolve(mut self, base: &Path) -> Self {
        if self.source_dir.is_relative() {
            self.source_dir = base.join(&self.source_dir);
        }
        if self.vectors_dir.is_relative() {
            self.vectors_dir = base.join(&self.vectors_dir);
        }
        self
    }

    /// Path of the category manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.source_dir
            .join(format!("{}.{}", self.manifest_name, self.source_extension))
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# vcdb configuration
#
# Directory with one source catalog per module (entries separated by a
# blank line) plus the category manifest.
source_dir = "source"

# Directory receiving one persisted index per source file.
vectors_dir = "vectors"

# File stem of the category manifest; its record order defines module ids.
manifest_name = "vector-categories"

# source_extension = "txt"
# index_extension = "dat"

# Results returned by `vcdb search` when -k is not given.
default_top_k = 1
"#
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `true` when the file was created.
    pub fn write_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        std::fs::write(path, Self::default_toml())?;
        Ok(true)
    }
}
