// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{CatalogFile, RawCatalogFile};
use crate::curriculum::Curriculum;
use crate::errors::Result;

/// Load a catalog file from a given path and return the raw `RawCatalogFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (DAG correctness, etc.). Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawCatalogFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = contents.len(), "read catalog file");
    load_from_str(&contents)
}

/// Deserialize a catalog from TOML text without validating it.
pub fn load_from_str(contents: &str) -> Result<RawCatalogFile> {
    let catalog: RawCatalogFile = toml::from_str(contents)?;
    Ok(catalog)
}

/// Load a catalog file from path and validate it.
///
/// Checks for:
/// - quest attributes (non-empty title and zone, positive XP and hours),
/// - a defined, prerequisite-free entry quest,
/// - unknown `after` references and self-loops,
/// - cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<CatalogFile> {
    let raw = load_from_path(&path)?;
    let catalog = CatalogFile::try_from(raw)?;
    Ok(catalog)
}

/// Load, validate and assemble a [`Curriculum`] in one go.
pub fn load_curriculum(path: impl AsRef<Path>) -> Result<Curriculum> {
    let cfg = load_and_validate(path)?;
    Curriculum::from_config(&cfg)
}

/// Default catalog location: `Questmap.toml` in the current directory.
pub fn default_catalog_path() -> PathBuf {
    PathBuf::from("Questmap.toml")
}
