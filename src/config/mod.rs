// src/config/mod.rs

//! Catalog file loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a catalog file from disk (`loader.rs`).
//! - Validate quest attributes and DAG correctness (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    default_catalog_path, load_and_validate, load_curriculum, load_from_path, load_from_str,
};
pub use model::{CatalogFile, CatalogSection, QuestConfig, RawCatalogFile};
pub use validate::validate_catalog;
