// src/config/validate.rs

use crate::catalog::validate_quest_def;
use crate::config::model::{CatalogFile, RawCatalogFile, raw_edges};
use crate::dag::{check_edges, topological_sort};
use crate::errors::{QuestmapError, Result};

impl TryFrom<RawCatalogFile> for CatalogFile {
    type Error = crate::errors::QuestmapError;

    fn try_from(raw: RawCatalogFile) -> std::result::Result<Self, Self::Error> {
        validate_catalog(&raw)?;
        Ok(CatalogFile::new_unchecked(raw.catalog, raw.quest))
    }
}

/// Run every check a catalog file must pass before it can be loaded.
pub fn validate_catalog(cfg: &RawCatalogFile) -> Result<()> {
    ensure_has_quests(cfg)?;
    validate_catalog_section(cfg)?;
    validate_quests(cfg)?;
    validate_dependencies(cfg)?;
    validate_dag(cfg)?;
    validate_entry(cfg)?;
    Ok(())
}

fn ensure_has_quests(cfg: &RawCatalogFile) -> Result<()> {
    if cfg.quest.is_empty() {
        return Err(QuestmapError::ConfigError(
            "catalog must contain at least one [quest.<id>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_catalog_section(cfg: &RawCatalogFile) -> Result<()> {
    if cfg.catalog.xp_per_level == 0 {
        return Err(QuestmapError::ConfigError(
            "[catalog].xp_per_level must be >= 1 (got 0)".to_string(),
        ));
    }
    if !cfg.quest.contains_key(&cfg.catalog.entry) {
        return Err(QuestmapError::ConfigError(format!(
            "[catalog].entry names unknown quest '{}'",
            cfg.catalog.entry
        )));
    }
    Ok(())
}

fn validate_quests(cfg: &RawCatalogFile) -> Result<()> {
    for (id, quest) in cfg.quest.iter() {
        validate_quest_def(id, &quest.def)?;
    }
    Ok(())
}

fn validate_dependencies(cfg: &RawCatalogFile) -> Result<()> {
    check_edges(|id| cfg.quest.contains_key(id), raw_edges(&cfg.quest))
}

fn validate_dag(cfg: &RawCatalogFile) -> Result<()> {
    topological_sort(cfg.quest.keys().map(|s| s.as_str()), raw_edges(&cfg.quest))?;
    Ok(())
}

fn validate_entry(cfg: &RawCatalogFile) -> Result<()> {
    let entry = &cfg.catalog.entry;
    match cfg.quest.get(entry) {
        Some(quest) if !quest.after.is_empty() => Err(QuestmapError::ConfigError(format!(
            "entry quest '{}' must not have prerequisites (has: {})",
            entry,
            quest.after.join(", ")
        ))),
        _ => Ok(()),
    }
}
