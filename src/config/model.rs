// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::QuestDef;
use crate::types::{DEFAULT_XP_PER_LEVEL, QuestId};

/// Catalog file as read from TOML, before validation.
///
/// ```toml
/// [catalog]
/// entry = "basics_intro"
/// xp_per_level = 1000
///
/// [quest.basics_intro]
/// title = "Welcome to Python"
/// difficulty = "Beginner"
/// xp_reward = 100
/// estimated_hours = 2
/// zone = "Beginner's Valley"
///
/// [quest.basics_syntax]
/// title = "Basic Syntax"
/// xp_reward = 150
/// estimated_hours = 3
/// zone = "Beginner's Valley"
/// after = ["basics_intro"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawCatalogFile {
    /// Global settings from `[catalog]`.
    pub catalog: CatalogSection,

    /// All quests from `[quest.<id>]`, keyed by quest id.
    #[serde(default)]
    pub quest: BTreeMap<QuestId, QuestConfig>,
}

/// `[catalog]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSection {
    /// Quest that every new session starts with already completed.
    pub entry: QuestId,

    /// XP per level band.
    #[serde(default = "default_xp_per_level")]
    pub xp_per_level: u64,
}

fn default_xp_per_level() -> u64 {
    DEFAULT_XP_PER_LEVEL
}

impl CatalogSection {
    pub fn new(entry: impl Into<QuestId>) -> Self {
        Self {
            entry: entry.into(),
            xp_per_level: default_xp_per_level(),
        }
    }
}

/// `[quest.<id>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestConfig {
    #[serde(flatten)]
    pub def: QuestDef,

    /// Prerequisites: this quest unlocks once every quest listed here is
    /// completed. Each entry `p` is the edge `(p, <this quest>)`.
    #[serde(default)]
    pub after: Vec<QuestId>,
}

/// A validated catalog file.
///
/// Only obtainable through `TryFrom<RawCatalogFile>`, which checks quest
/// attributes, the entry quest, dangling prerequisites and cycles.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    catalog: CatalogSection,
    quest: BTreeMap<QuestId, QuestConfig>,
}

impl CatalogFile {
    pub(crate) fn new_unchecked(
        catalog: CatalogSection,
        quest: BTreeMap<QuestId, QuestConfig>,
    ) -> Self {
        Self { catalog, quest }
    }

    pub fn catalog(&self) -> &CatalogSection {
        &self.catalog
    }

    pub fn quests(&self) -> &BTreeMap<QuestId, QuestConfig> {
        &self.quest
    }

    /// Quest attributes keyed by id, without dependency lists.
    pub fn quest_defs(&self) -> BTreeMap<QuestId, QuestDef> {
        self.quest
            .iter()
            .map(|(id, q)| (id.clone(), q.def.clone()))
            .collect()
    }

    /// `(prerequisite, dependent)` edges from every `after = [...]` list.
    pub fn edges(&self) -> Vec<(QuestId, QuestId)> {
        raw_edges(&self.quest)
            .map(|(p, d)| (p.to_string(), d.to_string()))
            .collect()
    }
}

pub(crate) fn raw_edges(
    quests: &BTreeMap<QuestId, QuestConfig>,
) -> impl Iterator<Item = (&str, &str)> {
    quests.iter().flat_map(|(id, q)| {
        q.after
            .iter()
            .map(move |prereq| (prereq.as_str(), id.as_str()))
    })
}
