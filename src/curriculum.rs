// src/curriculum.rs

//! Immutable bundle of catalog, prerequisite graph and leveling policy.
//!
//! A [`Curriculum`] is built once at startup and shared (via `Arc`) by every
//! [`crate::progress::ProgressTracker`] working on it.

use std::collections::BTreeMap;

use crate::catalog::{self, Catalog, QuestDef};
use crate::config::CatalogFile;
use crate::dag::PrerequisiteGraph;
use crate::errors::{QuestmapError, Result};
use crate::progress::LevelingPolicy;
use crate::types::QuestId;

#[derive(Debug, Clone)]
pub struct Curriculum {
    catalog: Catalog,
    graph: PrerequisiteGraph,
    policy: LevelingPolicy,
}

impl Curriculum {
    /// Load from in-memory quest definitions and `(prerequisite, dependent)`
    /// edges, with the default leveling policy.
    pub fn load(
        quests: BTreeMap<QuestId, QuestDef>,
        edges: &[(QuestId, QuestId)],
        entry: impl Into<QuestId>,
    ) -> Result<Self> {
        let (catalog, graph) = catalog::load(quests, edges, entry)?;
        Ok(Self::from_parts(catalog, graph, LevelingPolicy::default()))
    }

    /// Build from a validated catalog file.
    pub fn from_config(cfg: &CatalogFile) -> Result<Self> {
        let policy = LevelingPolicy::new(cfg.catalog().xp_per_level).ok_or_else(|| {
            QuestmapError::ConfigError("[catalog].xp_per_level must be >= 1 (got 0)".to_string())
        })?;
        let (catalog, graph) = catalog::load(
            cfg.quest_defs(),
            &cfg.edges(),
            cfg.catalog().entry.clone(),
        )?;
        Ok(Self::from_parts(catalog, graph, policy))
    }

    /// Assemble from parts that were already loaded together.
    pub(crate) fn from_parts(catalog: Catalog, graph: PrerequisiteGraph, policy: LevelingPolicy) -> Self {
        Self {
            catalog,
            graph,
            policy,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn graph(&self) -> &PrerequisiteGraph {
        &self.graph
    }

    pub fn policy(&self) -> &LevelingPolicy {
        &self.policy
    }

    pub fn entry(&self) -> &str {
        self.catalog.entry()
    }
}
