// src/catalog/mod.rs

//! The quest catalog: a read-only mapping from quest id to its attributes.
//!
//! - [`quest`] defines the raw [`QuestDef`] input and the validated [`Quest`].
//! - [`load`] is the in-memory load interface: quest definitions plus an edge
//!   list in, a `(Catalog, PrerequisiteGraph)` pair out.

pub mod quest;

use std::collections::BTreeMap;

use tracing::debug;

use crate::dag::PrerequisiteGraph;
use crate::errors::{QuestmapError, Result};
use crate::types::QuestId;

pub use quest::{Quest, QuestDef, validate_quest_def};

/// Immutable set of quests plus the designated entry quest.
#[derive(Debug, Clone)]
pub struct Catalog {
    quests: BTreeMap<QuestId, Quest>,
    entry: QuestId,
}

impl Catalog {
    /// Build a catalog from quest definitions keyed by id.
    ///
    /// Fails if the catalog is empty, any definition is invalid, or `entry`
    /// does not name a quest.
    pub fn new(defs: BTreeMap<QuestId, QuestDef>, entry: impl Into<QuestId>) -> Result<Self> {
        let entry = entry.into();

        if defs.is_empty() {
            return Err(QuestmapError::ConfigError(
                "catalog must contain at least one quest".to_string(),
            ));
        }
        if !defs.contains_key(&entry) {
            return Err(QuestmapError::ConfigError(format!(
                "entry quest '{entry}' is not defined in the catalog"
            )));
        }

        let mut quests = BTreeMap::new();
        for (id, def) in defs {
            let quest = Quest::from_def(id.clone(), def)?;
            quests.insert(id, quest);
        }

        Ok(Self { quests, entry })
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.quests.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Quest> {
        self.quests.get(id)
    }

    /// Like [`Catalog::get`], but unknown ids are an error.
    pub fn quest(&self, id: &str) -> Result<&Quest> {
        self.quests
            .get(id)
            .ok_or_else(|| QuestmapError::UnknownQuest(id.to_string()))
    }

    /// All quest ids, in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.quests.keys().map(|s| s.as_str())
    }

    pub fn quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.values()
    }

    /// Distinct zone names, sorted.
    pub fn zones(&self) -> Vec<&str> {
        self.quests_by_zone().into_keys().collect()
    }

    /// Quest ids grouped by zone. Zones and the ids inside them are sorted.
    pub fn quests_by_zone(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut zones: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for quest in self.quests.values() {
            zones
                .entry(quest.zone.as_str())
                .or_default()
                .push(quest.id.as_str());
        }
        zones
    }

    /// XP awarded by completing every quest except the entry quest.
    pub fn total_xp_available(&self) -> u64 {
        self.quests
            .values()
            .filter(|q| q.id != self.entry)
            .map(|q| q.xp_reward)
            .sum()
    }
}

/// Load a catalog and its prerequisite graph from in-memory data.
///
/// Each edge is `(prerequisite, dependent)`. Fails with
/// [`QuestmapError::InvalidGraph`] for dangling references, self-loops and
/// cycles, and with [`QuestmapError::ConfigError`] for invalid quest
/// attributes or an entry quest that has prerequisites.
pub fn load(
    quests: BTreeMap<QuestId, QuestDef>,
    edges: &[(QuestId, QuestId)],
    entry: impl Into<QuestId>,
) -> Result<(Catalog, PrerequisiteGraph)> {
    let catalog = Catalog::new(quests, entry)?;
    let graph = PrerequisiteGraph::build(&catalog, edges)?;

    let entry_prereqs = graph.predecessors(catalog.entry())?;
    if !entry_prereqs.is_empty() {
        return Err(QuestmapError::ConfigError(format!(
            "entry quest '{}' must not have prerequisites (has: {})",
            catalog.entry(),
            entry_prereqs
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }

    debug!(
        quests = catalog.len(),
        edges = graph.edge_count(),
        entry = %catalog.entry(),
        "catalog loaded"
    );

    Ok((catalog, graph))
}
