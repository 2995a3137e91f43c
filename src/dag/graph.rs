// src/dag/graph.rs

use std::collections::{BTreeMap, BTreeSet};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::catalog::Catalog;
use crate::errors::{QuestmapError, Result};
use crate::types::QuestId;

/// Internal node structure: stores immediate prerequisites and dependents.
#[derive(Debug, Clone, Default)]
struct DagNode {
    /// Quests that must be completed before this one becomes available.
    prerequisites: BTreeSet<QuestId>,
    /// Quests that list this one as a prerequisite.
    dependents: BTreeSet<QuestId>,
}

/// Immutable prerequisite DAG keyed by quest id.
///
/// Edges point from prerequisite to dependent. Construction rejects dangling
/// references, self-loops and cycles, so every instance is a valid DAG over
/// exactly the catalog's quests.
#[derive(Debug, Clone)]
pub struct PrerequisiteGraph {
    nodes: BTreeMap<QuestId, DagNode>,
    /// One valid total order, as produced by the cycle check.
    topo_order: Vec<QuestId>,
    edge_count: usize,
}

impl PrerequisiteGraph {
    /// Build the graph for `catalog` from `(prerequisite, dependent)` edges.
    ///
    /// Duplicate edges are collapsed.
    pub fn build(catalog: &Catalog, edges: &[(QuestId, QuestId)]) -> Result<Self> {
        let pairs = || edges.iter().map(|(p, d)| (p.as_str(), d.as_str()));

        check_edges(|id| catalog.contains(id), pairs())?;
        let topo_order = topological_sort(catalog.ids(), pairs())?;

        let mut nodes: BTreeMap<QuestId, DagNode> = catalog
            .ids()
            .map(|id| (id.to_string(), DagNode::default()))
            .collect();

        let mut edge_count = 0;
        for (prereq, dependent) in pairs() {
            let inserted = nodes
                .get_mut(dependent)
                .map(|n| n.prerequisites.insert(prereq.to_string()))
                .unwrap_or(false);
            if let Some(node) = nodes.get_mut(prereq) {
                node.dependents.insert(dependent.to_string());
            }
            if inserted {
                edge_count += 1;
            }
        }

        debug!(nodes = nodes.len(), edge_count, "prerequisite graph built");

        Ok(Self {
            nodes,
            topo_order,
            edge_count,
        })
    }

    /// All quest ids in the graph, sorted.
    pub fn quests(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Immediate prerequisites of a quest (edges into `id`).
    pub fn predecessors(&self, id: &str) -> Result<&BTreeSet<QuestId>> {
        self.node(id).map(|n| &n.prerequisites)
    }

    /// Immediate dependents of a quest (edges out of `id`).
    pub fn successors(&self, id: &str) -> Result<&BTreeSet<QuestId>> {
        self.node(id).map(|n| &n.dependents)
    }

    /// Quests without prerequisites.
    pub fn roots(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|(_, n)| n.prerequisites.is_empty())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// A total order in which every prerequisite precedes its dependents.
    pub fn topological_order(&self) -> &[QuestId] {
        &self.topo_order
    }

    fn node(&self, id: &str) -> Result<&DagNode> {
        self.nodes
            .get(id)
            .ok_or_else(|| QuestmapError::UnknownQuest(id.to_string()))
    }
}

/// Reject edges that reference unknown quests or point at themselves.
pub fn check_edges<'a>(
    known: impl Fn(&str) -> bool,
    edges: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<()> {
    for (prereq, dependent) in edges {
        if !known(dependent) {
            return Err(QuestmapError::InvalidGraph(format!(
                "edge ({prereq} -> {dependent}) references unknown quest '{dependent}'"
            )));
        }
        if !known(prereq) {
            return Err(QuestmapError::InvalidGraph(format!(
                "quest '{dependent}' has unknown prerequisite '{prereq}'"
            )));
        }
        if prereq == dependent {
            return Err(QuestmapError::InvalidGraph(format!(
                "quest '{dependent}' cannot be its own prerequisite"
            )));
        }
    }
    Ok(())
}

/// Topologically sort the given nodes and edges.
///
/// Edge direction: prerequisite -> dependent. A topological sort fails if
/// and only if there is a cycle.
pub fn topological_sort<'a>(
    nodes: impl IntoIterator<Item = &'a str>,
    edges: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<Vec<QuestId>> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in nodes {
        graph.add_node(name);
    }
    for (prereq, dependent) in edges {
        graph.add_edge(prereq, dependent, ());
    }

    match toposort(&graph, None) {
        Ok(order) => Ok(order.into_iter().map(str::to_string).collect()),
        Err(cycle) => Err(QuestmapError::InvalidGraph(format!(
            "cycle detected in prerequisite graph involving quest '{}'",
            cycle.node_id()
        ))),
    }
}
