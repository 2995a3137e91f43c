// src/progress/state.rs

//! Mutable per-session progress state.

use std::collections::BTreeSet;

use crate::types::QuestId;

/// Progress of one learner session.
///
/// Only [`crate::progress::ProgressTracker`] mutates this; callers get a
/// read-only view through the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    completed: BTreeSet<QuestId>,
    /// Completed quests in the order they were completed, entry quest first.
    completion_order: Vec<QuestId>,
    total_xp: u64,
    current_level: u32,
}

impl ProgressState {
    /// Fresh state: only the entry quest completed, no XP, level 1.
    pub fn new(entry: &str) -> Self {
        Self {
            completed: BTreeSet::from([entry.to_string()]),
            completion_order: vec![entry.to_string()],
            total_xp: 0,
            current_level: 1,
        }
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    pub fn completed(&self) -> &BTreeSet<QuestId> {
        &self.completed
    }

    pub fn completion_order(&self) -> &[QuestId] {
        &self.completion_order
    }

    pub fn total_xp(&self) -> u64 {
        self.total_xp
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    /// Apply a completion whose preconditions were already checked.
    pub(crate) fn record_completion(&mut self, id: &str, xp_reward: u64, new_level: u32) {
        if self.completed.insert(id.to_string()) {
            self.completion_order.push(id.to_string());
            self.total_xp = self.total_xp.saturating_add(xp_reward);
            self.current_level = self.current_level.max(new_level);
        }
    }
}
