// src/progress/completion.rs

//! Result types describing what a tracker operation changed.

use crate::types::QuestId;

/// Structured result of [`crate::progress::ProgressTracker::complete`].
///
/// A UI binding can decide what to redraw from this alone.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResult {
    pub quest: QuestId,
    /// The quest was already completed; nothing changed.
    pub already_completed: bool,
    /// XP added by this call (0 for a no-op).
    pub xp_granted: u64,
    /// Total XP after this call.
    pub total_xp: u64,
    /// Level before this call.
    pub previous_level: u32,
    /// Level after this call.
    pub level: u32,
    /// Whether `level` is higher than `previous_level`.
    pub leveled_up: bool,
    /// Dependents of `quest` that became available because of this call.
    pub newly_available: Vec<QuestId>,
}

impl CompletionResult {
    pub fn xp_was_granted(&self) -> bool {
        self.xp_granted > 0
    }

    /// The level reached, if this completion caused a level-up.
    pub fn level_up(&self) -> Option<u32> {
        self.leveled_up.then_some(self.level)
    }
}

/// Progress within one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneProgress {
    pub zone: String,
    pub completed: usize,
    pub total: usize,
    /// Quests in this zone that are currently available.
    pub available: Vec<QuestId>,
}

impl ZoneProgress {
    pub fn is_finished(&self) -> bool {
        self.completed == self.total
    }
}

/// Owned summary of the learner's standing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    pub level: u32,
    pub total_xp: u64,
    pub progress_fraction: f64,
    pub xp_to_next_level: u64,
    pub completed: usize,
    pub total_quests: usize,
}
