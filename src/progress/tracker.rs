use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::curriculum::Curriculum;
use crate::errors::{QuestmapError, Result};
use crate::progress::completion::{CompletionResult, ProgressSnapshot, ZoneProgress};
use crate::progress::state::ProgressState;
use crate::types::{QuestId, QuestStatus};

/// Tracker holds a shared, immutable curriculum plus one session's mutable
/// progress.
///
/// It is responsible for:
/// - classifying quests as completed / available / locked
/// - completing quests, granting XP and recomputing the level
/// - resetting the session to its initial state
///
/// Availability is recomputed from the current completed set on every query.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    curriculum: Arc<Curriculum>,
    state: ProgressState,
}

impl ProgressTracker {
    /// Start a fresh session: entry quest completed, no XP, level 1.
    pub fn new(curriculum: Arc<Curriculum>) -> Self {
        let state = ProgressState::new(curriculum.entry());
        debug!(entry = %curriculum.entry(), "new progress session");
        Self { curriculum, state }
    }

    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn is_completed(&self, id: &str) -> Result<bool> {
        Ok(self.status(id)? == QuestStatus::Completed)
    }

    pub fn is_available(&self, id: &str) -> Result<bool> {
        Ok(self.status(id)? == QuestStatus::Available)
    }

    pub fn is_locked(&self, id: &str) -> Result<bool> {
        Ok(self.status(id)? == QuestStatus::Locked)
    }

    /// Classify a quest against the current progress.
    pub fn status(&self, id: &str) -> Result<QuestStatus> {
        let prereqs = self.curriculum.graph().predecessors(id)?;

        if self.state.is_completed(id) {
            Ok(QuestStatus::Completed)
        } else if self.prerequisites_met(prereqs) {
            Ok(QuestStatus::Available)
        } else {
            Ok(QuestStatus::Locked)
        }
    }

    /// Prerequisites of `id` that are not completed yet.
    pub fn missing_prerequisites(&self, id: &str) -> Result<Vec<QuestId>> {
        let prereqs = self.curriculum.graph().predecessors(id)?;
        Ok(prereqs
            .iter()
            .filter(|p| !self.state.is_completed(p))
            .cloned()
            .collect())
    }

    /// Complete a quest.
    ///
    /// - Unknown ids fail with [`QuestmapError::UnknownQuest`].
    /// - Completing an already completed quest is a no-op.
    /// - Locked quests fail with [`QuestmapError::PrerequisitesNotMet`].
    ///
    /// All checks run before any state is touched.
    pub fn complete(&mut self, id: &str) -> Result<CompletionResult> {
        let curriculum = Arc::clone(&self.curriculum);
        let quest = curriculum.catalog().quest(id)?;
        let previous_level = self.state.current_level();

        if self.state.is_completed(id) {
            debug!(quest = %id, "quest already completed; ignoring");
            return Ok(CompletionResult {
                quest: quest.id.clone(),
                already_completed: true,
                xp_granted: 0,
                total_xp: self.state.total_xp(),
                previous_level,
                level: previous_level,
                leveled_up: false,
                newly_available: Vec::new(),
            });
        }

        let missing = self.missing_prerequisites(id)?;
        if !missing.is_empty() {
            warn!(quest = %id, ?missing, "cannot complete quest; prerequisites not met");
            return Err(QuestmapError::PrerequisitesNotMet {
                quest: quest.id.clone(),
                missing,
            });
        }

        let total_xp = self.state.total_xp().saturating_add(quest.xp_reward);
        let level = curriculum.policy().level_for(total_xp);
        self.state.record_completion(id, quest.xp_reward, level);

        let level = self.state.current_level();
        let leveled_up = level > previous_level;

        let newly_available: Vec<QuestId> = curriculum
            .graph()
            .successors(id)?
            .iter()
            .filter(|d| matches!(self.status(d), Ok(QuestStatus::Available)))
            .cloned()
            .collect();

        info!(
            quest = %id,
            xp = quest.xp_reward,
            total_xp = self.state.total_xp(),
            "quest completed"
        );
        if leveled_up {
            info!(from = previous_level, to = level, "level up");
        }
        if !newly_available.is_empty() {
            debug!(quest = %id, ?newly_available, "dependents unlocked");
        }

        Ok(CompletionResult {
            quest: quest.id.clone(),
            already_completed: false,
            xp_granted: quest.xp_reward,
            total_xp: self.state.total_xp(),
            previous_level,
            level,
            leveled_up,
            newly_available,
        })
    }

    /// Restore the initial session state. Always succeeds.
    pub fn reset(&mut self) {
        self.state = ProgressState::new(self.curriculum.entry());
        info!("progress reset");
    }

    pub fn total_xp(&self) -> u64 {
        self.state.total_xp()
    }

    pub fn current_level(&self) -> u32 {
        self.state.current_level()
    }

    pub fn progress_fraction(&self) -> f64 {
        self.curriculum.policy().progress_fraction(self.state.total_xp())
    }

    pub fn xp_to_next_level(&self) -> u64 {
        self.curriculum.policy().xp_to_next_level(self.state.total_xp())
    }

    pub fn completed(&self) -> &BTreeSet<QuestId> {
        self.state.completed()
    }

    /// Completed quests in completion order, entry quest first.
    pub fn completion_order(&self) -> &[QuestId] {
        self.state.completion_order()
    }

    /// Currently available quests, sorted by id.
    pub fn available_quests(&self) -> Vec<&str> {
        self.quests_with_status(QuestStatus::Available)
    }

    /// Currently locked quests, sorted by id.
    pub fn locked_quests(&self) -> Vec<&str> {
        self.quests_with_status(QuestStatus::Locked)
    }

    /// Share of the catalog that is completed, in `[0, 1]`.
    pub fn completion_rate(&self) -> f64 {
        let total = self.curriculum.catalog().len();
        if total == 0 {
            return 0.0;
        }
        self.state.completed().len() as f64 / total as f64
    }

    /// Per-zone progress, sorted by zone name.
    pub fn zone_progress(&self) -> Vec<ZoneProgress> {
        self.curriculum
            .catalog()
            .quests_by_zone()
            .into_iter()
            .map(|(zone, ids)| ZoneProgress {
                zone: zone.to_string(),
                completed: ids.iter().filter(|id| self.state.is_completed(id)).count(),
                total: ids.len(),
                available: ids
                    .iter()
                    .filter(|id| matches!(self.status(id), Ok(QuestStatus::Available)))
                    .map(|id| id.to_string())
                    .collect(),
            })
            .collect()
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            level: self.current_level(),
            total_xp: self.total_xp(),
            progress_fraction: self.progress_fraction(),
            xp_to_next_level: self.xp_to_next_level(),
            completed: self.state.completed().len(),
            total_quests: self.curriculum.catalog().len(),
        }
    }

    fn prerequisites_met(&self, prereqs: &BTreeSet<QuestId>) -> bool {
        prereqs.iter().all(|p| self.state.is_completed(p))
    }

    fn quests_with_status(&self, status: QuestStatus) -> Vec<&str> {
        self.curriculum
            .catalog()
            .ids()
            .filter(|id| matches!(self.status(id), Ok(s) if s == status))
            .collect()
    }
}
