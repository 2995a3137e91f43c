// src/progress/shared.rs

//! Thread-safe handle around a [`ProgressTracker`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::curriculum::Curriculum;
use crate::errors::Result;
use crate::progress::completion::{CompletionResult, ProgressSnapshot};
use crate::progress::tracker::ProgressTracker;
use crate::types::QuestStatus;

/// A tracker shared between callers.
///
/// The prerequisite check, the insertion into the completed set and the XP
/// grant of [`SharedTracker::complete`] run under one lock, so a quest is
/// granted XP at most once even when callers race.
#[derive(Debug, Clone)]
pub struct SharedTracker {
    inner: Arc<Mutex<ProgressTracker>>,
}

impl SharedTracker {
    pub fn new(tracker: ProgressTracker) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tracker)),
        }
    }

    pub fn from_curriculum(curriculum: Arc<Curriculum>) -> Self {
        Self::new(ProgressTracker::new(curriculum))
    }

    pub fn complete(&self, id: &str) -> Result<CompletionResult> {
        self.lock().complete(id)
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn status(&self, id: &str) -> Result<QuestStatus> {
        self.lock().status(id)
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.lock().snapshot()
    }

    /// Run a read-only closure against the tracker while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&ProgressTracker) -> R) -> R {
        f(&self.lock())
    }

    // Every tracker mutation is all-or-nothing, so a poisoned lock still
    // guards consistent state.
    fn lock(&self) -> MutexGuard<'_, ProgressTracker> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
