// src/progress/mod.rs

//! Learner progress: state machine and leveling.
//!
//! - [`leveling`] maps accumulated XP to levels.
//! - [`state`] holds one session's completed set, XP and level.
//! - [`tracker`] answers availability queries and applies completions.
//! - [`completion`] defines the result types tracker operations return.
//! - [`shared`] wraps a tracker for use from several threads.

pub mod completion;
pub mod leveling;
pub mod shared;
pub mod state;
pub mod tracker;

pub use completion::{CompletionResult, ProgressSnapshot, ZoneProgress};
pub use leveling::{LevelingPolicy, level_for, progress_fraction, xp_to_next_level};
pub use shared::SharedTracker;
pub use state::ProgressState;
pub use tracker::ProgressTracker;
