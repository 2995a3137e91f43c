// src/progress/leveling.rs

//! Pure mapping from accumulated XP to level and level progress.
//!
//! Levels are flat-width bands: every `xp_per_level` points of XP is one
//! level, starting at level 1 with zero XP.

use crate::types::DEFAULT_XP_PER_LEVEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelingPolicy {
    xp_per_level: u64,
}

impl LevelingPolicy {
    /// Create a policy with the given band width.
    ///
    /// Returns `None` for zero, which would make every function undefined.
    pub fn new(xp_per_level: u64) -> Option<Self> {
        (xp_per_level > 0).then_some(Self { xp_per_level })
    }

    pub fn xp_per_level(&self) -> u64 {
        self.xp_per_level
    }

    /// `floor(total_xp / xp_per_level) + 1`.
    pub fn level_for(&self, total_xp: u64) -> u32 {
        let level = (total_xp / self.xp_per_level).saturating_add(1);
        u32::try_from(level).unwrap_or(u32::MAX)
    }

    /// Fraction of the current level already earned, in `[0, 1)`.
    pub fn progress_fraction(&self, total_xp: u64) -> f64 {
        (total_xp % self.xp_per_level) as f64 / self.xp_per_level as f64
    }

    /// XP still needed to reach the next level; always in `1..=xp_per_level`.
    pub fn xp_to_next_level(&self, total_xp: u64) -> u64 {
        self.xp_per_level - total_xp % self.xp_per_level
    }

    /// Total XP at which `level` begins.
    pub fn xp_for_level(&self, level: u32) -> u64 {
        u64::from(level.saturating_sub(1)).saturating_mul(self.xp_per_level)
    }
}

impl Default for LevelingPolicy {
    fn default() -> Self {
        Self {
            xp_per_level: DEFAULT_XP_PER_LEVEL,
        }
    }
}

/// [`LevelingPolicy::level_for`] with the default band width.
pub fn level_for(total_xp: u64) -> u32 {
    LevelingPolicy::default().level_for(total_xp)
}

/// [`LevelingPolicy::progress_fraction`] with the default band width.
pub fn progress_fraction(total_xp: u64) -> f64 {
    LevelingPolicy::default().progress_fraction(total_xp)
}

/// [`LevelingPolicy::xp_to_next_level`] with the default band width.
pub fn xp_to_next_level(total_xp: u64) -> u64 {
    LevelingPolicy::default().xp_to_next_level(total_xp)
}
