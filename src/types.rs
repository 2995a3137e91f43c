use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Quest identifiers are the keys of `[quest.<id>]` tables.
pub type QuestId = String;

/// Default experience needed per level.
pub const DEFAULT_XP_PER_LEVEL: u64 = 1000;

/// Difficulty label of a quest.
///
/// Variants are declared in ascending order, so the derived `Ord` gives
/// `Beginner < BeginnerPlus < Intermediate < Advanced < Expert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Difficulty {
    Beginner,
    #[serde(rename = "Beginner+")]
    BeginnerPlus,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::BeginnerPlus => "Beginner+",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Beginner
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "beginner+" | "beginner-plus" => Ok(Difficulty::BeginnerPlus),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            "expert" => Ok(Difficulty::Expert),
            other => Err(format!(
                "invalid difficulty: {other} (expected Beginner, Beginner+, Intermediate, Advanced or Expert)"
            )),
        }
    }
}

/// Exclusive classification of a quest against the current progress.
///
/// Every quest is in exactly one of these states at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestStatus {
    Completed,
    /// Not completed and every prerequisite is completed.
    Available,
    /// Not completed and at least one prerequisite is still open.
    Locked,
}

impl QuestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestStatus::Completed => "completed",
            QuestStatus::Available => "available",
            QuestStatus::Locked => "locked",
        }
    }
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
