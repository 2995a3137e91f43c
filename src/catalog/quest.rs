// src/catalog/quest.rs

//! Quest records as held by the catalog.

use serde::Deserialize;

use crate::errors::{QuestmapError, Result};
use crate::types::{Difficulty, QuestId};

/// Attributes of a quest, as supplied to [`crate::catalog::load`].
///
/// The identifier is the key of the mapping the definition is stored under.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuestDef {
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Ordered objective labels ("topics" the quest covers).
    #[serde(default)]
    pub objectives: Vec<String>,

    /// Ordered resource labels.
    #[serde(default)]
    pub resources: Vec<String>,

    #[serde(default)]
    pub difficulty: Difficulty,

    pub xp_reward: u64,

    pub estimated_hours: f64,

    pub zone: String,

    /// Display color; opaque to the core and passed through untouched.
    #[serde(default)]
    pub color: Option<String>,
}

/// A validated, immutable quest.
#[derive(Debug, Clone, PartialEq)]
pub struct Quest {
    pub id: QuestId,
    pub title: String,
    pub description: String,
    pub objectives: Vec<String>,
    pub resources: Vec<String>,
    pub difficulty: Difficulty,
    pub xp_reward: u64,
    pub estimated_hours: f64,
    pub zone: String,
    pub color: Option<String>,
}

impl Quest {
    /// Validate a definition and attach its identifier.
    pub fn from_def(id: QuestId, def: QuestDef) -> Result<Self> {
        validate_quest_def(&id, &def)?;
        Ok(Self {
            id,
            title: def.title,
            description: def.description,
            objectives: def.objectives,
            resources: def.resources,
            difficulty: def.difficulty,
            xp_reward: def.xp_reward,
            estimated_hours: def.estimated_hours,
            zone: def.zone,
            color: def.color,
        })
    }
}

/// Attribute-level checks shared by the in-memory loader and the TOML
/// validator.
pub fn validate_quest_def(id: &str, def: &QuestDef) -> Result<()> {
    if id.trim().is_empty() {
        return Err(QuestmapError::ConfigError(
            "quest identifiers must not be empty".to_string(),
        ));
    }
    if def.title.trim().is_empty() {
        return Err(QuestmapError::ConfigError(format!(
            "quest '{id}' must have a non-empty title"
        )));
    }
    if def.xp_reward == 0 {
        return Err(QuestmapError::ConfigError(format!(
            "quest '{id}': xp_reward must be >= 1 (got 0)"
        )));
    }
    if !(def.estimated_hours.is_finite() && def.estimated_hours > 0.0) {
        return Err(QuestmapError::ConfigError(format!(
            "quest '{id}': estimated_hours must be a positive number (got {})",
            def.estimated_hours
        )));
    }
    if def.zone.trim().is_empty() {
        return Err(QuestmapError::ConfigError(format!(
            "quest '{id}' must belong to a zone"
        )));
    }
    Ok(())
}
