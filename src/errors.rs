// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::types::QuestId;

#[derive(Error, Debug)]
pub enum QuestmapError {
    /// An identifier that is not part of the catalog was used.
    #[error("Unknown quest: {0}")]
    UnknownQuest(QuestId),

    /// Edge data violates the DAG invariant (dangling reference, self-loop
    /// or cycle).
    #[error("Invalid prerequisite graph: {0}")]
    InvalidGraph(String),

    /// The learner tried to complete a locked quest.
    #[error("Cannot complete '{quest}': prerequisites not met (missing: {})", .missing.join(", "))]
    PrerequisitesNotMet { quest: QuestId, missing: Vec<QuestId> },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QuestmapError {
    /// Whether this error is an expected, user-facing condition that a
    /// front end should report and carry on from.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, QuestmapError::PrerequisitesNotMet { .. })
    }
}

pub type Result<T> = std::result::Result<T, QuestmapError>;
