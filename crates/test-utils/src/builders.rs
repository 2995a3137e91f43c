#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use questmap::catalog::QuestDef;
use questmap::config::{CatalogFile, CatalogSection, QuestConfig, RawCatalogFile};
use questmap::progress::ProgressTracker;
use questmap::types::Difficulty;
use questmap::Curriculum;

/// Builder for catalog files to simplify test setup.
pub struct CatalogBuilder {
    catalog: RawCatalogFile,
}

impl CatalogBuilder {
    pub fn new(entry: &str) -> Self {
        Self {
            catalog: RawCatalogFile {
                catalog: CatalogSection::new(entry),
                quest: BTreeMap::new(),
            },
        }
    }

    pub fn xp_per_level(mut self, xp: u64) -> Self {
        self.catalog.catalog.xp_per_level = xp;
        self
    }

    pub fn with_quest(mut self, id: &str, quest: QuestConfig) -> Self {
        self.catalog.quest.insert(id.to_string(), quest);
        self
    }

    /// The unvalidated file, for tests that expect validation to fail.
    pub fn build_raw(self) -> RawCatalogFile {
        self.catalog
    }

    pub fn build(self) -> CatalogFile {
        CatalogFile::try_from(self.catalog).expect("Failed to build valid catalog from builder")
    }

    pub fn curriculum(self) -> Arc<Curriculum> {
        let cfg = self.build();
        Arc::new(Curriculum::from_config(&cfg).expect("Failed to build curriculum from builder"))
    }

    pub fn tracker(self) -> ProgressTracker {
        ProgressTracker::new(self.curriculum())
    }
}

/// Builder for `QuestConfig`.
pub struct QuestBuilder {
    quest: QuestConfig,
}

impl QuestBuilder {
    pub fn new(xp_reward: u64) -> Self {
        Self {
            quest: QuestConfig {
                def: QuestDef {
                    title: "Untitled quest".to_string(),
                    description: String::new(),
                    objectives: vec![],
                    resources: vec![],
                    difficulty: Difficulty::Beginner,
                    xp_reward,
                    estimated_hours: 1.0,
                    zone: "Default Zone".to_string(),
                    color: None,
                },
                after: vec![],
            },
        }
    }

    pub fn after(mut self, prereq: &str) -> Self {
        self.quest.after.push(prereq.to_string());
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.quest.def.title = title.to_string();
        self
    }

    pub fn zone(mut self, zone: &str) -> Self {
        self.quest.def.zone = zone.to_string();
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.quest.def.difficulty = difficulty;
        self
    }

    pub fn estimated_hours(mut self, hours: f64) -> Self {
        self.quest.def.estimated_hours = hours;
        self
    }

    pub fn objective(mut self, label: &str) -> Self {
        self.quest.def.objectives.push(label.to_string());
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.quest.def.color = Some(color.to_string());
        self
    }

    pub fn build(self) -> QuestConfig {
        self.quest
    }

    /// Just the attributes, for the in-memory loader.
    pub fn def(self) -> QuestDef {
        self.quest.def
    }
}
