// src/lib.rs

pub mod catalog;
pub mod cli;
pub mod config;
pub mod curriculum;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod progress;
pub mod types;

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_curriculum;
use crate::progress::CompletionResult;

pub use crate::curriculum::Curriculum;
pub use crate::errors::QuestmapError;
pub use crate::progress::ProgressTracker;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - catalog loading and validation
/// - a fresh progress session
/// - the scripted `--complete` list
/// - the final progress report
pub fn run(args: CliArgs) -> Result<()> {
    let catalog_path = args.catalog_path();
    let curriculum = load_curriculum(&catalog_path)?;
    info!(
        path = %catalog_path.display(),
        quests = curriculum.catalog().len(),
        "catalog loaded"
    );

    if args.dry_run {
        print_dry_run(&curriculum);
        return Ok(());
    }

    let mut tracker = ProgressTracker::new(Arc::new(curriculum));

    for quest in &args.complete {
        match tracker.complete(quest) {
            Ok(result) => print_completion(&tracker, &result),
            Err(e) if e.is_recoverable() => println!("  ! {e}"),
            Err(e) => return Err(e.into()),
        }
    }

    print_report(&tracker);
    Ok(())
}

/// Dry-run output: quests in topological order with their prerequisites.
fn print_dry_run(curriculum: &Curriculum) {
    let catalog = curriculum.catalog();
    let graph = curriculum.graph();

    println!("questmap dry-run");
    println!("  catalog.entry = {}", catalog.entry());
    println!(
        "  catalog.xp_per_level = {}",
        curriculum.policy().xp_per_level()
    );
    println!();

    println!("quests ({}):", catalog.len());
    for id in graph.topological_order() {
        let Some(quest) = catalog.get(id) else {
            continue;
        };
        println!("  - {id}: {}", quest.title);
        println!(
            "      zone: {}, difficulty: {}, xp: {}, hours: {}",
            quest.zone, quest.difficulty, quest.xp_reward, quest.estimated_hours
        );
        if let Ok(prereqs) = graph.predecessors(id) {
            if !prereqs.is_empty() {
                println!("      after: {:?}", prereqs);
            }
        }
    }

    debug!("dry-run complete (no session started)");
}

fn print_completion(tracker: &ProgressTracker, result: &CompletionResult) {
    let title = tracker
        .curriculum()
        .catalog()
        .get(&result.quest)
        .map(|q| q.title.as_str())
        .unwrap_or(result.quest.as_str());

    if result.already_completed {
        println!("  = {title} (already completed)");
        return;
    }

    println!(
        "  + {title}: +{} XP (total {})",
        result.xp_granted, result.total_xp
    );
    if let Some(level) = result.level_up() {
        println!("    level up! now level {level}");
    }
    if !result.newly_available.is_empty() {
        println!("    unlocked: {}", result.newly_available.join(", "));
    }
}

fn print_report(tracker: &ProgressTracker) {
    let snapshot = tracker.snapshot();

    println!();
    println!("level {} ({} XP)", snapshot.level, snapshot.total_xp);
    println!(
        "  progress to level {}: {:.0}% ({} XP to go)",
        snapshot.level + 1,
        snapshot.progress_fraction * 100.0,
        snapshot.xp_to_next_level
    );
    println!(
        "  quests completed: {}/{} ({:.1}%)",
        snapshot.completed,
        snapshot.total_quests,
        tracker.completion_rate() * 100.0
    );
    println!();

    for zone in tracker.zone_progress() {
        println!("{} ({}/{} quests)", zone.zone, zone.completed, zone.total);
        for id in &zone.available {
            println!("  available: {id}");
        }
    }
}
