use std::error::Error;
use std::sync::Arc;

use questmap::config::load_curriculum;
use questmap::progress::ProgressTracker;
use questmap::types::Difficulty;
use questmap_test_utils::{curriculum_path, init_tracing};

type TestResult = Result<(), Box<dyn Error>>;

fn python_tracker() -> Result<ProgressTracker, Box<dyn Error>> {
    let curriculum = load_curriculum(curriculum_path("python.toml"))?;
    Ok(ProgressTracker::new(Arc::new(curriculum)))
}

#[test]
fn python_curriculum_loads() -> TestResult {
    init_tracing();
    let tracker = python_tracker()?;
    let curriculum = tracker.curriculum();

    assert_eq!(curriculum.catalog().len(), 28);
    assert_eq!(curriculum.graph().edge_count(), 37);
    assert_eq!(curriculum.entry(), "basics_intro");
    assert_eq!(curriculum.graph().roots(), vec!["basics_intro"]);
    assert_eq!(
        curriculum.catalog().zones(),
        vec![
            "Beginner's Valley",
            "Control Flow Kingdom",
            "Data Structure Plains",
            "Error Handling Hills",
            "Function Fields",
            "Project Peaks",
        ]
    );

    let quiz = curriculum.catalog().quest("quest_quiz")?;
    assert_eq!(quiz.difficulty, Difficulty::Intermediate);
    assert_eq!(quiz.xp_reward, 450);
    assert!(quiz.difficulty > Difficulty::BeginnerPlus);

    let advanced = curriculum.catalog().quest("variables_advanced")?;
    assert_eq!(advanced.difficulty, "Beginner+".parse::<Difficulty>()?);
    assert_eq!(advanced.difficulty.to_string(), "Beginner+");
    assert!(Difficulty::Beginner < Difficulty::BeginnerPlus);
    assert!("Legendary".parse::<Difficulty>().is_err());
    Ok(())
}

#[test]
fn fresh_session_offers_only_basic_syntax() -> TestResult {
    let tracker = python_tracker()?;

    assert_eq!(tracker.available_quests(), vec!["basics_syntax"]);
    assert_eq!(tracker.locked_quests().len(), 26);
    Ok(())
}

#[test]
fn early_completions_unlock_the_next_quests() -> TestResult {
    let mut tracker = python_tracker()?;

    let r = tracker.complete("basics_syntax")?;
    assert_eq!(r.newly_available, vec!["variables_basic".to_string()]);

    let r = tracker.complete("variables_basic")?;
    assert_eq!(
        r.newly_available,
        vec![
            "conditionals_basic".to_string(),
            "numbers_basic".to_string(),
            "strings_basic".to_string(),
        ]
    );
    assert!(tracker.is_locked("quest_calculator")?);
    assert_eq!(
        tracker.missing_prerequisites("quest_calculator")?,
        vec!["functions_basic".to_string()]
    );
    Ok(())
}

#[test]
fn whole_curriculum_completes_in_topological_order() -> TestResult {
    init_tracing();
    let mut tracker = python_tracker()?;
    let order = tracker.curriculum().graph().topological_order().to_vec();

    let mut level_ups = 0;
    for id in &order {
        let r = tracker.complete(id)?;
        if r.leveled_up {
            level_ups += 1;
        }
    }

    assert_eq!(tracker.completed().len(), 28);
    assert_eq!(tracker.total_xp(), 7550);
    assert_eq!(tracker.total_xp(), tracker.curriculum().catalog().total_xp_available());
    assert_eq!(tracker.current_level(), 8);
    assert_eq!(level_ups, 7);
    assert_eq!(tracker.xp_to_next_level(), 450);
    assert_eq!(tracker.completion_rate(), 1.0);
    assert!(tracker.zone_progress().iter().all(|z| z.is_finished()));
    assert!(tracker.available_quests().is_empty());
    Ok(())
}
