use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use proptest::prelude::*;
use questmap::Curriculum;
use questmap::errors::QuestmapError;
use questmap::progress::ProgressTracker;
use questmap_test_utils::builders::{CatalogBuilder, QuestBuilder};

#[derive(Debug, Clone)]
enum Op {
    Complete(usize),
    Reset,
}

// Strategy to generate a valid curriculum.
// Acyclicity: quest N may only depend on quests 0..N-1; quest_0 is the entry.
fn curriculum_strategy(max_quests: usize) -> impl Strategy<Value = Arc<Curriculum>> {
    (1..=max_quests).prop_flat_map(|num_quests| {
        let deps_strat = proptest::collection::vec(
            (
                proptest::collection::vec(any::<usize>(), 0..num_quests),
                1..500u64,
            ),
            num_quests,
        );

        deps_strat.prop_map(move |raw| {
            let mut builder = CatalogBuilder::new("quest_0");
            for (i, (potential_deps, xp)) in raw.into_iter().enumerate() {
                let name = format!("quest_{i}");
                let mut quest = QuestBuilder::new(xp).zone(&format!("zone_{}", i % 3));

                // Sanitize dependencies: only allow deps < i
                let valid_deps: HashSet<usize> = if i > 0 {
                    potential_deps.into_iter().map(|d| d % i).collect()
                } else {
                    HashSet::new()
                };
                for dep in valid_deps {
                    quest = quest.after(&format!("quest_{dep}"));
                }
                builder = builder.with_quest(&name, quest.build());
            }
            builder.curriculum()
        })
    })
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        9 => (0..12usize).prop_map(Op::Complete),
        1 => Just(Op::Reset),
    ]
}

fn xp_of_completed(tracker: &ProgressTracker) -> u64 {
    let catalog = tracker.curriculum().catalog();
    tracker
        .completed()
        .iter()
        .filter(|id| id.as_str() != catalog.entry())
        .filter_map(|id| catalog.get(id))
        .map(|q| q.xp_reward)
        .sum()
}

proptest! {
    #[test]
    fn tracker_invariants_hold_for_any_operation_sequence(
        curriculum in curriculum_strategy(10),
        ops in proptest::collection::vec(op_strategy(), 1..40),
    ) {
        let mut tracker = ProgressTracker::new(curriculum.clone());
        let ids: Vec<String> = curriculum.catalog().ids().map(str::to_string).collect();

        for op in ops {
            let before_completed: BTreeSet<String> = tracker.completed().clone();
            let before_xp = tracker.total_xp();
            let before_level = tracker.current_level();

            match op {
                Op::Reset => {
                    tracker.reset();
                    prop_assert_eq!(tracker.completed().len(), 1);
                    prop_assert_eq!(tracker.total_xp(), 0);
                    prop_assert_eq!(tracker.current_level(), 1);
                    continue;
                }
                Op::Complete(idx) => {
                    let id = match ids.get(idx) {
                        Some(id) => id.clone(),
                        None => {
                            let unknown = format!("missing_{idx}");
                            let is_unknown = matches!(
                                tracker.complete(&unknown),
                                Err(QuestmapError::UnknownQuest(_))
                            );
                            prop_assert!(is_unknown);
                            continue;
                        }
                    };

                    let was_available = tracker.is_available(&id).unwrap();
                    let was_completed = tracker.is_completed(&id).unwrap();

                    match tracker.complete(&id) {
                        Ok(r) => {
                            prop_assert!(was_available || was_completed);
                            prop_assert_eq!(r.already_completed, was_completed);
                            if was_completed {
                                prop_assert_eq!(r.xp_granted, 0);
                                prop_assert_eq!(tracker.completed(), &before_completed);
                            }
                            prop_assert_eq!(r.leveled_up, r.level > before_level);

                            // Idempotence: a second call changes nothing.
                            let state = tracker.state().clone();
                            let again = tracker.complete(&id).unwrap();
                            prop_assert!(again.already_completed);
                            prop_assert_eq!(tracker.state(), &state);
                        }
                        Err(QuestmapError::PrerequisitesNotMet { missing, .. }) => {
                            prop_assert!(!was_available && !was_completed);
                            prop_assert!(!missing.is_empty());
                            prop_assert_eq!(tracker.completed(), &before_completed);
                            prop_assert_eq!(tracker.total_xp(), before_xp);
                        }
                        Err(e) => prop_assert!(false, "unexpected error: {e}"),
                    }
                }
            }

            // Monotonicity outside of reset.
            prop_assert!(tracker.completed().is_superset(&before_completed));
            prop_assert!(tracker.total_xp() >= before_xp);
            prop_assert!(tracker.current_level() >= before_level);

            // XP and level are consistent with the completed set.
            prop_assert_eq!(tracker.total_xp(), xp_of_completed(&tracker));
            prop_assert_eq!(
                tracker.current_level(),
                curriculum.policy().level_for(tracker.total_xp())
            );

            // Exactly one status per quest.
            for id in &ids {
                let flags = [
                    tracker.is_completed(id).unwrap(),
                    tracker.is_available(id).unwrap(),
                    tracker.is_locked(id).unwrap(),
                ];
                prop_assert_eq!(flags.iter().filter(|f| **f).count(), 1);
            }

            // Every completed quest had its prerequisites completed first.
            let order = tracker.completion_order();
            prop_assert_eq!(order.len(), tracker.completed().len());
            for (pos, id) in order.iter().enumerate() {
                let earlier: HashSet<&String> = order[..pos].iter().collect();
                for prereq in curriculum.graph().predecessors(id).unwrap() {
                    prop_assert!(earlier.contains(prereq), "{} completed before {}", id, prereq);
                }
            }
        }
    }
}
