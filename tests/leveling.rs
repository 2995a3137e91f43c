use questmap::progress::{LevelingPolicy, level_for, progress_fraction, xp_to_next_level};

#[test]
fn level_starts_at_one_and_steps_every_thousand_xp() {
    assert_eq!(level_for(0), 1);
    assert_eq!(level_for(999), 1);
    assert_eq!(level_for(1000), 2);
    assert_eq!(level_for(1001), 2);
    assert_eq!(level_for(7550), 8);
}

#[test]
fn progress_fraction_is_the_share_of_the_current_band() {
    assert_eq!(progress_fraction(0), 0.0);
    assert_eq!(progress_fraction(250), 0.25);
    assert_eq!(progress_fraction(1000), 0.0);
    assert_eq!(progress_fraction(7550), 0.55);
}

#[test]
fn xp_to_next_level_never_reaches_zero() {
    assert_eq!(xp_to_next_level(0), 1000);
    assert_eq!(xp_to_next_level(999), 1);
    assert_eq!(xp_to_next_level(1000), 1000);
    assert_eq!(xp_to_next_level(7550), 450);
}

#[test]
fn custom_policy_uses_its_own_band_width() {
    let policy = LevelingPolicy::new(250).expect("non-zero band width");

    assert_eq!(policy.xp_per_level(), 250);
    assert_eq!(policy.level_for(500), 3);
    assert_eq!(policy.xp_to_next_level(500), 250);
    assert_eq!(policy.progress_fraction(625), 0.5);
    assert_eq!(policy.xp_for_level(1), 0);
    assert_eq!(policy.xp_for_level(3), 500);
}

#[test]
fn zero_band_width_is_rejected() {
    assert!(LevelingPolicy::new(0).is_none());
    assert_eq!(LevelingPolicy::default().xp_per_level(), 1000);
}

#[test]
fn huge_xp_saturates_the_level() {
    let policy = LevelingPolicy::new(1).expect("non-zero band width");
    assert_eq!(policy.level_for(u64::MAX), u32::MAX);
    assert_eq!(policy.level_for(u64::MAX - 1), u32::MAX);
    assert_eq!(policy.level_for(u64::from(u32::MAX) - 2), u32::MAX - 1);
}
