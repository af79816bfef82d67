//! QA tests for experience and level progression through the public API.
//!
//! Run with: `cargo test -p rpg-core --test qa_progression`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rpg_core::progression::{EXPERIENCE_PER_LEVEL, HIT_POINTS_PER_LEVEL};
use rpg_core::{level_for_experience, GameEvent, PlayerBuilder};

#[test]
fn test_full_progression_scenario() {
    let mut player = PlayerBuilder::new()
        .name("Aria")
        .build_with_rng(&mut StdRng::seed_from_u64(5))
        .expect("Failed to build player");

    assert_eq!(player.experience_points(), 0);
    assert_eq!(player.level(), 1);

    let events = player.add_experience(150);
    assert_eq!(player.experience_points(), 150);
    assert_eq!(player.level(), 2);
    assert_eq!(player.maximum_hit_points, 20);
    let level_ups = events
        .iter()
        .filter(|e| matches!(e, GameEvent::LevelUp { .. }))
        .count();
    assert_eq!(level_ups, 1);

    let events = player.add_experience(49);
    assert_eq!(player.experience_points(), 199);
    assert_eq!(player.level(), 2);
    assert_eq!(player.maximum_hit_points, 20);
    assert!(!events
        .iter()
        .any(|e| matches!(e, GameEvent::LevelUp { .. })));
}

#[test]
fn test_derivation_law_over_many_gains() {
    let mut player = PlayerBuilder::new()
        .name("Aria")
        .build_with_rng(&mut StdRng::seed_from_u64(6))
        .expect("Failed to build player");

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let gain = rng.gen_range(0..80);
        player.add_experience(gain);
        assert_eq!(
            player.level(),
            level_for_experience(player.experience_points())
        );
        assert_eq!(
            player.level(),
            player.experience_points() / EXPERIENCE_PER_LEVEL + 1
        );
    }
}

#[test]
fn test_max_hit_points_track_level_transitions_only() {
    let mut player = PlayerBuilder::new()
        .name("Aria")
        .build_with_rng(&mut StdRng::seed_from_u64(8))
        .expect("Failed to build player");

    // Dent max HP to prove non-crossing gains leave it alone.
    player.maximum_hit_points = 13;
    player.add_experience(50);
    assert_eq!(player.maximum_hit_points, 13);

    player.add_experience(50);
    assert_eq!(
        player.maximum_hit_points,
        (player.level() * HIT_POINTS_PER_LEVEL) as i32
    );
}
