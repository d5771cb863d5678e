use bevy_ecs::system::RunSystemOnce;
use pretty_assertions::assert_eq;
use skyward_dash::systems::{level_up_system, score_system, HighScoreManager, RunOutcome, RunState, ScoreKeeper};
use speculoos::prelude::*;

mod common;

#[test]
fn test_score_counts_frames() {
    let (mut world, _) = common::create_test_world();

    for _ in 0..25 {
        world.run_system_once(score_system).expect("System should run successfully");
    }

    assert_eq!(world.resource::<ScoreKeeper>().score, 25);
}

#[test]
fn test_level_up_at_threshold() {
    let (mut world, _) = common::create_test_world();
    world.insert_resource(ScoreKeeper { score: 999 });

    world.run_system_once(level_up_system).expect("System should run successfully");
    assert_eq!(world.resource::<RunState>().outcome, None);

    world.insert_resource(ScoreKeeper { score: 1000 });
    world.run_system_once(level_up_system).expect("System should run successfully");
    assert_eq!(world.resource::<RunState>().outcome, Some(RunOutcome::LevelUp));
}

#[test]
fn test_level_up_overrides_same_frame_collision() {
    let (mut world, _) = common::create_test_world();
    world.insert_resource(ScoreKeeper { score: 1000 });
    world.insert_resource(RunState {
        outcome: Some(RunOutcome::Collided),
    });

    world.run_system_once(level_up_system).expect("System should run successfully");

    assert_eq!(world.resource::<RunState>().outcome, Some(RunOutcome::LevelUp));
}

#[test]
fn test_high_score_tracks_best_run() {
    let mut high_scores = HighScoreManager::default();
    assert_eq!(high_scores.high_score(), 0);

    for score in [150, 900, 420] {
        ScoreKeeper { score }.record(&mut high_scores);
    }

    assert_that(&high_scores.high_score()).is_equal_to(900);
}
