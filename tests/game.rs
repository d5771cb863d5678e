use pretty_assertions::assert_eq;
use skyward_dash::audio::Sound;
use skyward_dash::constants::{physics, SCREEN_HEIGHT, SCREEN_WIDTH};
use skyward_dash::systems::{AudioEvent, RunOutcome, ScoreKeeper, SpriteKind};
use speculoos::prelude::*;

mod common;

use common::FRAME_MS;

#[test]
fn test_first_pair_after_obstacle_interval() {
    let (mut game, _) = common::create_test_game(1);

    for _ in 0..49 {
        assert_eq!(game.tick(FRAME_MS), None);
    }
    assert_that(&game.bounds_of(SpriteKind::Obstacle)).is_empty();

    // 50 frames of 30 ms reach the 1500 ms interval.
    assert_eq!(game.tick(FRAME_MS), None);
    let pair = game.bounds_of(SpriteKind::Obstacle);
    assert_eq!(pair.len(), 2);
    assert!(pair.iter().all(|b| b.left() == SCREEN_WIDTH));

    let top = pair.iter().min_by_key(|b| b.top()).unwrap();
    let bottom = pair.iter().max_by_key(|b| b.top()).unwrap();
    let gap_center = top.bottom() + physics::GAP_SIZE / 2;
    assert_eq!(bottom.top() - top.bottom(), physics::GAP_SIZE);
    assert_that(&gap_center).is_greater_than_or_equal_to(physics::GAP_SIZE);
    assert_that(&gap_center).is_less_than_or_equal_to(SCREEN_HEIGHT - physics::GAP_SIZE);
}

#[test]
fn test_idle_run_ends_in_collision_with_frame_score() {
    let (mut game, audio) = common::create_test_game(1);

    let mut frames = 0;
    let outcome = loop {
        frames += 1;
        if let Some(outcome) = game.tick(FRAME_MS) {
            break outcome;
        }
        assert!(frames < 2000, "run never ended");
    };

    assert_eq!(outcome, RunOutcome::Collided);
    assert_eq!(game.score(), frames);
    assert!(audio.played(Sound::Hit));
    assert!(audio.events().contains(&AudioEvent::Stop(Sound::BackgroundMusic)));
}

#[test]
fn test_no_frames_run_after_the_end() {
    let (mut game, _) = common::create_test_game(1);
    while game.tick(FRAME_MS).is_none() {}
    let score = game.score();

    assert_eq!(game.tick(FRAME_MS), Some(RunOutcome::Collided));
    assert_eq!(game.score(), score);
}

#[test]
fn test_reaching_threshold_levels_up() {
    let (mut game, _) = common::create_test_game(1);
    game.world.insert_resource(ScoreKeeper { score: 999 });

    assert_eq!(game.tick(FRAME_MS), Some(RunOutcome::LevelUp));
    assert_eq!(game.score(), 1000);
}

#[test]
fn test_jump_lifts_bird_and_plays_sound() {
    let (mut game, audio) = common::create_test_game(1);
    let (_, start) = game.bird().unwrap();

    game.jump();
    game.tick(FRAME_MS);

    let (bird, bounds) = game.bird().unwrap();
    assert_eq!(bird.velocity, -physics::JUMP_STRENGTH + physics::GRAVITY);
    assert_eq!(bounds.top(), start.top() - 9);
    assert_eq!(audio.events(), vec![AudioEvent::Play(Sound::Jump)]);
}

#[test]
fn test_jump_is_consumed_once() {
    let (mut game, _) = common::create_test_game(1);

    game.jump();
    game.tick(FRAME_MS);
    game.tick(FRAME_MS);

    let (bird, _) = game.bird().unwrap();
    assert_eq!(bird.velocity, -physics::JUMP_STRENGTH + 2.0 * physics::GRAVITY);
}

#[test]
fn test_harder_run_spawns_twice_as_often() {
    let (mut game, _) = common::create_test_game(2);
    assert_eq!(game.speed(), 2);

    for _ in 0..25 {
        game.tick(FRAME_MS);
    }

    assert_eq!(game.bounds_of(SpriteKind::Obstacle).len(), 2);
}

#[test]
fn test_missile_hits_bird() {
    let (mut game, _) = common::create_test_game(1);

    // Let the bird settle on the floor.
    for _ in 0..30 {
        game.tick(FRAME_MS);
    }
    let (_, bird) = game.bird().unwrap();
    assert_eq!(bird.bottom(), SCREEN_HEIGHT);

    game.spawn_missile(bird.top() + 20);

    // The missile covers the 640 px to the bird in 64 frames, well before the first obstacle pair.
    let mut frames = 0;
    let outcome = loop {
        frames += 1;
        if let Some(outcome) = game.tick(FRAME_MS) {
            break outcome;
        }
        assert!(frames < 100, "missile never arrived");
    };

    assert_eq!(outcome, RunOutcome::Collided);
    assert_that(&frames).is_greater_than(60);
}
