use bevy_ecs::{system::RunSystemOnce, world::World};
use glam::IVec2;
use pretty_assertions::assert_eq;
use skyward_dash::constants::{physics, SCREEN_HEIGHT, SCREEN_WIDTH};
use skyward_dash::systems::{
    advance_spawn_timers_system, find_powerup_spot, obstacle_spawn_system, powerup_spawn_system, too_close, Bounds, DeltaTime,
    Obstacle, ObstacleBundle, ObstacleRole, PowerUp, SpawnTimers, SpeedMultiplier,
};
use speculoos::prelude::*;

mod common;

fn obstacles(world: &mut World) -> Vec<(Obstacle, Bounds)> {
    world
        .query::<(&Obstacle, &Bounds)>()
        .iter(world)
        .map(|(o, b)| (*o, *b))
        .collect()
}

fn powerups(world: &mut World) -> Vec<Bounds> {
    world
        .query_filtered::<&Bounds, bevy_ecs::query::With<PowerUp>>()
        .iter(world)
        .copied()
        .collect()
}

#[test]
fn test_timers_advance_by_frame_delta() {
    let (mut world, _) = common::create_test_world();
    world.insert_resource(DeltaTime { millis: 33 });

    world.run_system_once(advance_spawn_timers_system).expect("System should run successfully");
    world.run_system_once(advance_spawn_timers_system).expect("System should run successfully");

    assert_eq!(
        *world.resource::<SpawnTimers>(),
        SpawnTimers {
            obstacle_ms: 66,
            powerup_ms: 66
        }
    );
}

#[test]
fn test_obstacle_pair_spawns_when_interval_reached() {
    let (mut world, _) = common::create_test_world();
    world.resource_mut::<SpawnTimers>().obstacle_ms = 1500;

    world.run_system_once(obstacle_spawn_system).expect("System should run successfully");

    let pair = obstacles(&mut world);
    assert_eq!(pair.len(), 2);
    let top = pair.iter().find(|(o, _)| o.role == ObstacleRole::Top).unwrap().1;
    let bottom = pair.iter().find(|(o, _)| o.role == ObstacleRole::Bottom).unwrap().1;

    assert_eq!(top.left(), SCREEN_WIDTH);
    assert_eq!(bottom.left(), SCREEN_WIDTH);
    assert_eq!(bottom.top() - top.bottom(), physics::GAP_SIZE);

    let gap_center = top.bottom() + physics::GAP_SIZE / 2;
    assert_that(&gap_center).is_greater_than_or_equal_to(physics::GAP_SIZE);
    assert_that(&gap_center).is_less_than_or_equal_to(SCREEN_HEIGHT - physics::GAP_SIZE);

    assert_eq!(world.resource::<SpawnTimers>().obstacle_ms, 0);
}

#[test]
fn test_obstacle_waits_for_interval() {
    let (mut world, _) = common::create_test_world();
    world.resource_mut::<SpawnTimers>().obstacle_ms = 1499;

    world.run_system_once(obstacle_spawn_system).expect("System should run successfully");

    assert_that(&obstacles(&mut world)).is_empty();
    assert_eq!(world.resource::<SpawnTimers>().obstacle_ms, 1499);
}

#[test]
fn test_obstacle_interval_scales_with_speed() {
    let (mut world, _) = common::create_test_world();
    world.insert_resource(SpeedMultiplier(2));
    world.resource_mut::<SpawnTimers>().obstacle_ms = 750;

    world.run_system_once(obstacle_spawn_system).expect("System should run successfully");

    assert_eq!(obstacles(&mut world).len(), 2);
}

#[test]
fn test_powerup_interval_ignores_speed() {
    let (mut world, _) = common::create_test_world();
    world.insert_resource(SpeedMultiplier(2));
    world.resource_mut::<SpawnTimers>().powerup_ms = 4000;

    world.run_system_once(powerup_spawn_system).expect("System should run successfully");

    assert_that(&powerups(&mut world)).is_empty();
}

#[test]
fn test_powerup_spawns_at_right_edge() {
    let (mut world, _) = common::create_test_world();
    world.resource_mut::<SpawnTimers>().powerup_ms = 8000;

    world.run_system_once(powerup_spawn_system).expect("System should run successfully");

    let spawned = powerups(&mut world);
    assert_eq!(spawned.len(), 1);
    assert_eq!(spawned[0].left(), SCREEN_WIDTH);
    assert_that(&spawned[0].top()).is_less_than_or_equal_to(SCREEN_HEIGHT - 30);
    assert_eq!(spawned[0].size, physics::POWERUP_SIZE);
    assert_eq!(world.resource::<SpawnTimers>().powerup_ms, 0);
}

#[test]
fn test_powerup_avoids_obstacles() {
    let (mut world, _) = common::create_test_world();
    // A single top obstacle covering y in [0, 300) at the right edge.
    world.spawn(ObstacleBundle::new(ObstacleRole::Top, Bounds::new(SCREEN_WIDTH, 0, 140, 300)));
    world.resource_mut::<SpawnTimers>().powerup_ms = 8000;

    world.run_system_once(powerup_spawn_system).expect("System should run successfully");

    for powerup in powerups(&mut world) {
        assert_that(&powerup.top()).is_greater_than_or_equal_to(400);
    }
}

#[test]
fn test_blocked_powerup_is_skipped_and_timer_resets() {
    let (mut world, _) = common::create_test_world();
    world.spawn(ObstacleBundle::new(ObstacleRole::Top, Bounds::new(SCREEN_WIDTH - 50, -200, 140, 1000)));
    world.resource_mut::<SpawnTimers>().powerup_ms = 8000;

    world.run_system_once(powerup_spawn_system).expect("System should run successfully");

    assert_that(&powerups(&mut world)).is_empty();
    assert_eq!(world.resource::<SpawnTimers>().powerup_ms, 0);
}

#[test]
fn test_too_close_uses_strict_clearance() {
    let obstacle = Bounds::new(800, 0, 140, 300);

    assert_that(&too_close(IVec2::new(800, 399), &obstacle)).is_true();
    assert_that(&too_close(IVec2::new(800, 400), &obstacle)).is_false();
    assert_that(&too_close(IVec2::new(700, 100), &obstacle)).is_false();
    assert_that(&too_close(IVec2::new(701, 100), &obstacle)).is_true();
}

#[test]
fn test_find_powerup_spot_rejects_blocked_candidates() {
    let mut rng = common::test_rng();
    let obstacle = Bounds::new(SCREEN_WIDTH, 0, 140, 300);

    for _ in 0..50 {
        if let Some(spot) = find_powerup_spot(&mut rng, &[obstacle]) {
            assert_that(&too_close(spot, &obstacle)).is_false();
        }
    }
}
