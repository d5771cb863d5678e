use bevy_ecs::{system::RunSystemOnce, world::World};
use glam::IVec2;
use pretty_assertions::assert_eq;
use skyward_dash::systems::{
    bird_physics_system, scroll_system, Bird, BirdSize, Bounds, GameClock, MissileBundle, Obstacle, ObstacleBundle, ObstacleRole,
    PowerUpBundle,
};
use speculoos::prelude::*;

mod common;

fn count<T: bevy_ecs::component::Component>(world: &mut World) -> usize {
    world.query::<&T>().iter(world).count()
}

#[test]
fn test_scroll_moves_obstacles_and_powerups_by_five() {
    let (mut world, _) = common::create_test_world();
    let obstacle = world
        .spawn(ObstacleBundle::new(ObstacleRole::Top, Bounds::new(800, -100, 140, 300)))
        .id();
    let powerup = world.spawn(PowerUpBundle::at(IVec2::new(800, 50))).id();

    world.run_system_once(scroll_system).expect("System should run successfully");

    assert_eq!(world.get::<Bounds>(obstacle).unwrap().left(), 795);
    assert_eq!(world.get::<Bounds>(powerup).unwrap().left(), 795);
}

#[test]
fn test_missiles_scroll_twice_as_fast() {
    let (mut world, _) = common::create_test_world();
    let missile = world.spawn(MissileBundle::at(IVec2::new(800, 100))).id();

    world.run_system_once(scroll_system).expect("System should run successfully");

    assert_eq!(world.get::<Bounds>(missile).unwrap().left(), 790);
}

#[test]
fn test_scroll_leaves_bird_in_place() {
    let (mut world, _) = common::create_test_world();
    let before = common::bird_bounds(&mut world);

    world.run_system_once(scroll_system).expect("System should run successfully");

    assert_eq!(common::bird_bounds(&mut world), before);
}

#[test]
fn test_offscreen_entities_are_despawned() {
    let (mut world, _) = common::create_test_world();
    // Right edge at 6: still visible after one step, gone after the next.
    world.spawn(ObstacleBundle::new(ObstacleRole::Bottom, Bounds::new(-134, 400, 140, 300)));

    world.run_system_once(scroll_system).expect("System should run successfully");
    assert_eq!(count::<Obstacle>(&mut world), 1);

    world.run_system_once(scroll_system).expect("System should run successfully");
    assert_eq!(count::<Obstacle>(&mut world), 0);
}

#[test]
fn test_right_edge_at_zero_is_kept() {
    let (mut world, _) = common::create_test_world();
    world.spawn(ObstacleBundle::new(ObstacleRole::Bottom, Bounds::new(-135, 400, 140, 300)));

    world.run_system_once(scroll_system).expect("System should run successfully");

    assert_eq!(count::<Obstacle>(&mut world), 1);
}

#[test]
fn test_physics_system_uses_game_clock_for_shrink_expiry() {
    let (mut world, bird) = common::create_test_world();
    world.get_mut::<Bird>(bird).unwrap().size = BirdSize::Shrunk { since_ms: 0 };
    world.insert_resource(GameClock { now_ms: 5000 });

    world.run_system_once(bird_physics_system).expect("System should run successfully");

    let bird = world.get::<Bird>(bird).unwrap();
    assert_that(&bird.is_shrunk()).is_false();
    assert_eq!(bird.velocity, 1.0);
}
