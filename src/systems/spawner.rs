//! Timed creation of obstacle pairs and power-ups.

use bevy_ecs::{
    query::With,
    resource::Resource,
    system::{Commands, Query, Res, ResMut},
};
use glam::IVec2;
use rand::Rng;
use tracing::{debug, trace};

use crate::constants::{physics, spawn, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::systems::components::{
    Bounds, DeltaTime, GameRng, Obstacle, ObstacleBundle, ObstacleRole, PowerUpBundle, SpeedMultiplier,
};

/// Milliseconds accumulated towards the next spawn of each kind.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTimers {
    pub obstacle_ms: u64,
    pub powerup_ms: u64,
}

/// Bounds of the top and bottom obstacle around a gap centered on `gap_center`.
pub fn obstacle_pair(gap_center: i32) -> (Bounds, Bounds) {
    let half_gap = physics::GAP_SIZE / 2;
    let size = physics::OBSTACLE_SIZE;

    let mut top = Bounds::new(SCREEN_WIDTH, 0, size.x, size.y);
    top.set_bottom(gap_center - half_gap);
    let mut bottom = Bounds::new(SCREEN_WIDTH, 0, size.x, size.y);
    bottom.set_top(gap_center + half_gap);

    (top, bottom)
}

/// Whether a power-up placed at `candidate` would sit within the clearance of `obstacle`.
///
/// Both comparisons are strict, so a candidate exactly at the clearance is accepted.
pub fn too_close(candidate: IVec2, obstacle: &Bounds) -> bool {
    let clearance = spawn::POWERUP_CLEARANCE;
    candidate.x < obstacle.right() + clearance
        && candidate.x > obstacle.left() - clearance
        && candidate.y < obstacle.bottom() + clearance
        && candidate.y > obstacle.top() - clearance
}

/// Samples power-up positions until one clears every obstacle.
///
/// Gives up after a fixed number of attempts so a crowded screen cannot stall the frame.
pub fn find_powerup_spot(rng: &mut impl Rng, obstacles: &[Bounds]) -> Option<IVec2> {
    let max_y = SCREEN_HEIGHT - physics::POWERUP_SIZE.y as i32;
    (0..spawn::POWERUP_PLACEMENT_ATTEMPTS)
        .map(|_| IVec2::new(SCREEN_WIDTH, rng.random_range(0..=max_y)))
        .find(|candidate| !obstacles.iter().any(|obstacle| too_close(*candidate, obstacle)))
}

pub fn advance_spawn_timers_system(delta: Res<DeltaTime>, mut timers: ResMut<SpawnTimers>) {
    timers.obstacle_ms += delta.millis;
    timers.powerup_ms += delta.millis;
}

pub fn obstacle_spawn_system(
    mut commands: Commands,
    mut timers: ResMut<SpawnTimers>,
    speed: Res<SpeedMultiplier>,
    mut rng: ResMut<GameRng>,
) {
    if timers.obstacle_ms < spawn::obstacle_interval_ms(speed.0) {
        return;
    }

    let gap_center = rng.0.random_range(physics::GAP_SIZE..=SCREEN_HEIGHT - physics::GAP_SIZE);
    let (top, bottom) = obstacle_pair(gap_center);
    commands.spawn(ObstacleBundle::new(ObstacleRole::Top, top));
    commands.spawn(ObstacleBundle::new(ObstacleRole::Bottom, bottom));
    trace!(gap_center, "Spawned obstacle pair");

    timers.obstacle_ms = 0;
}

pub fn powerup_spawn_system(
    mut commands: Commands,
    mut timers: ResMut<SpawnTimers>,
    mut rng: ResMut<GameRng>,
    obstacles: Query<&Bounds, With<Obstacle>>,
) {
    if timers.powerup_ms < spawn::POWERUP_INTERVAL_MS {
        return;
    }

    let obstacles: Vec<Bounds> = obstacles.iter().copied().collect();
    match find_powerup_spot(&mut rng.0, &obstacles) {
        Some(position) => {
            commands.spawn(PowerUpBundle::at(position));
            trace!(?position, "Spawned power-up");
        }
        None => debug!(
            obstacles = obstacles.len(),
            attempts = spawn::POWERUP_PLACEMENT_ATTEMPTS,
            "No clear spot for a power-up, skipping this cycle"
        ),
    }

    timers.powerup_ms = 0;
}
