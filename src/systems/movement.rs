use bevy_ecs::{
    entity::Entity,
    query::Without,
    system::{Commands, Query, Res},
};
use tracing::trace;

use crate::systems::components::{Bird, Bounds, GameClock, Scroll};

/// Applies gravity to the bird and keeps it on screen.
pub fn bird_physics_system(clock: Res<GameClock>, mut birds: Query<(&mut Bird, &mut Bounds)>) {
    for (mut bird, mut bounds) in birds.iter_mut() {
        if bird.update(&mut bounds, clock.now_ms) {
            trace!(top = bounds.top(), "Bird clamped to screen edge");
        }
    }
}

/// Moves every scrolling entity left and despawns those that have left the screen.
pub fn scroll_system(mut commands: Commands, mut scrolling: Query<(Entity, &Scroll, &mut Bounds), Without<Bird>>) {
    for (entity, scroll, mut bounds) in scrolling.iter_mut() {
        if scroll.apply(&mut bounds) {
            trace!(?entity, "Despawning off-screen entity");
            commands.entity(entity).despawn();
        }
    }
}
