use std::collections::HashMap;

use bevy_ecs::{
    entity::Entity,
    event::EventWriter,
    query::{With, Without},
    resource::Resource,
    system::{Commands, Query, Res, ResMut},
};
use tracing::{debug, warn};

use crate::{
    audio::Sound,
    systems::{
        audio::AudioEvent,
        components::{Bird, Bounds, GameClock, Hazard, PowerUp, RunOutcome, RunState, SpriteKind},
    },
    texture::mask::Mask,
};

/// The collision mask of every sprite kind.
#[derive(Resource, Debug, Clone)]
pub struct SpriteMasks {
    masks: HashMap<SpriteKind, Mask>,
}

impl SpriteMasks {
    pub fn from_fn(mut build: impl FnMut(SpriteKind) -> Mask) -> Self {
        Self {
            masks: SpriteKind::ALL.into_iter().map(|kind| (kind, build(kind))).collect(),
        }
    }

    /// Masks where every pixel of every sprite is opaque.
    pub fn solid() -> Self {
        Self::from_fn(|kind| Mask::filled(kind.size()))
    }

    pub fn get(&self, kind: SpriteKind) -> Option<&Mask> {
        self.masks.get(&kind)
    }

    /// Pixel-perfect test between two sprites at their current bounds.
    pub fn collide(&self, a: SpriteKind, a_bounds: &Bounds, b: SpriteKind, b_bounds: &Bounds) -> bool {
        if !a_bounds.intersects(b_bounds) {
            return false;
        }
        match (self.get(a), self.get(b)) {
            (Some(a_mask), Some(b_mask)) => a_mask.overlaps(b_mask, b_bounds.position - a_bounds.position),
            _ => false,
        }
    }
}

/// Ends the run when the bird's mask overlaps any hazard's mask.
pub fn hazard_collision_system(
    masks: Res<SpriteMasks>,
    mut state: ResMut<RunState>,
    birds: Query<(&Bird, &Bounds)>,
    hazards: Query<(Entity, &Bounds, &SpriteKind), With<Hazard>>,
    mut audio_events: EventWriter<AudioEvent>,
) {
    let (bird, bird_bounds) = match birds.single() {
        Ok(bird) => bird,
        Err(e) => {
            warn!("No/multiple birds queried for collision system: {}", e);
            return;
        }
    };

    let hit = hazards
        .iter()
        .find(|(_, bounds, kind)| masks.collide(bird.sprite(), bird_bounds, **kind, bounds));

    if let Some((entity, bounds, kind)) = hit {
        debug!(?entity, ?kind, position = ?bounds.position, bird = ?bird_bounds.position, "Bird hit a hazard");
        audio_events.write(AudioEvent::Play(Sound::Hit));
        audio_events.write(AudioEvent::Stop(Sound::BackgroundMusic));
        state.outcome.get_or_insert(RunOutcome::Collided);
    }
}

/// Shrinks the bird when its rectangle touches a power-up, consuming the power-up.
///
/// At most one power-up is collected per frame.
pub fn powerup_collection_system(
    mut commands: Commands,
    clock: Res<GameClock>,
    mut birds: Query<(&mut Bird, &mut Bounds)>,
    powerups: Query<(Entity, &Bounds), (With<PowerUp>, Without<Bird>)>,
    mut audio_events: EventWriter<AudioEvent>,
) {
    let Ok((mut bird, mut bird_bounds)) = birds.single_mut() else {
        return;
    };

    if let Some((entity, _)) = powerups.iter().find(|(_, bounds)| bird_bounds.intersects(bounds)) {
        bird.shrink(&mut bird_bounds, clock.now_ms);
        debug!(?entity, now_ms = clock.now_ms, "Power-up collected");
        audio_events.write(AudioEvent::Play(Sound::Collect));
        commands.entity(entity).despawn();
    }
}
