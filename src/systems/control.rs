use bevy_ecs::{
    event::{EventReader, EventWriter},
    system::Query,
};
use tracing::{trace, warn};

use crate::{
    audio::Sound,
    events::{GameCommand, GameEvent},
    systems::{audio::AudioEvent, components::Bird},
};

/// Applies queued jump commands to the bird.
pub fn bird_control_system(
    mut events: EventReader<GameEvent>,
    mut birds: Query<&mut Bird>,
    mut audio_events: EventWriter<AudioEvent>,
) {
    let mut bird = match birds.single_mut() {
        Ok(bird) => bird,
        Err(e) => {
            warn!("No/multiple birds queried for control system: {}", e);
            return;
        }
    };

    for event in events.read() {
        match event {
            GameEvent::Command(GameCommand::Jump) => {
                bird.jump();
                trace!(velocity = bird.velocity, "Bird jumped");
                audio_events.write(AudioEvent::Play(Sound::Jump));
            }
        }
    }
}
