//! Bridges gameplay sound requests to the audio backend.
//!
//! Systems never touch the mixer directly. They write [`AudioEvent`]s, which
//! [`audio_system`] drains at the end of every frame.

use bevy_ecs::{
    event::{Event, EventReader},
    system::NonSendMut,
};
use tracing::trace;

use crate::audio::{AudioSink, Sound};

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    Play(Sound),
    PlayLooped(Sound),
    Stop(Sound),
}

/// Non-send wrapper for the audio backend.
///
/// SDL2 audio is tied to the main thread, so it lives in the world as a
/// non-send resource.
pub struct AudioResource(pub Box<dyn AudioSink>);

pub fn audio_system(mut audio: NonSendMut<AudioResource>, mut events: EventReader<AudioEvent>) {
    for event in events.read() {
        trace!(?event, "Handling audio event");
        match *event {
            AudioEvent::Play(sound) => audio.0.play(sound),
            AudioEvent::PlayLooped(sound) => audio.0.play_looped(sound),
            AudioEvent::Stop(sound) => audio.0.stop(sound),
        }
    }
}
