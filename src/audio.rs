//! This module handles the audio playback for the game.
use std::collections::HashMap;
use std::rc::Rc;

use crate::asset::Asset;
use anyhow::{anyhow, Result};
use sdl2::{
    mixer::{self, Chunk, InitFlag, LoaderRWops, AUDIO_S16LSB},
    rwops::RWops,
    AudioSubsystem,
};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

const AUDIO_FREQUENCY: i32 = 44_100;
const OUTPUT_CHANNELS: i32 = 2;
const CHUNK_SIZE: i32 = 1024;
const DEFAULT_VOLUME: i32 = 64;

/// Every sound the game can play. Each one owns a mixer channel, so replaying a
/// sound restarts it and stopping a sound never affects another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Sound {
    BackgroundMusic,
    Jump,
    Collect,
    Hit,
    LevelUp,
    GameOver,
}

impl Sound {
    fn channel(self) -> mixer::Channel {
        mixer::Channel(self as i32)
    }
}

/// Fire-and-forget playback. Nothing waits on a sound or observes its completion.
pub trait AudioSink {
    /// Plays the sound once.
    fn play(&mut self, sound: Sound);
    /// Plays the sound until it is stopped.
    fn play_looped(&mut self, sound: Sound);
    /// Stops the sound if it is playing.
    fn stop(&mut self, sound: Sound);
}

/// The SDL2_mixer backed audio system.
///
/// If audio fails to initialize, it will be disabled and every call silently
/// does nothing. Clones share the loaded sounds.
#[derive(Clone)]
pub struct Audio {
    _mixer_context: Option<Rc<mixer::Sdl2MixerContext>>,
    sounds: Rc<HashMap<Sound, Chunk>>,
    state: AudioState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AudioState {
    Enabled,
    Disabled,
}

impl Default for Audio {
    fn default() -> Self {
        Self::new()
    }
}

impl Audio {
    /// Creates a new `Audio` instance, falling back to a disabled one on failure.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!("Failed to initialize audio: {}. Audio will be disabled.", e);
                Self::disabled()
            }
        }
    }

    /// Opens the mixer on top of an initialized SDL audio subsystem.
    ///
    /// Without a subsystem (no audio driver or device on this host) the game
    /// runs with disabled audio instead of failing to start.
    pub fn with_subsystem(subsystem: Result<AudioSubsystem, String>) -> (Option<AudioSubsystem>, Self) {
        match subsystem {
            Ok(subsystem) => (Some(subsystem), Self::new()),
            Err(e) => {
                tracing::warn!("Failed to initialize audio subsystem: {}. Audio will be disabled.", e);
                (None, Self::disabled())
            }
        }
    }

    /// An audio system that never produces sound.
    pub fn disabled() -> Self {
        Self {
            _mixer_context: None,
            sounds: Rc::new(HashMap::new()),
            state: AudioState::Disabled,
        }
    }

    fn try_new() -> Result<Self> {
        mixer::open_audio(AUDIO_FREQUENCY, AUDIO_S16LSB, OUTPUT_CHANNELS, CHUNK_SIZE)
            .map_err(|e| anyhow!("Failed to open audio: {}", e))?;

        let channel_count = Sound::iter().count() as i32;
        mixer::allocate_channels(channel_count);
        for sound in Sound::iter() {
            sound.channel().set_volume(DEFAULT_VOLUME);
        }

        let mixer_context = mixer::init(InitFlag::OGG).map_err(|e| anyhow!("Failed to initialize SDL2_mixer: {}", e))?;

        let sounds: HashMap<Sound, Chunk> = Sound::iter()
            .filter_map(|sound| match Self::load_sound(sound) {
                Ok(chunk) => Some((sound, chunk)),
                Err(e) => {
                    tracing::warn!("Failed to load sound {:?}: {}", sound, e);
                    None
                }
            })
            .collect();

        if sounds.is_empty() {
            return Err(anyhow!("No sounds loaded successfully"));
        }

        tracing::debug!(loaded = sounds.len(), "Audio initialized");

        Ok(Audio {
            _mixer_context: Some(Rc::new(mixer_context)),
            sounds: Rc::new(sounds),
            state: AudioState::Enabled,
        })
    }

    fn load_sound(sound: Sound) -> Result<Chunk> {
        let data = Asset::SoundFile(sound)
            .get_bytes()
            .map_err(|e| anyhow!("Failed to get bytes for {:?}: {}", sound, e))?;
        let rwops = RWops::from_bytes(&data).map_err(|e| anyhow!("Failed to create RWops for {:?}: {}", sound, e))?;
        rwops
            .load_wav()
            .map_err(|e| anyhow!("Failed to load {:?}: {}", sound, e))
    }

    fn start(&self, sound: Sound, loops: i32) {
        if self.state == AudioState::Disabled {
            return;
        }

        if let Some(chunk) = self.sounds.get(&sound) {
            match sound.channel().play(chunk, loops) {
                Ok(channel) => tracing::trace!(?sound, ?channel, loops, "Playing sound"),
                Err(e) => tracing::warn!("Could not play sound {:?}: {}", sound, e),
            }
        }
    }

    /// Returns whether the audio system failed to initialize and is non-functional.
    pub fn is_disabled(&self) -> bool {
        matches!(self.state, AudioState::Disabled)
    }
}

impl AudioSink for Audio {
    fn play(&mut self, sound: Sound) {
        self.start(sound, 0);
    }

    fn play_looped(&mut self, sound: Sound) {
        self.start(sound, -1);
    }

    fn stop(&mut self, sound: Sound) {
        if self.state != AudioState::Disabled {
            sound.channel().halt();
        }
    }
}
