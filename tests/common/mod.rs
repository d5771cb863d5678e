#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use bevy_ecs::{entity::Entity, event::Events, world::World};
use rand::{rngs::SmallRng, SeedableRng};
use skyward_dash::{
    audio::{AudioSink, Sound},
    events::GameEvent,
    game::Game,
    systems::{
        AudioEvent, AudioResource, BirdBundle, Bounds, DeltaTime, GameClock, GameRng, RunState, ScoreKeeper, SpawnTimers,
        SpeedMultiplier, SpriteMasks,
    },
};

pub const TEST_SEED: u64 = 0x5eed;

/// Milliseconds per frame at 30 FPS, rounded the way the frame timer rounds.
pub const FRAME_MS: u64 = 30;

pub fn test_rng() -> SmallRng {
    SmallRng::seed_from_u64(TEST_SEED)
}

/// Records every sound request instead of playing it.
#[derive(Clone, Default)]
pub struct RecordingAudio {
    pub log: Rc<RefCell<Vec<AudioEvent>>>,
}

impl RecordingAudio {
    pub fn events(&self) -> Vec<AudioEvent> {
        self.log.borrow().clone()
    }

    pub fn played(&self, sound: Sound) -> bool {
        self.log.borrow().contains(&AudioEvent::Play(sound))
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, sound: Sound) {
        self.log.borrow_mut().push(AudioEvent::Play(sound));
    }

    fn play_looped(&mut self, sound: Sound) {
        self.log.borrow_mut().push(AudioEvent::PlayLooped(sound));
    }

    fn stop(&mut self, sound: Sound) {
        self.log.borrow_mut().push(AudioEvent::Stop(sound));
    }
}

/// A run with solid masks, a seeded RNG and recorded audio.
pub fn create_test_game(speed: u32) -> (Game, RecordingAudio) {
    let audio = RecordingAudio::default();
    let game = Game::new(speed, SpriteMasks::solid(), test_rng(), Box::new(audio.clone()));
    (game, audio)
}

/// A bare world with every resource the systems need and one bird at its spawn point.
pub fn create_test_world() -> (World, Entity) {
    let mut world = World::default();

    world.init_resource::<Events<GameEvent>>();
    world.init_resource::<Events<AudioEvent>>();
    world.insert_resource(DeltaTime::default());
    world.insert_resource(GameClock::default());
    world.insert_resource(SpeedMultiplier(1));
    world.insert_resource(SpawnTimers::default());
    world.insert_resource(ScoreKeeper::default());
    world.insert_resource(RunState::default());
    world.insert_resource(GameRng(test_rng()));
    world.insert_resource(SpriteMasks::solid());
    world.insert_non_send_resource(AudioResource(Box::new(RecordingAudio::default())));

    let bird = world.spawn(BirdBundle::default()).id();
    (world, bird)
}

pub fn send_game_event(world: &mut World, event: GameEvent) {
    world.resource_mut::<Events<GameEvent>>().send(event);
}

/// Removes and returns every audio event written so far.
pub fn drain_audio_events(world: &mut World) -> Vec<AudioEvent> {
    world.resource_mut::<Events<AudioEvent>>().drain().collect()
}

pub fn bird_bounds(world: &mut World) -> Bounds {
    *world
        .query_filtered::<&Bounds, bevy_ecs::query::With<skyward_dash::systems::Bird>>()
        .single(world)
        .expect("exactly one bird")
}
