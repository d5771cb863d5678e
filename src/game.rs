//! A single run of the game: the bird, the scrolling hazards, and the score.

use bevy_ecs::event::Events;
use bevy_ecs::query::Without;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use glam::IVec2;
use rand::rngs::SmallRng;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::{debug, info, trace};

use crate::audio::AudioSink;
use crate::constants::{ui, SCREEN_WIDTH};
use crate::error::{GameResult, TextureError};
use crate::events::{GameCommand, GameEvent};
use crate::systems::{
    advance_spawn_timers_system, audio_system, bird_control_system, bird_physics_system, hazard_collision_system,
    level_up_system, obstacle_spawn_system, powerup_collection_system, powerup_spawn_system, score_system, scroll_system,
    AudioEvent, AudioResource, Bird, BirdBundle, Bounds, DeltaTime, GameClock, GameRng, MissileBundle, RunOutcome, RunState,
    ScoreKeeper, SpawnTimers, SpeedMultiplier, SpriteKind, SpriteMasks,
};
use crate::texture::sprites::{Background, SpriteTextures};
use crate::texture::ttf::{TtfAtlas, TtfRenderer};

/// Core game state for one run, from the first frame until a collision or level-up.
///
/// The world holds no SDL state apart from the boxed audio sink, so a run can be
/// driven frame by frame without a window.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    pub fn new(speed: u32, masks: SpriteMasks, rng: SmallRng, audio: Box<dyn AudioSink>) -> Self {
        let speed = speed.max(1);
        let mut world = World::default();

        world.init_resource::<Events<GameEvent>>();
        world.init_resource::<Events<AudioEvent>>();

        world.insert_resource(DeltaTime::default());
        world.insert_resource(GameClock::default());
        world.insert_resource(SpeedMultiplier(speed));
        world.insert_resource(SpawnTimers::default());
        world.insert_resource(ScoreKeeper::default());
        world.insert_resource(RunState::default());
        world.insert_resource(GameRng(rng));
        world.insert_resource(masks);
        world.insert_non_send_resource(AudioResource(audio));

        world.spawn(BirdBundle::default());

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                bird_control_system,
                bird_physics_system,
                scroll_system,
                advance_spawn_timers_system,
                obstacle_spawn_system,
                powerup_spawn_system,
                hazard_collision_system,
                powerup_collection_system,
                score_system,
                level_up_system,
                audio_system,
            )
                .chain(),
        );

        info!(speed, "Run started");
        Game { world, schedule }
    }

    /// Queues a jump for the next frame.
    pub fn jump(&mut self) {
        self.world
            .resource_mut::<Events<GameEvent>>()
            .send(GameCommand::Jump.into());
    }

    /// Advances the run by one frame that took `dt_ms` of wall-clock time.
    ///
    /// Returns the outcome once the run has ended; later calls do nothing.
    pub fn tick(&mut self, dt_ms: u64) -> Option<RunOutcome> {
        if let Some(outcome) = self.outcome() {
            return Some(outcome);
        }

        self.world.insert_resource(DeltaTime { millis: dt_ms });
        self.world.resource_mut::<GameClock>().now_ms += dt_ms;

        self.schedule.run(&mut self.world);

        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.resource_mut::<Events<AudioEvent>>().update();

        let outcome = self.outcome();
        if let Some(outcome) = outcome {
            debug!(?outcome, score = self.score(), "Run ended");
        }
        outcome
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.world.resource::<RunState>().outcome
    }

    pub fn score(&self) -> u32 {
        self.world.resource::<ScoreKeeper>().score
    }

    pub fn score_keeper(&self) -> ScoreKeeper {
        *self.world.resource::<ScoreKeeper>()
    }

    pub fn speed(&self) -> u32 {
        self.world.resource::<SpeedMultiplier>().0
    }

    /// Launches a missile from the right edge with its top at `y`.
    pub fn spawn_missile(&mut self, y: i32) {
        trace!(y, "Spawning missile");
        self.world.spawn(MissileBundle::at(IVec2::new(SCREEN_WIDTH, y)));
    }

    /// The bird's bounds and its current state.
    pub fn bird(&mut self) -> Option<(Bird, Bounds)> {
        self.world
            .query::<(&Bird, &Bounds)>()
            .single(&self.world)
            .ok()
            .map(|(bird, bounds)| (*bird, *bounds))
    }

    /// Bounds of every non-bird entity drawn with `kind`.
    pub fn bounds_of(&mut self, kind: SpriteKind) -> Vec<Bounds> {
        self.world
            .query_filtered::<(&Bounds, &SpriteKind), Without<Bird>>()
            .iter(&self.world)
            .filter(|(_, k)| **k == kind)
            .map(|(bounds, _)| *bounds)
            .collect()
    }

    /// Draws the background, the bird, every scrolling entity, then the score.
    pub fn draw(&mut self, canvas: &mut Canvas<Window>, sprites: &SpriteTextures, atlas: &mut TtfAtlas) -> GameResult<()> {
        if let Some(background) = sprites.background(Background::Forest) {
            canvas.copy(background, None, None).map_err(TextureError::RenderFailed)?;
        }

        let mut drawables: Vec<(SpriteKind, Bounds)> = Vec::new();
        if let Ok((bird, bounds)) = self.world.query::<(&Bird, &Bounds)>().single(&self.world) {
            drawables.push((bird.sprite(), *bounds));
        }
        drawables.extend(
            self.world
                .query_filtered::<(&SpriteKind, &Bounds), Without<Bird>>()
                .iter(&self.world)
                .map(|(kind, bounds)| (*kind, *bounds)),
        );

        for (kind, bounds) in drawables {
            if let Some(texture) = sprites.sprite(kind) {
                let dest = Rect::new(bounds.left(), bounds.top(), bounds.size.x, bounds.size.y);
                canvas.copy(texture, None, dest).map_err(TextureError::RenderFailed)?;
            }
        }

        TtfRenderer::new(ui::BODY_TEXT_SCALE).render_text(
            canvas,
            atlas,
            &format!("Score: {}", self.score()),
            IVec2::new(10, 10),
            ui::TEXT_COLOR,
        )?;

        Ok(())
    }
}
