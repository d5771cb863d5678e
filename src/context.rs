//! Everything that outlives a single screen: the canvas, loaded assets, audio and the high score.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use sdl2::render::Canvas;
use sdl2::rwops::RWops;
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::Window;
use tracing::trace;

use crate::asset::Asset;
use crate::audio::{Audio, AudioSink};
use crate::constants::ui;
use crate::error::{GameError, GameResult};
use crate::game::Game;
use crate::systems::{AudioEvent, HighScoreManager, SpriteMasks};
use crate::texture::sprites::SpriteTextures;
use crate::texture::ttf::TtfAtlas;

pub struct GameContext {
    pub canvas: Canvas<Window>,
    pub sprites: SpriteTextures,
    pub masks: SpriteMasks,
    pub atlas: TtfAtlas,
    pub audio: Audio,
    pub high_scores: HighScoreManager,
}

impl GameContext {
    /// Loads every asset the game needs.
    pub fn new(mut canvas: Canvas<Window>, ttf_context: &Sdl2TtfContext, audio: Audio) -> GameResult<Self> {
        let texture_creator = canvas.texture_creator();

        trace!("Loading sprites");
        let (sprites, masks) = SpriteTextures::load(&texture_creator)?;

        trace!("Loading font");
        let font_data: &'static [u8] = Asset::Font.get_bytes()?.leak();
        let font_rwops = RWops::from_bytes(font_data).map_err(|e| GameError::Sdl(e.to_string()))?;
        let font = ttf_context
            .load_font_from_rwops(font_rwops, ui::FONT_SIZE)
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        trace!("Building glyph atlas");
        let mut atlas = TtfAtlas::new(&texture_creator, &font)?;
        atlas.populate(&mut canvas, &texture_creator, &font)?;

        Ok(Self {
            canvas,
            sprites,
            masks,
            atlas,
            audio,
            high_scores: HighScoreManager::default(),
        })
    }

    /// Starts a fresh run at the given speed.
    pub fn new_game(&self, speed: u32) -> Game {
        let rng = SmallRng::from_rng(&mut rand::rng());
        Game::new(speed, self.masks.clone(), rng, Box::new(self.audio.clone()))
    }

    pub fn play(&mut self, event: AudioEvent) {
        match event {
            AudioEvent::Play(sound) => self.audio.play(sound),
            AudioEvent::PlayLooped(sound) => self.audio.play_looped(sound),
            AudioEvent::Stop(sound) => self.audio.stop(sound),
        }
    }
}
