//! Loading of every image the game draws, along with the collision masks derived from them.

use std::collections::HashMap;

use glam::UVec2;
use sdl2::image::ImageRWops;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{BlendMode, Texture, TextureCreator};
use sdl2::rwops::RWops;
use sdl2::surface::Surface;
use sdl2::video::WindowContext;
use tracing::{debug, trace};

use crate::asset::{Asset, Image};
use crate::constants::{physics, CANVAS_SIZE};
use crate::error::{GameError, GameResult, TextureError};
use crate::systems::{SpriteKind, SpriteMasks};
use crate::texture::mask::Mask;

const MISSILE_COLOR: Color = Color::RGB(255, 0, 0);

/// Full-screen images drawn behind everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    Forest,
    GameOver,
    Loading,
}

impl Background {
    const ALL: [Background; 3] = [Background::Forest, Background::GameOver, Background::Loading];

    fn image(self) -> Image {
        match self {
            Background::Forest => Image::Forest,
            Background::GameOver => Image::GameOver,
            Background::Loading => Image::Loading,
        }
    }
}

/// Every loaded texture, scaled to the size it is drawn at.
pub struct SpriteTextures {
    sprites: HashMap<SpriteKind, Texture>,
    backgrounds: HashMap<Background, Texture>,
}

impl SpriteTextures {
    /// Loads every image, scales it, and builds the masks for the sprites.
    pub fn load(texture_creator: &TextureCreator<WindowContext>) -> GameResult<(Self, SpriteMasks)> {
        let mut sprites = HashMap::new();
        let mut masks = HashMap::new();

        for kind in SpriteKind::ALL {
            let surface = sprite_surface(kind)?;
            let mask = Mask::from_surface(&surface, physics::MASK_ALPHA_THRESHOLD)?;
            debug!(?kind, opaque = mask.count(), size = ?mask.size(), "Built collision mask");

            sprites.insert(kind, to_texture(texture_creator, &surface)?);
            masks.insert(kind, mask);
        }

        let mut backgrounds = HashMap::new();
        for background in Background::ALL {
            let surface = load_scaled(background.image(), CANVAS_SIZE)?;
            backgrounds.insert(background, to_texture(texture_creator, &surface)?);
        }

        let masks = SpriteMasks::from_fn(|kind| masks.remove(&kind).unwrap_or_else(|| Mask::new(kind.size())));

        Ok((Self { sprites, backgrounds }, masks))
    }

    pub fn sprite(&self, kind: SpriteKind) -> Option<&Texture> {
        self.sprites.get(&kind)
    }

    pub fn background(&self, background: Background) -> Option<&Texture> {
        self.backgrounds.get(&background)
    }
}

fn sprite_surface(kind: SpriteKind) -> GameResult<Surface<'static>> {
    let image = match kind {
        SpriteKind::Bird | SpriteKind::SmallBird => Image::Bird,
        SpriteKind::Obstacle => Image::Pillar,
        SpriteKind::PowerUp => Image::Cookie,
        SpriteKind::Missile => return solid_surface(kind.size(), MISSILE_COLOR),
    };
    load_scaled(image, kind.size())
}

/// Decodes an image asset and scales it to `size` in ARGB8888, preserving alpha.
fn load_scaled(image: Image, size: UVec2) -> GameResult<Surface<'static>> {
    let bytes = Asset::Image(image).get_bytes()?;
    trace!(?image, bytes = bytes.len(), ?size, "Decoding image");

    let rwops = RWops::from_bytes(&bytes).map_err(|e| GameError::Sdl(e.to_string()))?;
    let decoded = rwops
        .load()
        .map_err(|e| TextureError::LoadFailed(format!("{:?}: {}", image, e)))?;
    let mut source = decoded
        .convert_format(PixelFormatEnum::ARGB8888)
        .map_err(|e| TextureError::LoadFailed(format!("{:?}: {}", image, e)))?;
    source.set_blend_mode(BlendMode::None).map_err(GameError::Sdl)?;

    let mut scaled = Surface::new(size.x, size.y, PixelFormatEnum::ARGB8888).map_err(GameError::Sdl)?;
    source.blit_scaled(None, &mut scaled, None).map_err(GameError::Sdl)?;

    Ok(scaled)
}

fn solid_surface(size: UVec2, color: Color) -> GameResult<Surface<'static>> {
    let mut surface = Surface::new(size.x, size.y, PixelFormatEnum::ARGB8888).map_err(GameError::Sdl)?;
    surface.fill_rect(None, color).map_err(GameError::Sdl)?;
    Ok(surface)
}

fn to_texture(texture_creator: &TextureCreator<WindowContext>, surface: &Surface) -> GameResult<Texture> {
    let mut texture = texture_creator
        .create_texture_from_surface(surface)
        .map_err(|e| TextureError::LoadFailed(e.to_string()))?;
    texture.set_blend_mode(BlendMode::Blend);
    Ok(texture)
}
