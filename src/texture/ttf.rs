//! Text rendering from a pre-rendered glyph atlas.
//!
//! Every printable ASCII glyph is rendered once at startup into a single texture;
//! drawing text is then a sequence of copies out of that texture.

use std::collections::HashMap;

use glam::{IVec2, UVec2};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, RenderTarget, Texture, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::WindowContext;
use tracing::trace;

use crate::error::{GameError, TextureError};

/// Where a glyph lives in the atlas, and how far it advances the pen.
#[derive(Clone, Copy, Debug)]
pub struct GlyphTile {
    pub pos: UVec2,
    pub size: UVec2,
    pub advance: u32,
}

pub struct TtfAtlas {
    texture: Texture,
    glyphs: HashMap<char, GlyphTile>,
    last_modulation: Option<Color>,
    line_height: u32,
}

fn atlas_chars() -> impl Iterator<Item = char> {
    (' '..='~').filter(|c| !c.is_control())
}

impl TtfAtlas {
    /// Measures every glyph and allocates the atlas texture.
    ///
    /// The texture is blank until [`TtfAtlas::populate`] is called.
    pub fn new(texture_creator: &TextureCreator<WindowContext>, font: &Font) -> Result<Self, GameError> {
        let mut glyphs = HashMap::new();
        let mut cursor = 0u32;
        let mut line_height = 0u32;

        for c in atlas_chars() {
            let (advance, height) = font.size_of_char(c).map_err(|e| GameError::Sdl(e.to_string()))?;
            let width = if c == ' ' { 0 } else { advance };
            glyphs.insert(
                c,
                GlyphTile {
                    pos: UVec2::new(cursor, 0),
                    size: UVec2::new(width, height),
                    advance,
                },
            );
            cursor += width;
            line_height = line_height.max(height);
        }

        trace!(glyphs = glyphs.len(), width = cursor, height = line_height, "Allocating glyph atlas");

        let mut texture = texture_creator
            .create_texture_target(None, cursor.max(1), line_height.max(1))
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        texture.set_blend_mode(BlendMode::Blend);

        Ok(Self {
            texture,
            glyphs,
            last_modulation: None,
            line_height,
        })
    }

    /// Renders every glyph into the atlas texture.
    pub fn populate<C: RenderTarget>(
        &mut self,
        canvas: &mut Canvas<C>,
        texture_creator: &TextureCreator<WindowContext>,
        font: &Font,
    ) -> Result<(), GameError> {
        // Glyph textures are created up front so failures surface before touching the atlas.
        let mut rendered = Vec::new();
        for c in atlas_chars().filter(|c| *c != ' ') {
            let Some(tile) = self.glyphs.get(&c).copied() else {
                continue;
            };
            let surface = font
                .render_char(c)
                .blended(Color::WHITE)
                .map_err(|e| GameError::Sdl(e.to_string()))?;
            let glyph = texture_creator
                .create_texture_from_surface(&surface)
                .map_err(|e| GameError::Sdl(e.to_string()))?;
            rendered.push((glyph, tile));
        }

        let mut copy_error = None;
        canvas
            .with_texture_canvas(&mut self.texture, |atlas| {
                atlas.set_draw_color(Color::RGBA(0, 0, 0, 0));
                atlas.clear();
                for (glyph, tile) in &rendered {
                    let dest = Rect::new(tile.pos.x as i32, tile.pos.y as i32, tile.size.x, tile.size.y);
                    if let Err(e) = atlas.copy(glyph, None, dest) {
                        copy_error.get_or_insert(e);
                    }
                }
            })
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        match copy_error {
            Some(e) => Err(GameError::Sdl(e)),
            None => Ok(()),
        }
    }

    pub fn glyph(&self, c: char) -> Option<&GlyphTile> {
        self.glyphs.get(&c)
    }
}

/// Draws text out of a [`TtfAtlas`] at a fixed scale.
#[derive(Debug, Clone, Copy)]
pub struct TtfRenderer {
    scale: f32,
}

impl TtfRenderer {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    /// Draws `text` with its top-left corner at `position`.
    pub fn render_text<C: RenderTarget>(
        &self,
        canvas: &mut Canvas<C>,
        atlas: &mut TtfAtlas,
        text: &str,
        position: IVec2,
        color: Color,
    ) -> Result<(), TextureError> {
        if atlas.last_modulation != Some(color) {
            atlas.texture.set_color_mod(color.r, color.g, color.b);
            atlas.texture.set_alpha_mod(color.a);
            atlas.last_modulation = Some(color);
        }

        let mut pen = position.x as f32;
        for c in text.chars() {
            let Some(tile) = atlas.glyphs.get(&c).copied() else {
                pen += self.fallback_advance();
                continue;
            };

            if tile.size.x > 0 && tile.size.y > 0 {
                let src = Rect::new(tile.pos.x as i32, tile.pos.y as i32, tile.size.x, tile.size.y);
                let dest = Rect::new(
                    pen as i32,
                    position.y,
                    (tile.size.x as f32 * self.scale) as u32,
                    (tile.size.y as f32 * self.scale) as u32,
                );
                canvas.copy(&atlas.texture, src, dest).map_err(TextureError::RenderFailed)?;
            }
            pen += tile.advance as f32 * self.scale;
        }

        Ok(())
    }

    /// Draws `text` centered on `center`.
    pub fn render_centered<C: RenderTarget>(
        &self,
        canvas: &mut Canvas<C>,
        atlas: &mut TtfAtlas,
        text: &str,
        center: IVec2,
        color: Color,
    ) -> Result<(), TextureError> {
        let size = self.text_size(atlas, text).as_ivec2();
        self.render_text(canvas, atlas, text, center - size / 2, color)
    }

    pub fn text_width(&self, atlas: &TtfAtlas, text: &str) -> u32 {
        let width: f32 = text
            .chars()
            .map(|c| match atlas.glyph(c) {
                Some(tile) => tile.advance as f32 * self.scale,
                None => self.fallback_advance(),
            })
            .sum();
        width as u32
    }

    pub fn text_height(&self, atlas: &TtfAtlas) -> u32 {
        (atlas.line_height as f32 * self.scale) as u32
    }

    pub fn text_size(&self, atlas: &TtfAtlas, text: &str) -> UVec2 {
        UVec2::new(self.text_width(atlas, text), self.text_height(atlas))
    }

    fn fallback_advance(&self) -> f32 {
        8.0 * self.scale
    }
}
