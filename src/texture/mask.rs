//! Per-pixel collision masks.
//!
//! A mask records which pixels of a sprite are opaque. Two sprites collide when
//! their masks share a set pixel after accounting for the sprites' relative offset.

use glam::{IVec2, UVec2};
use sdl2::pixels::PixelFormatEnum;
use sdl2::surface::SurfaceRef;

use crate::error::TextureError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    size: UVec2,
    bits: Vec<bool>,
}

impl Mask {
    /// A mask with no opaque pixels.
    pub fn new(size: UVec2) -> Self {
        Self {
            size,
            bits: vec![false; (size.x * size.y) as usize],
        }
    }

    /// A mask with every pixel opaque.
    pub fn filled(size: UVec2) -> Self {
        Self {
            size,
            bits: vec![true; (size.x * size.y) as usize],
        }
    }

    /// Builds a mask by evaluating `opaque` at every pixel.
    pub fn from_fn(size: UVec2, mut opaque: impl FnMut(u32, u32) -> bool) -> Self {
        let mut bits = Vec::with_capacity((size.x * size.y) as usize);
        for y in 0..size.y {
            for x in 0..size.x {
                bits.push(opaque(x, y));
            }
        }
        Self { size, bits }
    }

    /// Builds a mask from an ARGB8888 surface, treating alpha above `threshold` as opaque.
    pub fn from_surface(surface: &SurfaceRef, threshold: u8) -> Result<Self, TextureError> {
        if surface.pixel_format_enum() != PixelFormatEnum::ARGB8888 {
            return Err(TextureError::LoadFailed(format!(
                "Mask source must be ARGB8888, got {:?}",
                surface.pixel_format_enum()
            )));
        }

        let size = UVec2::new(surface.width(), surface.height());
        let pitch = surface.pitch() as usize;
        let mask = surface.with_lock(|pixels| {
            Self::from_fn(size, |x, y| {
                let offset = y as usize * pitch + x as usize * 4;
                let pixel = u32::from_ne_bytes([pixels[offset], pixels[offset + 1], pixels[offset + 2], pixels[offset + 3]]);
                (pixel >> 24) as u8 > threshold
            })
        });

        Ok(mask)
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    /// Returns whether the pixel is opaque; pixels outside the mask are transparent.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.size.x as i32 || y >= self.size.y as i32 {
            return false;
        }
        self.bits[(y as u32 * self.size.x + x as u32) as usize]
    }

    /// Number of opaque pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|bit| **bit).count()
    }

    /// Finds the first pixel (in this mask's coordinates) that is opaque in both masks
    /// when `other` is placed at `offset` relative to this mask's top-left corner.
    pub fn overlap(&self, other: &Mask, offset: IVec2) -> Option<IVec2> {
        let start_x = offset.x.max(0);
        let start_y = offset.y.max(0);
        let end_x = (offset.x + other.size.x as i32).min(self.size.x as i32);
        let end_y = (offset.y + other.size.y as i32).min(self.size.y as i32);

        for y in start_y..end_y {
            for x in start_x..end_x {
                if self.get(x, y) && other.get(x - offset.x, y - offset.y) {
                    return Some(IVec2::new(x, y));
                }
            }
        }

        None
    }

    pub fn overlaps(&self, other: &Mask, offset: IVec2) -> bool {
        self.overlap(other, offset).is_some()
    }
}
