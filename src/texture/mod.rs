//! Image, glyph and mask loading.

pub mod mask;
pub mod sprites;
pub mod ttf;
