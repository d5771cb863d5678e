//! Asset catalogue and loading.
//!
//! Every asset is read from the `assets/` directory next to the working directory.
//! The set is fixed, so a missing file is a fatal startup error.

use std::fs;
use std::io;
use std::path::PathBuf;

use strum_macros::EnumIter;
use tracing::trace;

use crate::audio::Sound;
use crate::constants::ASSET_DIR;
use crate::error::AssetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Image(Image),
    SoundFile(Sound),
    Font,
}

/// Every image the game draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Image {
    /// Background for the intro screen and for play.
    Forest,
    GameOver,
    Loading,
    Bird,
    Cookie,
    Pillar,
}

impl Asset {
    /// Path of the asset relative to the asset directory.
    pub fn path(&self) -> &'static str {
        match self {
            Asset::Image(image) => match image {
                Image::Forest => "img/forest.jpg",
                Image::GameOver => "img/gameover.jpg",
                Image::Loading => "img/loading.jpg",
                Image::Bird => "img/bird.png",
                Image::Cookie => "img/cookie.png",
                Image::Pillar => "img/pillar.png",
            },
            Asset::SoundFile(sound) => match sound {
                Sound::BackgroundMusic => "sound/background_music.ogg",
                Sound::Hit => "sound/collision.ogg",
                Sound::Collect => "sound/collect.ogg",
                Sound::LevelUp => "sound/level_up.ogg",
                Sound::GameOver => "sound/game_over.ogg",
                Sound::Jump => "sound/jump.ogg",
            },
            Asset::Font => "font/FreeSansBold.ttf",
        }
    }

    /// Full path of the asset on disk.
    pub fn location(&self) -> PathBuf {
        PathBuf::from(ASSET_DIR).join(self.path())
    }

    /// Reads the raw bytes of the asset.
    pub fn get_bytes(&self) -> Result<Vec<u8>, AssetError> {
        let location = self.location();
        trace!(asset = ?self, path = %location.display(), "Reading asset");

        fs::read(&location).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AssetError::NotFound(location.display().to_string()),
            _ => AssetError::Io(e),
        })
    }
}
