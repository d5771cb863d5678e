//! Skyward Dash game library crate.

pub mod app;
pub mod asset;
pub mod audio;
pub mod constants;
pub mod context;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod input;
pub mod platform;
pub mod screen;
pub mod systems;
pub mod texture;
