//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;

/// The title shown in the window decoration.
pub const WINDOW_TITLE: &str = "Skyward Dash";

/// The width of the canvas, in pixels.
pub const SCREEN_WIDTH: i32 = 800;
/// The height of the canvas, in pixels.
pub const SCREEN_HEIGHT: i32 = 600;
/// The size of the canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);

/// Frames per second at a speed multiplier of 1.
pub const BASE_TICK_RATE: u32 = 30;

/// The frame budget on the menu screens.
pub const LOOP_TIME: Duration = Duration::from_nanos(1_000_000_000 / BASE_TICK_RATE as u64);

/// Returns the frame budget for a run at the given speed multiplier.
///
/// A multiplier of zero is treated as one.
pub fn loop_time(multiplier: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / (BASE_TICK_RATE * multiplier.max(1)) as u64)
}

/// Directory (relative to the working directory) that holds the bundled assets.
pub const ASSET_DIR: &str = "assets";

/// Constants for the per-frame kinematics of every entity.
pub mod physics {
    use glam::{IVec2, UVec2};

    /// Added to the bird's vertical velocity every frame.
    pub const GRAVITY: f32 = 1.0;
    /// Magnitude of the upward velocity applied by a jump.
    pub const JUMP_STRENGTH: f32 = 10.0;
    /// Leftward movement of obstacles and power-ups per frame.
    pub const SCROLL_SPEED: i32 = 5;
    /// Leftward movement of missiles per frame.
    pub const MISSILE_SPEED: i32 = 10;

    /// Where the bird's center starts each run.
    pub const BIRD_START_CENTER: IVec2 = IVec2::new(100, super::SCREEN_HEIGHT / 2);
    pub const BIRD_SIZE: UVec2 = UVec2::new(120, 70);
    pub const SMALL_BIRD_SIZE: UVec2 = UVec2::new(90, 50);
    pub const OBSTACLE_SIZE: UVec2 = UVec2::new(140, 300);
    pub const POWERUP_SIZE: UVec2 = UVec2::new(30, 30);
    pub const MISSILE_SIZE: UVec2 = UVec2::new(40, 20);

    /// Vertical clearance between a top and bottom obstacle.
    pub const GAP_SIZE: i32 = 230;

    /// How long a collected power-up keeps the bird small, in milliseconds.
    pub const SHRINK_DURATION_MS: u64 = 5000;

    /// Alpha values above this count as opaque when building collision masks.
    pub const MASK_ALPHA_THRESHOLD: u8 = 127;
}

/// Constants for the obstacle and power-up spawners.
pub mod spawn {
    /// Milliseconds between obstacle pairs at a speed multiplier of 1.
    pub const OBSTACLE_INTERVAL_MS: u64 = 1500;
    /// Milliseconds between power-ups, independent of the speed multiplier.
    pub const POWERUP_INTERVAL_MS: u64 = 8000;
    /// A power-up candidate must be at least this far from every obstacle on both axes.
    pub const POWERUP_CLEARANCE: i32 = 100;
    /// Candidates sampled before a power-up spawn is skipped for the cycle.
    pub const POWERUP_PLACEMENT_ATTEMPTS: usize = 32;

    /// Returns the obstacle interval for a speed multiplier.
    pub fn obstacle_interval_ms(multiplier: u32) -> u64 {
        OBSTACLE_INTERVAL_MS / multiplier.max(1) as u64
    }
}

/// Constants for score progression.
pub mod scoring {
    /// A run ends with a level-up once the score reaches this value.
    pub const LEVEL_UP_SCORE: u32 = 1000;
}

/// Constants for the menu screens and HUD.
pub mod ui {
    use glam::UVec2;
    use sdl2::pixels::Color;

    pub const BUTTON_SIZE: UVec2 = UVec2::new(200, 50);
    pub const BUTTON_COLOR: Color = Color::RGB(0, 0, 255);
    pub const TEXT_COLOR: Color = Color::RGB(255, 255, 255);
    pub const DARK_TEXT_COLOR: Color = Color::RGB(0, 0, 0);
    pub const PLAIN_BACKGROUND: Color = Color::RGB(255, 255, 255);

    /// Point size the glyph atlas is rendered at.
    pub const FONT_SIZE: u16 = 48;
    /// Scale applied to the atlas for ordinary text (a 36pt equivalent).
    pub const BODY_TEXT_SCALE: f32 = 36.0 / FONT_SIZE as f32;
    /// Scale applied to the title on the intro screen (a 45pt equivalent).
    pub const TITLE_TEXT_SCALE: f32 = 45.0 / FONT_SIZE as f32;
    /// Scale applied to the welcome text on the loading screen.
    pub const BANNER_TEXT_SCALE: f32 = 1.0;

    /// How long the loading screen stays up, in milliseconds.
    pub const LOADING_DURATION_MS: u64 = 3000;

    pub const INSTRUCTIONS: [&str; 6] = [
        "How to Play:",
        "1. Press SPACE to jump.",
        "2. Avoid obstacles.",
        "3. Collect cookie to shrink.",
        "4. Survive as long as possible to score points.",
        "5. Keep reaching the score 1000 in order to move to the next level.",
    ];
    /// Vertical distance between instruction lines.
    pub const INSTRUCTION_LINE_SPACING: i32 = 40;
    /// Top of the "High Score" line on the game-over screen.
    pub const HIGH_SCORE_TOP: i32 = super::SCREEN_HEIGHT / 3;
    /// Top of the final score line, between the high score and the Restart button.
    pub const FINAL_SCORE_TOP: i32 = HIGH_SCORE_TOP + 35;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 30 FPS = 33.33ms per frame
        assert_eq!(LOOP_TIME.as_nanos(), 33_333_333);
        assert_eq!(loop_time(1), LOOP_TIME);
    }

    #[test]
    fn test_loop_time_scales_with_multiplier() {
        assert_eq!(loop_time(2).as_nanos(), 16_666_666);
        assert_eq!(loop_time(3).as_nanos(), 11_111_111);
        assert_eq!(loop_time(0), LOOP_TIME);
    }

    #[test]
    fn test_canvas_size() {
        assert_eq!(CANVAS_SIZE, UVec2::new(800, 600));
    }

    #[test]
    fn test_obstacle_interval_scaling() {
        assert_eq!(spawn::obstacle_interval_ms(1), 1500);
        assert_eq!(spawn::obstacle_interval_ms(2), 750);
        assert_eq!(spawn::obstacle_interval_ms(4), 375);
    }

    #[test]
    fn test_gap_fits_on_screen() {
        assert!(physics::GAP_SIZE * 2 < SCREEN_HEIGHT);
    }
}
