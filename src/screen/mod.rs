//! The screen state machine.
//!
//! A [`Screen`] is pure data. The app's driver loop feeds it clicks and elapsed
//! time, and applies whatever [`Flow`] comes back.

use std::time::Duration;

use glam::IVec2;
use tracing::debug;

use crate::audio::Sound;
use crate::constants::{loop_time, ui, LOOP_TIME};
use crate::systems::{AudioEvent, RunOutcome};

pub mod button;
pub mod render;

pub use button::{Button, MenuAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading { elapsed_ms: u64 },
    Intro,
    Instructions,
    Playing { speed: u32 },
    LevelUp { speed: u32 },
    GameOver { score: u32 },
}

/// What the driver loop should do after handling a frame's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Stay,
    Goto(Screen),
    Exit,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Loading { elapsed_ms: 0 }
    }
}

impl Screen {
    /// The buttons on this screen, in layout order.
    pub fn buttons(&self) -> &'static [Button] {
        match self {
            Screen::Intro => &button::INTRO_BUTTONS,
            Screen::Instructions => &button::INSTRUCTIONS_BUTTONS,
            Screen::LevelUp { .. } => &button::LEVEL_UP_BUTTONS,
            Screen::GameOver { .. } => &button::GAME_OVER_BUTTONS,
            Screen::Loading { .. } | Screen::Playing { .. } => &[],
        }
    }

    pub fn button_at(&self, point: IVec2) -> Option<&'static Button> {
        self.buttons().iter().find(|button| button.contains(point))
    }

    /// Handles a left click at `point`.
    pub fn click(&self, point: IVec2) -> Flow {
        match self.button_at(point) {
            Some(button) => {
                debug!(screen = ?self, label = button.label, "Button clicked");
                self.handle_action(button.action)
            }
            None => Flow::Stay,
        }
    }

    /// Applies a menu action. Actions with no button on this screen are ignored.
    pub fn handle_action(&self, action: MenuAction) -> Flow {
        if !self.buttons().iter().any(|button| button.action == action) {
            return Flow::Stay;
        }

        match (self, action) {
            (_, MenuAction::Exit) => Flow::Exit,
            (Screen::Intro, MenuAction::StartGame) => Flow::Goto(Screen::Playing { speed: 1 }),
            (Screen::Intro, MenuAction::HarderGame) => Flow::Goto(Screen::Playing { speed: 2 }),
            (Screen::Intro, MenuAction::HowToPlay) => Flow::Goto(Screen::Instructions),
            (Screen::Instructions, MenuAction::Back) => Flow::Goto(Screen::Intro),
            (Screen::LevelUp { speed }, MenuAction::Advance) => Flow::Goto(Screen::Playing { speed: speed + 1 }),
            (Screen::GameOver { .. }, MenuAction::Restart) => Flow::Goto(Screen::Playing { speed: 1 }),
            (Screen::GameOver { .. }, MenuAction::BackToHome) => Flow::Goto(Screen::Intro),
            _ => Flow::Stay,
        }
    }

    /// Advances the loading timer. Other screens are unaffected.
    pub fn advance_loading(&self, dt_ms: u64) -> Flow {
        match *self {
            Screen::Loading { elapsed_ms } => {
                let elapsed_ms = elapsed_ms + dt_ms;
                if elapsed_ms > ui::LOADING_DURATION_MS {
                    Flow::Goto(Screen::Intro)
                } else {
                    Flow::Goto(Screen::Loading { elapsed_ms })
                }
            }
            _ => Flow::Stay,
        }
    }

    /// The screen that follows a finished run.
    pub fn after_run(&self, outcome: RunOutcome, score: u32) -> Flow {
        match (*self, outcome) {
            (Screen::Playing { speed }, RunOutcome::LevelUp) => Flow::Goto(Screen::LevelUp { speed }),
            (Screen::Playing { .. }, RunOutcome::Collided) => Flow::Goto(Screen::GameOver { score }),
            _ => Flow::Stay,
        }
    }

    /// Sounds to play when moving from `self` to `next`, given the action that caused it.
    pub fn transition_sounds(&self, next: &Screen, action: Option<MenuAction>) -> Vec<AudioEvent> {
        let mut sounds = Vec::new();
        if matches!(self, Screen::Loading { .. }) && *next == Screen::Intro {
            sounds.push(AudioEvent::PlayLooped(Sound::BackgroundMusic));
        }
        if action.is_some_and(MenuAction::restarts_music) {
            sounds.push(AudioEvent::PlayLooped(Sound::BackgroundMusic));
        }
        match next {
            Screen::LevelUp { .. } => sounds.push(AudioEvent::Play(Sound::LevelUp)),
            Screen::GameOver { .. } => sounds.push(AudioEvent::Play(Sound::GameOver)),
            _ => {}
        }
        sounds
    }

    /// The frame budget while this screen is shown.
    pub fn loop_time(&self) -> Duration {
        match self {
            Screen::Playing { speed } => loop_time(*speed),
            _ => LOOP_TIME,
        }
    }
}
