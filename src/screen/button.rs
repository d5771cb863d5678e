//! Menu buttons and the fixed layout of each screen.

use glam::IVec2;

use crate::constants::{ui, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::systems::Bounds;

/// What clicking a button asks the screen machine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    StartGame,
    HarderGame,
    HowToPlay,
    Back,
    Advance,
    Restart,
    BackToHome,
    Exit,
}

impl MenuAction {
    /// Whether choosing this action restarts the background music loop.
    pub fn restarts_music(self) -> bool {
        matches!(self, MenuAction::Restart | MenuAction::BackToHome)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub bounds: Bounds,
    pub action: MenuAction,
}

impl Button {
    /// A standard-size button, horizontally centered, with its top at `top`.
    pub const fn centered(label: &'static str, top: i32, action: MenuAction) -> Self {
        Self {
            label,
            bounds: Bounds::new(
                SCREEN_WIDTH / 2 - ui::BUTTON_SIZE.x as i32 / 2,
                top,
                ui::BUTTON_SIZE.x,
                ui::BUTTON_SIZE.y,
            ),
            action,
        }
    }

    pub fn contains(&self, point: IVec2) -> bool {
        self.bounds.contains(point)
    }
}

const BUTTON_HEIGHT: i32 = ui::BUTTON_SIZE.y as i32;
const MIDDLE: i32 = SCREEN_HEIGHT / 2;

pub const INTRO_BUTTONS: [Button; 4] = [
    Button::centered("Start Game", MIDDLE - BUTTON_HEIGHT / 2, MenuAction::StartGame),
    Button::centered("Harder Game", MIDDLE + BUTTON_HEIGHT, MenuAction::HarderGame),
    Button::centered("How to Play", MIDDLE + BUTTON_HEIGHT * 5 / 2, MenuAction::HowToPlay),
    Button::centered("Exit", MIDDLE + BUTTON_HEIGHT * 4, MenuAction::Exit),
];

pub const INSTRUCTIONS_BUTTONS: [Button; 1] = [Button::centered("Back", MIDDLE + BUTTON_HEIGHT * 2, MenuAction::Back)];

pub const LEVEL_UP_BUTTONS: [Button; 2] = [
    Button::centered("Advance", MIDDLE - BUTTON_HEIGHT / 2, MenuAction::Advance),
    Button::centered("Exit", MIDDLE + BUTTON_HEIGHT, MenuAction::Exit),
];

pub const GAME_OVER_BUTTONS: [Button; 3] = [
    Button::centered("Restart", MIDDLE - BUTTON_HEIGHT / 2, MenuAction::Restart),
    Button::centered("Back to Home", MIDDLE + BUTTON_HEIGHT, MenuAction::BackToHome),
    Button::centered("Exit", MIDDLE + BUTTON_HEIGHT * 5 / 2, MenuAction::Exit),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_layout() {
        let tops: Vec<i32> = INTRO_BUTTONS.iter().map(|b| b.bounds.top()).collect();
        assert_eq!(tops, vec![275, 350, 425, 500]);
        assert!(INTRO_BUTTONS.iter().all(|b| b.bounds.left() == 300));
    }

    #[test]
    fn test_game_over_layout() {
        let tops: Vec<i32> = GAME_OVER_BUTTONS.iter().map(|b| b.bounds.top()).collect();
        assert_eq!(tops, vec![275, 350, 425]);
        assert_eq!(INSTRUCTIONS_BUTTONS[0].bounds.top(), 400);
    }

    #[test]
    fn test_game_over_scores_sit_above_restart() {
        use crate::constants::ui;

        assert_eq!(ui::HIGH_SCORE_TOP, 200);
        assert_eq!(ui::FINAL_SCORE_TOP, 235);
        assert!(ui::FINAL_SCORE_TOP < GAME_OVER_BUTTONS[0].bounds.top());
    }
}
