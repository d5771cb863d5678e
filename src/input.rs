//! Translation of raw SDL events into the handful of inputs the game reacts to.

use glam::IVec2;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The window was closed.
    Quit,
    Jump,
    /// Left mouse button pressed at a canvas position.
    Click(IVec2),
    FocusGained,
    FocusLost,
}

/// Inputs collected in a single frame. Rarely more than a couple.
pub type FrameInputs = SmallVec<[InputEvent; 4]>;

/// Maps an SDL event to an input, if the game cares about it.
///
/// Held-key repeats are ignored, so one press is one jump.
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(Keycode::Space),
            repeat: false,
            ..
        } => Some(InputEvent::Jump),
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            x,
            y,
            ..
        } => Some(InputEvent::Click(IVec2::new(*x, *y))),
        Event::Window { win_event, .. } => match win_event {
            WindowEvent::FocusGained => Some(InputEvent::FocusGained),
            WindowEvent::FocusLost => Some(InputEvent::FocusLost),
            _ => None,
        },
        _ => None,
    }
}

/// Drains a batch of SDL events into the inputs the game reacts to.
pub fn collect<'a>(events: impl IntoIterator<Item = &'a Event>) -> FrameInputs {
    events.into_iter().filter_map(translate).collect()
}
