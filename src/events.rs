use bevy_ecs::prelude::*;

/// Player intents fed into a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Jump,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}
