//! High-level run mode of the session.
//!
//! [`GameState`] is the mode/pause state machine: Running and Paused flip on
//! [`AppCommand::TogglePause`], anything moves to Quit on
//! [`AppCommand::Quit`], and Quit is terminal. Commands reach it through
//! [`observe_app_command`](crate::events::command::observe_app_command).

use bevy_ecs::prelude::Resource;

use crate::events::command::AppCommand;

/// Discrete high-level states the session can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Running,
    Paused,
    Quit,
}

/// Authoritative current state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::Running`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::Running,
        }
    }

    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }

    pub fn is_running(&self) -> bool {
        self.current == GameStates::Running
    }

    pub fn is_quit(&self) -> bool {
        self.current == GameStates::Quit
    }

    /// Feed a command to the state machine.
    ///
    /// Returns `(from, to)` when the state changed. Commands other than pause
    /// and quit never change the mode.
    pub fn apply(&mut self, command: AppCommand) -> Option<(GameStates, GameStates)> {
        let from = self.current;
        let to = match (from, command) {
            (GameStates::Quit, _) => return None,
            (_, AppCommand::Quit) => GameStates::Quit,
            (GameStates::Running, AppCommand::TogglePause) => GameStates::Paused,
            (GameStates::Paused, AppCommand::TogglePause) => GameStates::Running,
            _ => return None,
        };
        self.current = to;
        Some((from, to))
    }
}
