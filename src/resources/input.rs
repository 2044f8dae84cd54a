//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the demo cares about and exposes it
//! via the [`InputState`] resource. It has two halves:
//!
//! - a held-key snapshot of the four walking directions, read continuously for
//!   movement (arrow keys, with WASD as alternates);
//! - a queue of one-shot [`AppCommand`]s produced by discrete key presses and
//!   the window close button, drained once per tick.
use bevy_ecs::prelude::*;
use raylib::prelude::*;
use smallvec::SmallVec;

use crate::components::inputcontrolled::MoveIntent;
use crate::events::command::AppCommand;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
    /// Optional second key for the same action.
    pub alt_binding: Option<KeyboardKey>,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            key_binding: KeyboardKey::KEY_NULL,
            alt_binding: None,
        }
    }
}

impl BoolState {
    fn bound(key: KeyboardKey, alt: Option<KeyboardKey>) -> Self {
        Self {
            active: false,
            key_binding: key,
            alt_binding: alt,
        }
    }
}

/// Key bound to a one-shot command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommandBinding {
    pub key: KeyboardKey,
    pub command: AppCommand,
}

#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_down: BoolState,
    pub direction_left: BoolState,
    pub direction_right: BoolState,
    pub command_bindings: Vec<CommandBinding>,
    /// Commands produced this tick. Keys pressed in the same frame are queued
    /// in `command_bindings` order.
    pub pending: SmallVec<[AppCommand; 4]>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState::bound(KeyboardKey::KEY_UP, Some(KeyboardKey::KEY_W)),
            direction_down: BoolState::bound(KeyboardKey::KEY_DOWN, Some(KeyboardKey::KEY_S)),
            direction_left: BoolState::bound(KeyboardKey::KEY_LEFT, Some(KeyboardKey::KEY_A)),
            direction_right: BoolState::bound(KeyboardKey::KEY_RIGHT, Some(KeyboardKey::KEY_D)),
            command_bindings: vec![
                CommandBinding {
                    key: KeyboardKey::KEY_ESCAPE,
                    command: AppCommand::Quit,
                },
                CommandBinding {
                    key: KeyboardKey::KEY_SPACE,
                    command: AppCommand::TogglePause,
                },
                CommandBinding {
                    key: KeyboardKey::KEY_TAB,
                    command: AppCommand::NextSpecies,
                },
                CommandBinding {
                    key: KeyboardKey::KEY_BACKSPACE,
                    command: AppCommand::PreviousSpecies,
                },
                CommandBinding {
                    key: KeyboardKey::KEY_N,
                    command: AppCommand::SpawnActor,
                },
            ],
            pending: SmallVec::new(),
        }
    }
}

impl InputState {
    /// Held-direction snapshot for movement.
    pub fn move_intent(&self) -> MoveIntent {
        MoveIntent {
            right: self.direction_right.active,
            left: self.direction_left.active,
            up: self.direction_up.active,
            down: self.direction_down.active,
        }
    }

    /// Overwrite the held-direction snapshot.
    pub fn set_held(&mut self, intent: MoveIntent) {
        self.direction_right.active = intent.right;
        self.direction_left.active = intent.left;
        self.direction_up.active = intent.up;
        self.direction_down.active = intent.down;
    }

    pub fn push_command(&mut self, command: AppCommand) {
        self.pending.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
        assert_eq!(bs.alt_binding, None);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert_eq!(input.move_intent(), MoveIntent::default());
        assert!(input.pending.is_empty());
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.direction_up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.direction_up.alt_binding, Some(KeyboardKey::KEY_W));
        assert_eq!(input.direction_right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.direction_right.alt_binding, Some(KeyboardKey::KEY_D));

        let command_for = |key| {
            input
                .command_bindings
                .iter()
                .find(|b| b.key == key)
                .map(|b| b.command)
        };
        assert_eq!(command_for(KeyboardKey::KEY_ESCAPE), Some(AppCommand::Quit));
        assert_eq!(command_for(KeyboardKey::KEY_SPACE), Some(AppCommand::TogglePause));
        assert_eq!(command_for(KeyboardKey::KEY_TAB), Some(AppCommand::NextSpecies));
    }

    #[test]
    fn test_same_frame_commands_follow_binding_order() {
        let input = InputState::default();
        let order: Vec<AppCommand> = input.command_bindings.iter().map(|b| b.command).collect();
        assert_eq!(
            order,
            vec![
                AppCommand::Quit,
                AppCommand::TogglePause,
                AppCommand::NextSpecies,
                AppCommand::PreviousSpecies,
                AppCommand::SpawnActor,
            ]
        );
    }

    #[test]
    fn test_set_held_round_trips_snapshot() {
        let mut input = InputState::default();
        let intent = MoveIntent {
            right: true,
            up: true,
            ..Default::default()
        };
        input.set_held(intent);
        assert_eq!(input.move_intent(), intent);
    }
}
