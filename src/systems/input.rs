//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the held directions and pressed commands into
//!   [`InputState`](crate::resources::input::InputState).
//! - [`dispatch_input_commands`] drains the pending commands and triggers an
//!   [`AppCommandEvent`] for each.
//! - [`player_intent`] copies the held directions onto the player.
use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;

use crate::components::inputcontrolled::{MoveIntent, Player};
use crate::events::command::{AppCommand, AppCommandEvent};
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);
    let held = |state: &BoolState| {
        is_key_down(state.key_binding) || state.alt_binding.is_some_and(is_key_down)
    };

    let intent = MoveIntent {
        right: held(&input.direction_right),
        left: held(&input.direction_left),
        up: held(&input.direction_up),
        down: held(&input.direction_down),
    };
    input.set_held(intent);

    let pressed: Vec<AppCommand> = input
        .command_bindings
        .iter()
        .filter(|binding| rl.is_key_pressed(binding.key))
        .map(|binding| binding.command)
        .collect();
    input.pending.extend(pressed);

    if rl.window_should_close() {
        input.push_command(AppCommand::Quit);
    }
}

/// Turn queued one-shot commands into [`AppCommandEvent`]s.
pub fn dispatch_input_commands(mut input: ResMut<InputState>, mut commands: Commands) {
    for command in input.pending.drain(..) {
        commands.trigger(AppCommandEvent { command });
    }
}

/// Copy the held-direction snapshot onto the player's [`MoveIntent`].
pub fn player_intent(input: Res<InputState>, mut query: Query<&mut MoveIntent, With<Player>>) {
    let intent = input.move_intent();
    for mut player_intent in query.iter_mut() {
        *player_intent = intent;
    }
}
