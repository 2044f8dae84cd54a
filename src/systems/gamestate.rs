use crate::resources::gamestate::GameState;
use bevy_ecs::prelude::*;

/// Run condition for everything that advances the simulation.
pub fn state_is_running(state: Res<GameState>) -> bool {
    state.is_running()
}
