//! One-shot application commands.
//!
//! Discrete key presses (and the window close button) become [`AppCommand`]s
//! in [`InputState`](crate::resources::input::InputState).
//! [`dispatch_input_commands`](crate::systems::input::dispatch_input_commands)
//! triggers one [`AppCommandEvent`] per command and [`observe_app_command`]
//! applies it: mode changes go to [`GameState`], species cycling to
//! [`SpeciesRoster`], spawn requests to [`SpawnRequests`].
//!
//! Gameplay commands are dropped while the session is paused so the frozen
//! frame stays as it is.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::resources::actorregistry::SpawnRequests;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::species::SpeciesRoster;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppCommand {
    /// Flip between Running and Paused.
    TogglePause,
    /// Leave the main loop.
    Quit,
    /// Switch the player to the next species in the roster.
    NextSpecies,
    /// Switch the player to the previous species in the roster.
    PreviousSpecies,
    /// Append a wandering actor of the current species.
    SpawnActor,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct AppCommandEvent {
    pub command: AppCommand,
}

/// Observer that applies an [`AppCommandEvent`].
pub fn observe_app_command(
    trigger: On<AppCommandEvent>,
    mut state: ResMut<GameState>,
    mut roster: ResMut<SpeciesRoster>,
    mut spawns: ResMut<SpawnRequests>,
) {
    let command = trigger.event().command;
    debug!("AppCommandEvent {:?}", command);

    if let Some((from, to)) = state.apply(command) {
        match to {
            GameStates::Paused => info!("#######  PAUSED   #######"),
            GameStates::Running => info!("#######  RESUMED  #######"),
            GameStates::Quit => info!("Quit requested while {:?}", from),
        }
        return;
    }

    if !state.is_running() {
        debug!("Ignoring {:?} while {:?}", command, state.get());
        return;
    }

    match command {
        AppCommand::NextSpecies => roster.cycle(1),
        AppCommand::PreviousSpecies => roster.cycle(-1),
        AppCommand::SpawnActor => spawns.request(),
        AppCommand::TogglePause | AppCommand::Quit => {}
    }
}
