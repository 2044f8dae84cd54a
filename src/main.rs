//! Critter Walk main entry point.
//!
//! A small 2D sprite-animation demo written in Rust using:
//! - **raylib** for windowing, textures and keyboard input
//! - **bevy_ecs** for the actor data and per-tick systems
//!
//! A character sheet is loaded, the arrow keys (or WASD) walk the character
//! around the window and a four-column walk cycle plays while it moves.
//!
//! # Controls
//!
//! - Arrows / WASD – walk
//! - Space – pause / resume
//! - Tab / Backspace – next / previous species
//! - N – add a wandering critter
//! - Escape – quit
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and the species roster, open the window
//! 2. Load the first sheet and spawn the player
//! 3. Each tick: poll input and apply commands, advance movement and
//!    animation while running, draw
//! 4. Stop once the session reaches the Quit state
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --species fox
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod error;
mod events;
mod game;
mod resources;
mod systems;

use crate::error::AppError;
use crate::events::command::observe_app_command;
use crate::resources::actorregistry::{ActorRegistry, SpawnRequests};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameState;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::species::SpeciesRoster;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation;
use crate::systems::gamestate::state_is_running;
use crate::systems::input::{dispatch_input_commands, player_intent, update_input_state};
use crate::systems::movement::movement;
use crate::systems::render::render_system;
use crate::systems::spawn::spawn_requested_actors;
use crate::systems::species::apply_species_switch;
use crate::systems::time::update_world_time;
use crate::systems::wander::wander;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

/// Critter Walk
#[derive(Parser)]
#[command(version, about = "Walk a sprite-sheet critter around the screen.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Species to start with (defaults to the first in the roster).
    #[arg(long, value_name = "NAME")]
    species: Option<String>,

    /// Write the effective configuration and exit.
    /// Optionally provide a path (default: the --config path).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = GameConfig::with_path(&cli.config);
    if config.config_path.exists() {
        config.load_from_file()?;
    } else {
        info!(
            "No config file at {}, using defaults",
            config.config_path.display()
        );
    }

    // Early-exit: write the configuration and quit (no window needed)
    if let Some(maybe_path) = cli.write_config {
        if let Some(path) = maybe_path {
            config.config_path = path;
        }
        config.save_to_file()?;
        println!("Config written to {}", config.config_path.display());
        return Ok(());
    }

    config.validate()?;

    let mut roster = SpeciesRoster::load(&config.species_path)?;
    if let Some(name) = cli.species.as_deref() {
        roster.select(name).map_err(AppError::Config)?;
    }

    // --------------- Raylib window ---------------
    let (width, height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(width as i32, height as i32)
        .title(&config.title)
        .build();
    if !rl.is_window_ready() {
        return Err(AppError::Init("could not create window".into()));
    }
    rl.set_target_fps(config.target_fps);
    // Escape is a regular command, not raylib's exit key
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: width as i32,
        h: height as i32,
    });
    world.insert_resource(config.rows.clone());
    world.insert_resource(ActorRegistry::with_limit(config.max_actors));
    world.insert_resource(config);
    world.insert_resource(roster);
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(SpawnRequests::default());
    world.insert_resource(TextureStore::new());

    game::spawn_player(&mut world, &mut rl, &thread)?;

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.add_observer(observe_app_command);
    // Ensure the observer is registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            dispatch_input_commands,
            (player_intent, wander, movement, animation)
                .chain()
                .run_if(state_is_running),
            apply_species_switch,
            spawn_requested_actors,
            render_system,
        )
            .chain(),
    );

    update
        .initialize(&mut world)
        .map_err(|e| AppError::Init(format!("failed to initialize schedule: {}", e)))?;

    // --------------- Main loop ---------------
    info!("Entering main loop");
    while !world.resource::<GameState>().is_quit() {
        let now_ms = (world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_time()
            * 1000.0) as u64;
        update_world_time(&mut world, now_ms);

        update.run(&mut world);

        world.clear_trackers();
    }

    // Unload textures while the window still exists
    drop(world.remove_resource::<TextureStore>());
    info!("Bye!");
    Ok(())
}
