//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: configuration, run mode, input state,
//! timing, loaded textures and the actor registry.
//!
//! Overview
//! - `actorregistry` – ordered actor list, stable ids and spawn requests
//! - `gameconfig` – settings loaded from `config.ini`
//! - `gamestate` – Running/Paused/Quit state machine
//! - `input` – per-frame held directions and pending one-shot commands
//! - `rowlayout` – which sheet row shows which pose
//! - `screensize` – viewport dimensions in pixels
//! - `species` – switchable sprite sheets
//! - `texturestore` – one loaded texture per actor
//! - `worldtime` – simulation time and delta
pub mod actorregistry;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod rowlayout;
pub mod screensize;
pub mod species;
pub mod texturestore;
pub mod worldtime;
