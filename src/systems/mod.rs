//! Systems.
//!
//! Submodules overview
//! - [`animation`] – advance walk cycles
//! - [`gamestate`] – run conditions on the Running/Paused/Quit state
//! - [`input`] – read hardware input, dispatch commands, drive the player
//! - [`movement`] – resolve held directions into clamped movement
//! - [`render`] – draw actors using Raylib
//! - [`spawn`] – append wandering actors on request
//! - [`species`] – swap the player's sprite sheet
//! - [`time`] – update simulation time and delta
//! - [`wander`] – random intents for non-player actors

pub mod animation;
pub mod gamestate;
pub mod input;
pub mod movement;
pub mod render;
pub mod spawn;
pub mod species;
pub mod time;
pub mod wander;
