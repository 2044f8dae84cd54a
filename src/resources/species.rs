//! Species roster.
//!
//! A species is a named sprite sheet. The roster is read from a JSON file:
//!
//! ```json
//! [
//!   { "name": "cat", "sheet": "./assets/textures/cat.png" },
//!   { "name": "fox", "sheet": "./assets/textures/fox.png" }
//! ]
//! ```
//!
//! Cycling the roster only marks a switch as pending;
//! [`apply_species_switch`](crate::systems::species::apply_species_switch)
//! loads the sheet and swaps it on the player.

use bevy_ecs::prelude::Resource;
use log::info;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Species {
    pub name: String,
    pub sheet: PathBuf,
}

#[derive(Resource, Debug, Clone)]
pub struct SpeciesRoster {
    species: Vec<Species>,
    current: usize,
    pending_switch: bool,
}

impl SpeciesRoster {
    /// Build a roster from a non-empty list.
    pub fn new(species: Vec<Species>) -> Result<Self, String> {
        if species.is_empty() {
            return Err("species roster is empty".to_string());
        }
        Ok(Self {
            species,
            current: 0,
            pending_switch: false,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        let species: Vec<Species> = serde_json::from_str(text).map_err(|e| e.to_string())?;
        Self::new(species)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| AppError::asset(path, e))?;
        let roster = Self::from_json(&text).map_err(|e| AppError::asset(path, e))?;
        info!(
            "Loaded {} species from {}",
            roster.species.len(),
            path.display()
        );
        Ok(roster)
    }

    pub fn current(&self) -> &Species {
        &self.species[self.current]
    }

    /// Make the species called `name` current, without requesting a switch.
    pub fn select(&mut self, name: &str) -> Result<(), String> {
        let index = self
            .species
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| format!("unknown species '{}'", name))?;
        self.current = index;
        Ok(())
    }

    /// Move `step` entries along the roster, wrapping in both directions,
    /// and mark a switch as pending.
    pub fn cycle(&mut self, step: isize) {
        let len = self.species.len() as isize;
        self.current = (self.current as isize + step).rem_euclid(len) as usize;
        self.pending_switch = true;
    }

    /// Consume the pending-switch flag.
    pub fn take_pending_switch(&mut self) -> bool {
        std::mem::take(&mut self.pending_switch)
    }
}
