//! Event types and observers.
//!
//! Submodules:
//! - [`command`] – one-shot application commands (pause, quit, species, spawn)
//!   and the observer applying them
pub mod command;
