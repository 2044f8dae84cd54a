//! ECS components for actors.
//!
//! Submodules overview:
//! - [`animation`] – facing and walk-cycle state of a sprite-sheet animation
//! - [`inputcontrolled`] – held directions, walking speed, player marker
//! - [`mapposition`] – top-left screen position and viewport clamping
//! - [`sprite`] – sheet geometry and source/destination rectangles
//! - [`wander`] – random walk for actors that are not the player

pub mod animation;
pub mod inputcontrolled;
pub mod mapposition;
pub mod sprite;
pub mod wander;
