//! Movement-intent components.
//!
//! - [`MoveIntent`] – which directions an actor "holds" this tick
//! - [`InputControlled`] – walking speed of an actor
//! - [`Player`] – marks the actor driven by the keyboard
//!
//! The player's intent is copied from
//! [`InputState`](crate::resources::input::InputState) each tick; wandering
//! actors get theirs from [`Wander`](crate::components::wander::Wander). The
//! [`movement`](crate::systems::movement::movement) system reads both the same
//! way.

use bevy_ecs::prelude::Component;

use crate::components::animation::Facing;

/// A single walking direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub fn facing(self) -> Facing {
        match self {
            Direction::Right => Facing::MovingRight,
            Direction::Left => Facing::MovingLeft,
            Direction::Up => Facing::MovingUp,
            Direction::Down => Facing::MovingDown,
        }
    }

    /// Unit step on screen axes (y grows downwards).
    pub fn axis(self) -> (f32, f32) {
        match self {
            Direction::Right => (1.0, 0.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
        }
    }
}

/// Set of held directions for one tick.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub right: bool,
    pub left: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveIntent {
    pub fn only(direction: Direction) -> Self {
        let mut intent = Self::default();
        match direction {
            Direction::Right => intent.right = true,
            Direction::Left => intent.left = true,
            Direction::Up => intent.up = true,
            Direction::Down => intent.down = true,
        }
        intent
    }

    /// The one direction honoured this tick: Right > Left > Up > Down.
    pub fn resolve(&self) -> Option<Direction> {
        if self.right {
            Some(Direction::Right)
        } else if self.left {
            Some(Direction::Left)
        } else if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

/// Walking speed in pixels per second.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    pub speed: f32,
}

impl InputControlled {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

/// Marker for the keyboard-controlled actor (registry index 0).
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;
