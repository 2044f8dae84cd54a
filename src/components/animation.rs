//! Walk-cycle animation state.
//!
//! Every actor carries a [`WalkCycle`]: which way it is facing, which of the
//! two walk variants is active and which sprite-sheet column is shown. The
//! [`animation`](crate::systems::animation::animation) system advances it once
//! per tick; [`Sprite::source_rect`](crate::components::sprite::Sprite::source_rect)
//! turns it into the sampled rectangle.

use bevy_ecs::prelude::Component;

/// Seconds a frame stays on screen before the next column is shown.
pub const FRAME_THRESHOLD: f32 = 0.20;

/// Direction an actor is walking, or `Idle` when it stands still.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    MovingDown,
    MovingRight,
    MovingLeft,
    MovingUp,
    #[default]
    Idle,
}

impl Facing {
    pub fn is_moving(self) -> bool {
        self != Facing::Idle
    }
}

#[derive(Debug, Clone, Component)]
pub struct WalkCycle {
    pub facing: Facing,
    /// Last direction walked, `Idle` until the actor first moves.
    pub last_moving: Facing,
    /// Selects one of the two walk variants of the current direction. Always 0 or 1.
    pub animation_key: u8,
    pub frame_column: u32,
    pub elapsed_time: f32,
}

impl Default for WalkCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkCycle {
    pub fn new() -> Self {
        Self {
            facing: Facing::Idle,
            last_moving: Facing::Idle,
            animation_key: 0,
            frame_column: 0,
            elapsed_time: 0.0,
        }
    }

    /// Change facing. Entering `Idle` resets the walk variant once, so the
    /// first variant of the last walked direction is shown until the actor
    /// moves again.
    pub fn set_facing(&mut self, facing: Facing) {
        if facing == self.facing {
            return;
        }
        if facing.is_moving() {
            self.last_moving = facing;
        } else {
            self.animation_key = 0;
        }
        self.facing = facing;
    }

    /// Facing whose rows are sampled. A standing actor keeps showing the
    /// direction it last walked in.
    pub fn row_facing(&self) -> Facing {
        if self.facing.is_moving() {
            self.facing
        } else {
            self.last_moving
        }
    }

    /// Advance the animation clock by `delta` seconds over a sheet with
    /// `columns` frames per row.
    ///
    /// Returns true when a new frame was selected.
    pub fn advance(&mut self, delta: f32, columns: u32) -> bool {
        let columns = columns.max(1);
        self.elapsed_time += delta.max(0.0);
        if self.elapsed_time < FRAME_THRESHOLD {
            return false;
        }

        self.elapsed_time = 0.0;
        self.frame_column += 1;
        if self.facing.is_moving() && self.frame_column >= columns {
            self.animation_key ^= 1;
        }
        self.frame_column %= columns;
        true
    }

    /// Start over from the first column, standing still.
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}
