use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Top-left corner of an actor's destination rectangle, in screen pixels.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    /// Snap into `[0, screen - size]` on both axes.
    ///
    /// An actor larger than the screen is pinned to 0 on that axis.
    pub fn clamp_to(&mut self, size: Vector2, screen_w: f32, screen_h: f32) {
        let max_x = (screen_w - size.x).max(0.0);
        let max_y = (screen_h - size.y).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
        self.pos.y = self.pos.y.clamp(0.0, max_y);
    }
}
