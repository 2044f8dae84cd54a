//! Screen size resource.
//!
//! Stores the viewport dimensions in pixels. Movement clamps every actor into
//! this rectangle; the spawn system picks random positions inside it.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn as_f32(&self) -> (f32, f32) {
        (self.w as f32, self.h as f32)
    }
}
