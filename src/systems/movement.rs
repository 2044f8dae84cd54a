//! Movement and direction resolution.
//!
//! Each tick every actor honours at most one held direction (Right > Left >
//! Up > Down), moves `speed * delta` along it, and is snapped back inside the
//! viewport. With nothing held the actor turns `Idle` and stays put.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animation::{Facing, WalkCycle};
use crate::components::inputcontrolled::{InputControlled, MoveIntent};
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Resolve `intent` for one tick: returns the new facing and the position
/// delta in pixels.
pub fn resolve_step(intent: &MoveIntent, speed: f32, delta: f32) -> (Facing, Vector2) {
    match intent.resolve() {
        Some(direction) => {
            let distance = speed * delta.max(0.0);
            let (ax, ay) = direction.axis();
            (
                direction.facing(),
                Vector2 {
                    x: ax * distance,
                    y: ay * distance,
                },
            )
        }
        None => (Facing::Idle, Vector2 { x: 0.0, y: 0.0 }),
    }
}

pub fn movement(
    mut query: Query<(
        &MoveIntent,
        &InputControlled,
        &Sprite,
        &mut MapPosition,
        &mut WalkCycle,
    )>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
) {
    let (screen_w, screen_h) = screen.as_f32();
    for (intent, controlled, sprite, mut position, mut cycle) in query.iter_mut() {
        let (facing, step) = resolve_step(intent, controlled.speed, time.delta);
        cycle.set_facing(facing);
        position.pos = position.pos + step;
        position.clamp_to(
            Vector2 {
                x: sprite.width,
                y: sprite.height,
            },
            screen_w,
            screen_h,
        );
    }
}
