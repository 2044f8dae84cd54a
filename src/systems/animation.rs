//! Animation system.
//!
//! [`animation`] advances every actor's [`WalkCycle`] by the tick delta. The
//! frame column steps every [`FRAME_THRESHOLD`](crate::components::animation::FRAME_THRESHOLD)
//! seconds; a moving actor flips to its other walk variant each time the
//! column wraps. The sampled rectangle is derived at render time from the
//! cycle and the [`RowLayout`](crate::resources::rowlayout::RowLayout).

use bevy_ecs::prelude::*;
use log::trace;

use crate::components::animation::WalkCycle;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback.
///
/// Contract
/// - Reads [`WorldTime`] for the delta.
/// - Mutates [`WalkCycle`] only; the sheet geometry bounds the column.
pub fn animation(mut query: Query<(&mut WalkCycle, &Sprite)>, time: Res<WorldTime>) {
    for (mut cycle, sprite) in query.iter_mut() {
        if cycle.advance(time.delta, sprite.sheet.columns) {
            trace!(
                "{} -> column {} key {} ({:?})",
                sprite.tex_key, cycle.frame_column, cycle.animation_key, cycle.facing
            );
        }
    }
}
