//! Time update.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame from the monotonic millisecond counter.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance `WorldTime` to `now_ms`.
pub fn update_world_time(world: &mut World, now_ms: u64) {
    world.resource_mut::<WorldTime>().tick(now_ms);
}
