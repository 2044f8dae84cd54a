//! Random walk for non-player actors.
use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::MoveIntent;
use crate::components::wander::Wander;
use crate::resources::worldtime::WorldTime;

/// Give each wandering actor a new intent whenever its interval elapses.
pub fn wander(mut query: Query<(&mut Wander, &mut MoveIntent)>, time: Res<WorldTime>) {
    for (mut wander, mut intent) in query.iter_mut() {
        if let Some(next) = wander.tick(time.delta) {
            *intent = next;
        }
    }
}
