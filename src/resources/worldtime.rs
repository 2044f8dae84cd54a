use bevy_ecs::prelude::Resource;

/// Simulation clock, fed from a monotonic millisecond counter.
///
/// `delta` is the time since the previous tick in seconds and is never
/// negative; the first tick has a delta of zero.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub frame_count: u64,
    pub last_ms: Option<u64>,
}

impl WorldTime {
    /// Advance to `now_ms`. A counter going backwards yields a zero delta.
    pub fn tick(&mut self, now_ms: u64) {
        let delta_ms = self
            .last_ms
            .map(|last| now_ms.saturating_sub(last))
            .unwrap_or(0);
        self.last_ms = Some(now_ms);
        self.delta = delta_ms as f32 / 1000.0;
        self.elapsed += self.delta;
        self.frame_count += 1;
    }
}
