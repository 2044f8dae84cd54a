use bevy_ecs::prelude::Component;

use crate::components::inputcontrolled::{Direction, MoveIntent};

/// Random walk for actors that are not the player.
///
/// Every `interval` seconds a new intent is drawn: one of the four
/// directions, or standing still.
#[derive(Component, Clone, Debug)]
pub struct Wander {
    pub interval: f32,
    pub elapsed: f32,
    rng: fastrand::Rng,
}

impl Wander {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            rng: fastrand::Rng::new(),
        }
    }

    pub fn with_seed(interval: f32, seed: u64) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Advance the timer; returns a fresh intent when the interval elapsed.
    pub fn tick(&mut self, delta: f32) -> Option<MoveIntent> {
        self.elapsed += delta.max(0.0);
        if self.elapsed < self.interval {
            return None;
        }
        self.elapsed = 0.0;
        Some(self.pick())
    }

    fn pick(&mut self) -> MoveIntent {
        match self.rng.u8(0..5) {
            0 => MoveIntent::only(Direction::Right),
            1 => MoveIntent::only(Direction::Left),
            2 => MoveIntent::only(Direction::Up),
            3 => MoveIntent::only(Direction::Down),
            _ => MoveIntent::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_new_intent_before_interval() {
        let mut wander = Wander::with_seed(1.0, 7);
        assert!(wander.tick(0.4).is_none());
        assert!(wander.tick(0.4).is_none());
        assert!((wander.elapsed - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_new_intent_after_interval_resets_timer() {
        let mut wander = Wander::with_seed(1.0, 7);
        let intent = wander.tick(1.2);
        assert!(intent.is_some());
        assert_eq!(wander.elapsed, 0.0);
    }

    #[test]
    fn test_picked_intent_holds_at_most_one_direction() {
        let mut wander = Wander::with_seed(0.0, 42);
        for _ in 0..50 {
            let intent = wander.tick(0.0).unwrap();
            let held = [intent.right, intent.left, intent.up, intent.down]
                .iter()
                .filter(|h| **h)
                .count();
            assert!(held <= 1);
        }
    }
}
