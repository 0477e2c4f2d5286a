//! Mirror of the velocity the physics collaborator reports.
//!
//! The physics engine is external: the core sends it velocity and impulse
//! commands and receives contact notifications plus a per-tick velocity
//! report. [`KinematicMirror`] holds that report so derived state (walking,
//! grounded) can be computed without reaching outside the world.
//!
//! Commands the core issues optimistically update the mirror in the same
//! tick (walk velocity, jump impulse, emergence zeroing) so the derived
//! state does not lag the command by a frame.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Velocities below this magnitude count as zero. Exact comparison with
/// 0.0 does not survive variable tick timing.
pub const VELOCITY_EPSILON: f32 = 1e-4;

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct KinematicMirror {
    pub velocity: Vec2,
}

impl KinematicMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical_near_zero(&self) -> bool {
        self.velocity.y.abs() < VELOCITY_EPSILON
    }

    pub fn horizontal_near_zero(&self) -> bool {
        self.velocity.x.abs() < VELOCITY_EPSILON
    }

    /// Accumulate an impulse into the mirrored velocity.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_zero_thresholds() {
        let mut k = KinematicMirror::new();
        assert!(k.vertical_near_zero());
        assert!(k.horizontal_near_zero());
        k.velocity = Vec2::new(0.00005, -0.00005);
        assert!(k.vertical_near_zero());
        assert!(k.horizontal_near_zero());
        k.velocity = Vec2::new(3.0, -0.5);
        assert!(!k.vertical_near_zero());
        assert!(!k.horizontal_near_zero());
    }

    #[test]
    fn impulse_accumulates() {
        let mut k = KinematicMirror::new();
        k.apply_impulse(Vec2::new(0.0, 6.0));
        k.apply_impulse(Vec2::new(1.0, 0.0));
        assert_eq!(k.velocity, Vec2::new(1.0, 6.0));
    }
}
