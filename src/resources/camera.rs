//! Camera view resource.
//!
//! The core only needs the camera's horizontal center: death-recovery reset
//! clamps the respawn position so the player never reappears ahead of the
//! view. The host updates it as the view scrolls.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct CameraView {
    /// Horizontal center of the view in world units.
    pub x: f32,
}

impl CameraView {
    /// Clamp a respawn x so it stays within the view: anything ahead of the
    /// camera center comes back one unit behind it.
    pub fn clamp_respawn_x(&self, x: f32) -> f32 {
        if x > self.x { self.x - 1.0 } else { x }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respawn_behind_camera_is_kept() {
        let cam = CameraView { x: 10.0 };
        assert_eq!(cam.clamp_respawn_x(4.0), 4.0);
    }

    #[test]
    fn respawn_ahead_of_camera_is_pulled_back() {
        let cam = CameraView { x: 10.0 };
        assert_eq!(cam.clamp_respawn_x(12.0), 9.0);
    }
}
