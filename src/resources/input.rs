//! Per-tick raw input resource.
//!
//! The host samples its input device once per tick and hands the core an
//! [`InputSample`]: two axis values plus the down-edges of the jump and fire
//! keys. Edge detection is the host's job; the core treats `jump_pressed`
//! and `fire_pressed` as true for exactly the tick of the key-down.
//!
//! Axis values outside [-1, 1] are clamped by the input interpreter, never
//! rejected.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Raw input for a single tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSample {
    /// Horizontal axis, nominally in [-1, 1]. Positive is +x.
    pub horizontal: f32,
    /// Vertical axis, nominally in [-1, 1]. Positive is up.
    pub vertical: f32,
    /// Jump key went down this tick.
    #[serde(default)]
    pub jump_pressed: bool,
    /// Fire key went down this tick.
    #[serde(default)]
    pub fire_pressed: bool,
}

impl InputSample {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn walk(axis: f32) -> Self {
        InputSample {
            horizontal: axis,
            ..Self::default()
        }
    }

    pub fn fire() -> Self {
        InputSample {
            fire_pressed: true,
            ..Self::default()
        }
    }
}

/// Per-tick intents the input interpreter derives and downstream systems
/// consume. Rewritten from scratch every tick.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Intents {
    /// A projectile spawn was requested this tick.
    pub fire: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sample_is_idle() {
        let s = InputSample::default();
        assert_eq!(s.horizontal, 0.0);
        assert_eq!(s.vertical, 0.0);
        assert!(!s.jump_pressed);
        assert!(!s.fire_pressed);
    }

    #[test]
    fn sample_roundtrips_through_json() {
        let s = InputSample {
            horizontal: -1.0,
            vertical: 1.0,
            jump_pressed: true,
            fire_pressed: false,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: InputSample = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
