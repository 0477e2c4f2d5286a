//! World-space position (pivot) of an entity.
//!
//! The physics collaborator owns authoritative motion; this component is the
//! core's view of where the player is, updated by velocity reports from the
//! host and directly by the few operations that teleport the player (the
//! shoreline snap at the end of a water exit, and death-recovery reset).

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        MapPosition {
            pos: Vec2::new(x, y),
        }
    }
}
