//! Projectile spawn requests.
//!
//! The core decides where a shot appears and which way it travels; the
//! projectile collaborator owns everything after that (motion, visuals,
//! collider sizing per weapon kind, despawn at end of life).

use bevy_ecs::message::Message;
use glam::Vec2;

use crate::components::player::Weapon;

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct SpawnShot {
    /// Spawn point relative to the player pivot, already mirrored for the
    /// current facing direction.
    pub offset: Vec2,
    /// Initial travel direction, components in {-1, 0, 1}.
    pub direction: Vec2,
    /// World units per second.
    pub speed: f32,
    pub damage: f32,
    /// Seconds before the collaborator despawns the projectile.
    pub lifetime: f32,
    pub kind: Weapon,
}
