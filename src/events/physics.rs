//! Commands sent to the physics collaborator.

use bevy_ecs::message::Message;
use glam::Vec2;

use crate::events::contact::ColliderHandle;

/// One-way command stream from the core to the physics engine.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum PhysicsCmd {
    /// Replace the player's velocity.
    SetVelocity { vx: f32, vy: f32 },
    /// Add an instantaneous impulse to the player.
    ApplyImpulse { vx: f32, vy: f32 },
    /// Make a specific collider non-solid (or solid again) so the player
    /// can drop through one-way platforms.
    SetColliderPassThrough {
        collider: ColliderHandle,
        enabled: bool,
    },
}

impl PhysicsCmd {
    pub fn set_velocity(v: Vec2) -> Self {
        PhysicsCmd::SetVelocity { vx: v.x, vy: v.y }
    }

    pub fn apply_impulse(v: Vec2) -> Self {
        PhysicsCmd::ApplyImpulse { vx: v.x, vy: v.y }
    }
}
