//! Collision notifications from the physics collaborator.
//!
//! The physics engine forwards its contact callbacks into the core as
//! [`ContactEvent`] messages. Surfaces carry a closed [`SurfaceTag`], so
//! dispatch is a plain `match`.

use bevy_ecs::message::Message;

/// What the player touched. Carried on the event itself; no string
/// comparison anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceTag {
    Ground,
    Water,
    Hazard,
    /// Shootable power-up carrier. Not handled by this core.
    PowerUp,
    /// Stationary power-up. Not handled by this core.
    StaticPowerUp,
}

/// Opaque handle to a collider owned by the physics collaborator. The core
/// only ever hands it back in pass-through commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColliderHandle(pub u32);

/// One contact callback, mirrored from the physics engine.
#[derive(Message, Debug, Clone, Copy)]
pub enum ContactEvent {
    /// The player is overlapping the surface this tick.
    Stay {
        tag: SurfaceTag,
        /// Whether the physics side saw the player's vertical velocity as
        /// (near) zero at callback time.
        vertical_velocity_zero: bool,
        /// The collider being touched; needed for pass-through platforms.
        collider: ColliderHandle,
    },
    /// The player started overlapping the surface this tick.
    Enter { tag: SurfaceTag },
}
