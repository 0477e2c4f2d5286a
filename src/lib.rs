//! Run-and-gun player simulation core.
//!
//! Resolves per-frame player state for a 2D side-scroller - locomotion,
//! environment contact, and combat posture - into physics commands, a
//! consistent animation pose, and projectile spawn parameters. Rendering,
//! physics integration, audio playback, and projectile motion are external
//! collaborators reached through typed one-way channels; see
//! [`sim::Simulation`] for the wiring seam.

pub mod components;
pub mod events;
pub mod resources;
pub mod sim;
pub mod systems;
