//! Event and message types crossing the core's boundaries.
//!
//! Inbound messages come from the physics collaborator; outbound command
//! streams go to the physics, presentation, audio, and projectile
//! collaborators over the simulation bridge. Everything is a closed type -
//! no stringly-typed dispatch crosses these seams.
//!
//! Submodules:
//! - [`audio`] – fire-and-forget audio cues
//! - [`contact`] – collision notifications from the physics engine
//! - [`death`] – player death event and its observer
//! - [`physics`] – velocity/impulse/pass-through commands
//! - [`presentation`] – pose triggers, flags, and sprite selection
//! - [`projectile`] – shot spawn requests

pub mod audio;
pub mod contact;
pub mod death;
pub mod physics;
pub mod presentation;
pub mod projectile;
