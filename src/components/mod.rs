//! ECS components for the player simulation.
//!
//! Submodules overview:
//! - [`kinematics`] – mirror of the velocity reported by the physics collaborator
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`player`] – the canonical per-tick player state

pub mod kinematics;
pub mod mapposition;
pub mod player;
