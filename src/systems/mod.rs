//! Per-tick simulation systems.
//!
//! Submodules overview
//! - [`bridge`] – forward outbound command streams to the collaborator channels
//! - [`contact`] – fold contact notifications into the canonical contact state
//! - [`derive`] – walking/grounded state derived from reported velocity
//! - [`input`] – interpret the raw input sample into aim, velocity, and intents
//! - [`presentation`] – map player state to pose signals and sprite selection
//! - [`shooting`] – spawn-offset/direction policy and shot emission
//! - [`time`] – advance simulation time and poll the timer bank

pub mod bridge;
pub mod contact;
pub mod derive;
pub mod input;
pub mod presentation;
pub mod shooting;
pub mod time;
