//! ECS resources made available to systems.
//!
//! Overview
//! - `camera` – horizontal camera center used by death-recovery reset
//! - `config` – simulation tunables with INI overrides
//! - `input` – per-tick raw input sample and derived intents
//! - `timers` – restartable countdown timers polled once per tick
//! - `worldtime` – simulation time and delta

pub mod camera;
pub mod config;
pub mod input;
pub mod timers;
pub mod worldtime;
