//! Simulation configuration resource.
//!
//! All tunables of the player core live here with compile-time defaults and
//! can be overridden from an INI file. Missing keys keep their defaults;
//! out-of-range values are clamped, never rejected.
//!
//! # Configuration File Format
//!
//! ```ini
//! [player]
//! walk_speed = 4.0
//! jump_impulse = 6.0
//!
//! [shot]
//! speed = 10.0
//! damage = 10.0
//! lifetime = 2.0
//!
//! [timers]
//! pass_through = 0.5
//! water_exit = 0.1
//! pose_hold = 0.6
//! straight_cooldown = 1.5
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WALK_SPEED: f32 = 4.0;
const WALK_SPEED_MIN: f32 = 2.0;
const WALK_SPEED_MAX: f32 = 6.0;
const DEFAULT_JUMP_IMPULSE: f32 = 6.0;
const DEFAULT_SHOT_SPEED: f32 = 10.0;
const DEFAULT_SHOT_DAMAGE: f32 = 10.0;
const DEFAULT_SHOT_LIFETIME: f32 = 2.0;
const DEFAULT_PASS_THROUGH_SECS: f32 = 0.5;
const DEFAULT_WATER_EXIT_SECS: f32 = 0.1;
const DEFAULT_POSE_HOLD_SECS: f32 = 0.6;
const DEFAULT_STRAIGHT_COOLDOWN_SECS: f32 = 1.5;
const DEFAULT_CONFIG_PATH: &str = "./runngun.ini";

/// Where the player snaps to when finishing a water exit: a fixed x nudge
/// forward and an absolute shoreline height.
pub const SHORE_SNAP_DX: f32 = 0.25;
pub const SHORE_SNAP_Y: f32 = -4.16;

/// Height the player respawns at after death recovery.
pub const RESPAWN_Y: f32 = 2.0;

/// Player simulation tunables.
#[derive(Resource, Debug, Clone)]
pub struct SimConfig {
    /// Horizontal walk speed in world units per second. Clamped to [2, 6].
    pub walk_speed: f32,
    /// Upward impulse applied on a jump.
    pub jump_impulse: f32,
    /// Base projectile speed before the per-player modifier.
    pub shot_speed: f32,
    /// Damage stamped on every spawn request.
    pub shot_damage: f32,
    /// Seconds a projectile lives before the collaborator despawns it.
    pub shot_lifetime: f32,
    /// How long a dropped-through platform stays non-solid.
    pub pass_through_secs: f32,
    /// Delay between grabbing the shore and snapping out of the water.
    pub water_exit_secs: f32,
    /// How long a shot pose is held before reverting.
    pub pose_hold_secs: f32,
    /// How long the straight-lane recoil pose outlasts the last shot.
    pub straight_cooldown_secs: f32,
    /// Path of the INI file used by [`SimConfig::load_from_file`].
    pub config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    /// Create a configuration with the built-in defaults.
    pub fn new() -> Self {
        Self {
            walk_speed: DEFAULT_WALK_SPEED,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            shot_speed: DEFAULT_SHOT_SPEED,
            shot_damage: DEFAULT_SHOT_DAMAGE,
            shot_lifetime: DEFAULT_SHOT_LIFETIME,
            pass_through_secs: DEFAULT_PASS_THROUGH_SECS,
            water_exit_secs: DEFAULT_WATER_EXIT_SECS,
            pose_hold_secs: DEFAULT_POSE_HOLD_SECS,
            straight_cooldown_secs: DEFAULT_STRAIGHT_COOLDOWN_SECS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration that will load from a custom file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Set the walk speed, clamped to the valid range.
    pub fn set_walk_speed(&mut self, speed: f32) {
        self.walk_speed = speed.clamp(WALK_SPEED_MIN, WALK_SPEED_MAX);
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [player] section
        if let Some(speed) = config.getfloat("player", "walk_speed").ok().flatten() {
            self.set_walk_speed(speed as f32);
        }
        if let Some(impulse) = config.getfloat("player", "jump_impulse").ok().flatten() {
            self.jump_impulse = impulse as f32;
        }

        // [shot] section
        if let Some(speed) = config.getfloat("shot", "speed").ok().flatten() {
            self.shot_speed = speed as f32;
        }
        if let Some(damage) = config.getfloat("shot", "damage").ok().flatten() {
            self.shot_damage = damage as f32;
        }
        if let Some(lifetime) = config.getfloat("shot", "lifetime").ok().flatten() {
            self.shot_lifetime = lifetime as f32;
        }

        // [timers] section
        if let Some(secs) = config.getfloat("timers", "pass_through").ok().flatten() {
            self.pass_through_secs = secs as f32;
        }
        if let Some(secs) = config.getfloat("timers", "water_exit").ok().flatten() {
            self.water_exit_secs = secs as f32;
        }
        if let Some(secs) = config.getfloat("timers", "pose_hold").ok().flatten() {
            self.pose_hold_secs = secs as f32;
        }
        if let Some(secs) = config
            .getfloat("timers", "straight_cooldown")
            .ok()
            .flatten()
        {
            self.straight_cooldown_secs = secs as f32;
        }

        info!(
            "Loaded config: walk_speed={}, shot_speed={}, timers=({}, {}, {}, {})",
            self.walk_speed,
            self.shot_speed,
            self.pass_through_secs,
            self.water_exit_secs,
            self.pose_hold_secs,
            self.straight_cooldown_secs
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = SimConfig::new();
        assert_eq!(cfg.shot_speed, 10.0);
        assert_eq!(cfg.shot_damage, 10.0);
        assert_eq!(cfg.shot_lifetime, 2.0);
        assert_eq!(cfg.pass_through_secs, 0.5);
        assert_eq!(cfg.water_exit_secs, 0.1);
        assert_eq!(cfg.pose_hold_secs, 0.6);
        assert_eq!(cfg.straight_cooldown_secs, 1.5);
    }

    #[test]
    fn walk_speed_is_clamped() {
        let mut cfg = SimConfig::new();
        cfg.set_walk_speed(0.5);
        assert_eq!(cfg.walk_speed, 2.0);
        cfg.set_walk_speed(12.0);
        assert_eq!(cfg.walk_speed, 6.0);
        cfg.set_walk_speed(3.5);
        assert_eq!(cfg.walk_speed, 3.5);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut cfg = SimConfig::with_path("/definitely/not/there.ini");
        assert!(cfg.load_from_file().is_err());
        // Defaults survive a failed load.
        assert_eq!(cfg.walk_speed, DEFAULT_WALK_SPEED);
    }
}
