//! Projectile spawner.
//!
//! Turns a fire intent into a spawn request: a spawn point picked from the
//! fixed offset table and an initial direction, both functions of the
//! current contact state, aim, and walking flag. Onward motion and visuals
//! belong to the projectile collaborator.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::player::{AimDir, ContactState, PlayerState};
use crate::events::projectile::SpawnShot;
use crate::resources::config::SimConfig;
use crate::resources::input::Intents;

/// Muzzle positions relative to the player pivot, one per firing stance.
/// Values are for facing +x; the x component is mirrored when facing left.
#[derive(Debug, Clone, Copy)]
pub struct SpawnPoints {
    pub regular: Vec2,
    pub crouch: Vec2,
    pub straight_up: Vec2,
    pub jumping: Vec2,
    pub diagonal_up: Vec2,
    pub diagonal_down: Vec2,
}

impl Default for SpawnPoints {
    fn default() -> Self {
        SpawnPoints {
            regular: Vec2::new(0.55, 0.75),
            crouch: Vec2::new(0.55, 0.32),
            straight_up: Vec2::new(0.175, 1.4),
            jumping: Vec2::new(0.05, 0.75),
            diagonal_up: Vec2::new(0.35, 1.13),
            diagonal_down: Vec2::new(0.4, 0.5),
        }
    }
}

/// Pick the spawn offset. Priority order, first match wins:
/// airborne, walking with vertical aim, stationary aim up, stationary aim
/// down, default. The result is mirrored for the facing direction.
pub fn spawn_offset(
    contact: ContactState,
    aim: AimDir,
    is_walking: bool,
    points: &SpawnPoints,
) -> Vec2 {
    let mut offset = if contact == ContactState::Airborne {
        points.jumping
    } else if is_walking && aim.y > 0 {
        points.diagonal_up
    } else if is_walking && aim.y < 0 {
        points.diagonal_down
    } else if aim.y > 0 {
        points.straight_up
    } else if aim.y < 0 {
        points.crouch
    } else {
        points.regular
    };
    if aim.x < 0 {
        offset.x = -offset.x;
    }
    offset
}

/// Pick the travel direction, independently of the offset.
///
/// Walking shots follow the full aim. Stationary aim-up goes straight up.
/// Stationary aim-down travels flat while grounded (a crouched shot) and
/// straight down while airborne. Everything else follows the full aim.
pub fn shot_direction(contact: ContactState, aim: AimDir, is_walking: bool) -> Vec2 {
    let full = Vec2::new(aim.x as f32, aim.y as f32);
    if is_walking {
        full
    } else if aim.y > 0 {
        Vec2::new(0.0, 1.0)
    } else if aim.y < 0 {
        if contact == ContactState::Grounded {
            Vec2::new(aim.x as f32, 0.0)
        } else {
            Vec2::new(0.0, -1.0)
        }
    } else {
        full
    }
}

/// Consume a fire intent: emit the spawn request and latch `is_shooting`
/// for this tick.
pub fn fire_shots(
    intents: Res<Intents>,
    config: Res<SimConfig>,
    mut query: Query<&mut PlayerState>,
    mut shots: MessageWriter<SpawnShot>,
) {
    if !intents.fire {
        return;
    }
    let Ok(mut player) = query.single_mut() else {
        return;
    };
    if player.is_dead {
        return;
    }

    let points = SpawnPoints::default();
    let offset = spawn_offset(player.contact, player.aim, player.is_walking, &points);
    let direction = shot_direction(player.contact, player.aim, player.is_walking);
    let shot = SpawnShot {
        offset,
        direction,
        speed: config.shot_speed * player.shot_speed_modifier,
        damage: config.shot_damage,
        lifetime: config.shot_lifetime,
        kind: player.weapon,
    };
    debug!("shot fired: {:?}", shot);
    shots.write(shot);
    player.is_shooting = true;
}
