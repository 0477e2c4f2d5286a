//! Presentation driver.
//!
//! Maps the canonical player state to the animation signals the rendering
//! collaborator consumes, every tick, in a fixed priority order. The two
//! recovery windows of the grounded shooting lanes (shot pose-hold and
//! straight-lane cooldown) live here, on the [`TimerBank`].
//!
//! The driver also consumes the one-tick `is_shooting` latch: the Shooting
//! flag is pulsed and the latch cleared within the same tick cycle.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::player::{ContactState, PlayerState};
use crate::events::presentation::{
    PoseFlag, PoseTrigger, PresentationCmd, SPRITE_IDLE, SPRITE_RECOIL, SPRITE_RUN_AIM_DOWN,
    SPRITE_RUN_AIM_UP, SPRITE_SHOOT_AIM_DOWN, SPRITE_SHOOT_AIM_UP, SPRITE_SHOOT_STRAIGHT,
    SpriteIndex,
};
use crate::resources::config::SimConfig;
use crate::resources::timers::{TimerBank, TimerKey};

/// Driver-local state: the edges already fired and the shooting-lane
/// recovery bookkeeping. Reset together with the player.
#[derive(Resource, Debug, Default)]
pub struct PresentationDriver {
    /// The Dead trigger has been sent; nothing else until reset.
    triggered_death: bool,
    /// The DiveWater trigger has been sent for the current submersion.
    in_water_pose: bool,
    /// Sprite held while the shot pose-hold timer runs.
    hold_sprite: SpriteIndex,
    /// Aim lane (`aim.y`) the held sprite belongs to.
    hold_lane: i8,
    /// The straight lane shows the recoil sprite until the cooldown ends.
    cooling_down: bool,
}

impl PresentationDriver {
    pub fn reset(&mut self) {
        *self = PresentationDriver::default();
    }
}

pub fn drive_presentation(
    mut driver: ResMut<PresentationDriver>,
    mut timers: ResMut<TimerBank>,
    config: Res<SimConfig>,
    mut query: Query<&mut PlayerState>,
    mut out: MessageWriter<PresentationCmd>,
) {
    let Ok(mut player) = query.single_mut() else {
        return;
    };

    // Death wins over everything and is asserted exactly once.
    if player.is_dead {
        if !driver.triggered_death {
            driver.triggered_death = true;
            out.write(PresentationCmd::ActiveSprite(SPRITE_IDLE));
            out.write(PresentationCmd::Trigger(PoseTrigger::Dead));
            debug!("death pose asserted");
        }
        return;
    }
    driver.triggered_death = false;

    if timers.expired(TimerKey::StraightCooldown) {
        driver.cooling_down = false;
    }

    if player.emerging_from_water {
        out.write(PresentationCmd::Trigger(PoseTrigger::GettingOutOfWater));
    }

    match player.contact {
        ContactState::Grounded => {
            driver.in_water_pose = false;
            out.write(PresentationCmd::SetFlag(PoseFlag::OnGround, true));
            out.write(PresentationCmd::SetFlag(PoseFlag::OnWater, false));
            if player.is_walking {
                out.write(PresentationCmd::SetFlag(PoseFlag::AimingUp, false));
                out.write(PresentationCmd::SetFlag(PoseFlag::AimingDown, false));
                out.write(PresentationCmd::SetFlag(PoseFlag::Walking, true));
                let sprite = walking_sprite(&mut driver, &mut timers, &config, &player);
                out.write(PresentationCmd::ActiveSprite(sprite));
            } else {
                // Stationary never shows a walking sprite, whatever the aim.
                out.write(PresentationCmd::SetFlag(PoseFlag::AimingUp, player.aim.y > 0));
                out.write(PresentationCmd::SetFlag(
                    PoseFlag::AimingDown,
                    player.aim.y < 0,
                ));
                out.write(PresentationCmd::SetFlag(PoseFlag::Walking, false));
                out.write(PresentationCmd::ActiveSprite(SPRITE_IDLE));
            }
        }
        ContactState::Submerged => {
            out.write(PresentationCmd::SetFlag(PoseFlag::OnGround, false));
            out.write(PresentationCmd::SetFlag(PoseFlag::OnWater, true));
            if !driver.in_water_pose {
                driver.in_water_pose = true;
                out.write(PresentationCmd::Trigger(PoseTrigger::DiveWater));
                debug!("dive pose asserted");
            }
            out.write(PresentationCmd::ActiveSprite(SPRITE_IDLE));
            // Only aim-up has a pose in the water; no recoil machinery.
            out.write(PresentationCmd::SetFlag(PoseFlag::AimingUp, player.aim.y > 0));
            out.write(PresentationCmd::SetFlag(PoseFlag::AimingDown, false));
            out.write(PresentationCmd::SetFlag(
                PoseFlag::Walking,
                player.is_walking,
            ));
        }
        ContactState::Airborne => {
            driver.in_water_pose = false;
            out.write(PresentationCmd::SetFlag(PoseFlag::OnGround, false));
            out.write(PresentationCmd::ActiveSprite(SPRITE_IDLE));
            // Jump pose only on the liftoff edge, not every airborne tick.
            if player.jumped {
                player.jumped = false;
                out.write(PresentationCmd::Trigger(PoseTrigger::Jump));
            }
        }
    }

    // Consume the one-tick shooting latch.
    if player.is_shooting {
        out.write(PresentationCmd::SetFlag(PoseFlag::Shooting, true));
        player.is_shooting = false;
    } else {
        out.write(PresentationCmd::SetFlag(PoseFlag::Shooting, false));
    }
}

/// The grounded walking shooting sub-machine.
///
/// Each lane (straight / aim-up / aim-down) shows its shot sprite while the
/// pose-hold window runs, then reverts. The straight lane additionally
/// holds the recoil sprite until the cooldown since the last shot elapses.
/// Re-firing restarts both windows; the newer arm always wins.
fn walking_sprite(
    driver: &mut PresentationDriver,
    timers: &mut TimerBank,
    config: &SimConfig,
    player: &PlayerState,
) -> SpriteIndex {
    let lane = player.aim.y;

    // Changing lanes abandons a held shot pose.
    if timers.is_running(TimerKey::ShotPoseHold) && driver.hold_lane != lane {
        timers.cancel(TimerKey::ShotPoseHold);
    }

    if player.is_shooting {
        let sprite = match lane {
            1 => SPRITE_SHOOT_AIM_UP,
            -1 => SPRITE_SHOOT_AIM_DOWN,
            _ => {
                driver.cooling_down = true;
                timers.arm(TimerKey::StraightCooldown, config.straight_cooldown_secs);
                SPRITE_SHOOT_STRAIGHT
            }
        };
        driver.hold_sprite = sprite;
        driver.hold_lane = lane;
        timers.arm(TimerKey::ShotPoseHold, config.pose_hold_secs);
        sprite
    } else if timers.is_running(TimerKey::ShotPoseHold) {
        driver.hold_sprite
    } else {
        match lane {
            1 => SPRITE_RUN_AIM_UP,
            -1 => SPRITE_RUN_AIM_DOWN,
            _ => {
                if driver.cooling_down {
                    SPRITE_RECOIL
                } else {
                    SPRITE_IDLE
                }
            }
        }
    }
}
