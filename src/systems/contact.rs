//! Environment contact resolver.
//!
//! Folds the contact notifications delivered by the physics collaborator
//! into the canonical [`ContactState`], handles the two timed contact
//! transitions (drop-through platforms, water exit), and raises the
//! one-shot side effects (landing/splash cue, death).

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::kinematics::KinematicMirror;
use crate::components::mapposition::MapPosition;
use crate::components::player::{ContactState, PlayerState};
use crate::events::audio::AudioCue;
use crate::events::contact::{ColliderHandle, ContactEvent, SurfaceTag};
use crate::events::death::PlayerDiedEvent;
use crate::events::physics::PhysicsCmd;
use crate::resources::config::{SHORE_SNAP_DX, SHORE_SNAP_Y, SimConfig};
use crate::resources::timers::{TimerBank, TimerKey};

/// The platform collider currently made non-solid, if any. Held so the
/// restore command after the pass-through window targets the same collider
/// the player dropped through.
#[derive(Resource, Debug, Default)]
pub struct PassThroughSlot(pub Option<ColliderHandle>);

/// Resolve this tick's contact events and timer expiries into `contact`,
/// `emerging_from_water`, and `is_dead`.
pub fn resolve_contacts(
    mut events: MessageReader<ContactEvent>,
    mut query: Query<(&mut PlayerState, &mut KinematicMirror, &mut MapPosition)>,
    mut timers: ResMut<TimerBank>,
    config: Res<SimConfig>,
    mut slot: ResMut<PassThroughSlot>,
    mut physics: MessageWriter<PhysicsCmd>,
    mut audio: MessageWriter<AudioCue>,
    mut commands: Commands,
) {
    let Ok((mut player, mut body, mut position)) = query.single_mut() else {
        return;
    };

    // The platform must become solid again no matter what the player is
    // doing, dead included.
    if timers.expired(TimerKey::PlatformPassThrough) {
        if let Some(collider) = slot.0.take() {
            debug!("restoring pass-through platform {:?}", collider);
            physics.write(PhysicsCmd::SetColliderPassThrough {
                collider,
                enabled: false,
            });
        }
    }

    // Death is absorbing: drop this tick's notifications unseen.
    if player.is_dead {
        events.clear();
        return;
    }

    if timers.expired(TimerKey::WaterExit) && player.emerging_from_water {
        position.pos.x += SHORE_SNAP_DX;
        position.pos.y = SHORE_SNAP_Y;
        player.emerging_from_water = false;
        debug!("water exit complete, snapped to shoreline");
    }

    for event in events.read() {
        match *event {
            ContactEvent::Stay {
                tag: SurfaceTag::Ground,
                vertical_velocity_zero,
                collider,
            } => {
                // Firmly on the floor only when vertical motion stopped.
                if vertical_velocity_zero {
                    if player.contact != ContactState::Grounded {
                        audio.write(AudioCue::Landing);
                        debug!("landed");
                    }
                    player.contact = ContactState::Grounded;
                }
                // Armed drop-through converts this platform into a
                // one-way pass-through for the configured window.
                if player.jumping_down {
                    player.jumping_down = false;
                    slot.0 = Some(collider);
                    physics.write(PhysicsCmd::SetColliderPassThrough {
                        collider,
                        enabled: true,
                    });
                    physics.write(PhysicsCmd::ApplyImpulse { vx: 0.0, vy: -1.0 });
                    body.apply_impulse(Vec2::new(0.0, -1.0));
                    timers.arm(TimerKey::PlatformPassThrough, config.pass_through_secs);
                    debug!("dropping through platform {:?}", collider);
                }
            }
            ContactEvent::Stay {
                tag: SurfaceTag::Water,
                ..
            } => {
                // Suppressed while climbing out so the exit does not
                // flicker back into the water.
                if !player.emerging_from_water {
                    if player.contact != ContactState::Submerged {
                        audio.write(AudioCue::Landing);
                        debug!("splashed into water");
                    }
                    player.contact = ContactState::Submerged;
                }
            }
            ContactEvent::Enter {
                tag: SurfaceTag::Ground,
            } => {
                if player.contact == ContactState::Submerged && !player.emerging_from_water {
                    player.emerging_from_water = true;
                    physics.write(PhysicsCmd::SetVelocity { vx: 0.0, vy: 0.0 });
                    body.velocity = Vec2::ZERO;
                    timers.arm(TimerKey::WaterExit, config.water_exit_secs);
                    debug!("grabbing the shore, water exit armed");
                }
            }
            ContactEvent::Enter {
                tag: SurfaceTag::Hazard,
            } => {
                if !player.is_dead {
                    player.is_dead = true;
                    commands.trigger(PlayerDiedEvent {});
                }
            }
            // Power-up contacts are the projectile collaborator's concern.
            _ => {}
        }
    }
}
