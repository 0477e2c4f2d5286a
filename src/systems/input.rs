//! Input interpreter.
//!
//! Maps the raw per-tick [`InputSample`] into the aim direction, a walk
//! velocity command, and the discrete intents (jump, jump-down-through,
//! fire). Axis values are clamped to [-1, 1]; malformed input is never
//! rejected.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::kinematics::KinematicMirror;
use crate::components::player::{ContactState, PlayerState};
use crate::events::physics::PhysicsCmd;
use crate::resources::config::SimConfig;
use crate::resources::input::{InputSample, Intents};

pub fn interpret_input(
    sample: Res<InputSample>,
    mut intents: ResMut<Intents>,
    config: Res<SimConfig>,
    mut query: Query<(&mut PlayerState, &mut KinematicMirror)>,
    mut physics: MessageWriter<PhysicsCmd>,
) {
    *intents = Intents::default();

    let Ok((mut player, mut body)) = query.single_mut() else {
        return;
    };
    if player.is_dead {
        return;
    }

    let horizontal = sample.horizontal.clamp(-1.0, 1.0);
    let vertical = sample.vertical.clamp(-1.0, 1.0);

    // Horizontal movement: command the walk velocity and update facing.
    // Releasing the input leaves both velocity and facing as they were.
    if horizontal != 0.0 {
        let walk = horizontal * config.walk_speed;
        body.velocity.x = walk;
        physics.write(PhysicsCmd::SetVelocity {
            vx: walk,
            vy: body.velocity.y,
        });
        player.aim.set_facing(horizontal);
    }
    player.aim.set_vertical(vertical);

    // Jump only from the ground. Holding down at that instant means drop
    // through the platform instead.
    if sample.jump_pressed && player.contact == ContactState::Grounded {
        if player.aim.y < 0 {
            player.jumping_down = true;
            debug!("armed jump-down-through");
        } else {
            player.jumped = true;
            physics.write(PhysicsCmd::ApplyImpulse {
                vx: 0.0,
                vy: config.jump_impulse,
            });
            body.apply_impulse(Vec2::new(0.0, config.jump_impulse));
            // Ahead of the resolver, so the jump shows this tick instead
            // of one frame late.
            player.contact = ContactState::Airborne;
            debug!("jump");
        }
    }

    // Fire is unconditional on contact state.
    if sample.fire_pressed {
        intents.fire = true;
    }
}
