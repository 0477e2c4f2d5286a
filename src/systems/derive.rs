//! Derived motion state.
//!
//! Walking is a product of physics, not intent: the flag follows the
//! mirrored horizontal velocity, so a player pushed by the world reads as
//! walking and a player holding a direction against a wall does not.
//! Likewise any vertical motion immediately demotes Grounded to Airborne,
//! covering ledge walk-offs and jump liftoff without waiting for a
//! collision-exit notification.

use bevy_ecs::prelude::*;

use crate::components::kinematics::KinematicMirror;
use crate::components::player::{ContactState, PlayerState};

pub fn derive_motion_state(mut query: Query<(&mut PlayerState, &KinematicMirror)>) {
    for (mut player, body) in query.iter_mut() {
        if player.is_dead {
            continue;
        }
        if player.contact == ContactState::Grounded && !body.vertical_near_zero() {
            player.contact = ContactState::Airborne;
        }
        player.is_walking = !body.horizontal_near_zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn spawn_player(world: &mut World, velocity: Vec2, contact: ContactState) -> Entity {
        let mut state = PlayerState::new();
        state.contact = contact;
        world
            .spawn((state, KinematicMirror { velocity }))
            .id()
    }

    fn run(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(derive_motion_state);
        schedule.run(world);
    }

    #[test]
    fn vertical_motion_clears_grounded() {
        let mut world = World::new();
        let e = spawn_player(&mut world, Vec2::new(0.0, 2.0), ContactState::Grounded);
        run(&mut world);
        let player = world.get::<PlayerState>(e).unwrap();
        assert_eq!(player.contact, ContactState::Airborne);
    }

    #[test]
    fn submerged_is_not_demoted() {
        let mut world = World::new();
        let e = spawn_player(&mut world, Vec2::new(0.0, -1.0), ContactState::Submerged);
        run(&mut world);
        let player = world.get::<PlayerState>(e).unwrap();
        assert_eq!(player.contact, ContactState::Submerged);
    }

    #[test]
    fn walking_follows_horizontal_velocity() {
        let mut world = World::new();
        let e = spawn_player(&mut world, Vec2::new(3.0, 0.0), ContactState::Grounded);
        run(&mut world);
        assert!(world.get::<PlayerState>(e).unwrap().is_walking);

        let mut body = world.get_mut::<KinematicMirror>(e).unwrap();
        body.velocity = Vec2::ZERO;
        run(&mut world);
        assert!(!world.get::<PlayerState>(e).unwrap().is_walking);
    }

    #[test]
    fn dead_player_is_left_alone() {
        let mut world = World::new();
        let e = spawn_player(&mut world, Vec2::new(3.0, 3.0), ContactState::Grounded);
        world.get_mut::<PlayerState>(e).unwrap().is_dead = true;
        run(&mut world);
        let player = world.get::<PlayerState>(e).unwrap();
        assert_eq!(player.contact, ContactState::Grounded);
        assert!(!player.is_walking);
    }
}
