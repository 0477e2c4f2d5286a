//! Simulation wrapper.
//!
//! Owns the ECS world, the player entity, and a single-threaded schedule
//! that runs every system in a fixed chain once per tick. This is the
//! explicit dependency-injection seam of the crate: the host constructs a
//! [`Simulation`], keeps the [`CollaboratorHooks`] receivers for its
//! physics/presentation/audio/projectile backends, and drives the core with
//! [`Simulation::tick`] plus the inbound notification methods.
//!
//! Everything inside a tick is sequential; timers are polled, never
//! preempting, and no operation blocks.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::kinematics::KinematicMirror;
use crate::components::mapposition::MapPosition;
use crate::components::player::PlayerState;
use crate::events::audio::AudioCue;
use crate::events::contact::ContactEvent;
use crate::events::death::observe_player_death;
use crate::events::physics::PhysicsCmd;
use crate::events::presentation::{PoseTrigger, PresentationCmd};
use crate::events::projectile::SpawnShot;
use crate::resources::camera::CameraView;
use crate::resources::config::{RESPAWN_Y, SimConfig};
use crate::resources::input::{InputSample, Intents};
use crate::resources::timers::{TimerBank, TimerKey};
use crate::resources::worldtime::WorldTime;
use crate::systems::bridge::{
    CollaboratorBridge, CollaboratorHooks, forward_commands, update_contact_queue,
    update_outbound_queues,
};
use crate::systems::contact::{PassThroughSlot, resolve_contacts};
use crate::systems::derive::derive_motion_state;
use crate::systems::input::interpret_input;
use crate::systems::presentation::{PresentationDriver, drive_presentation};
use crate::systems::shooting::fire_shots;
use crate::systems::time::{tick_timers, update_world_time};

pub struct Simulation {
    world: World,
    schedule: Schedule,
    player: Entity,
}

impl Simulation {
    /// Build the world, spawn the player, and wire the collaborator
    /// channels. The returned hooks are the receiving ends the host plugs
    /// its backends into.
    pub fn new(config: SimConfig) -> (Self, CollaboratorHooks) {
        let mut world = World::new();

        world.init_resource::<Messages<ContactEvent>>();
        world.init_resource::<Messages<PhysicsCmd>>();
        world.init_resource::<Messages<PresentationCmd>>();
        world.init_resource::<Messages<AudioCue>>();
        world.init_resource::<Messages<SpawnShot>>();

        world.insert_resource(config);
        world.insert_resource(WorldTime::default());
        world.insert_resource(TimerBank::new());
        world.insert_resource(InputSample::default());
        world.insert_resource(Intents::default());
        world.insert_resource(CameraView::default());
        world.insert_resource(PresentationDriver::default());
        world.insert_resource(PassThroughSlot::default());

        let (bridge, hooks) = CollaboratorBridge::unbounded();
        world.insert_resource(bridge);

        world.add_observer(observe_player_death);

        let player = world
            .spawn((
                PlayerState::new(),
                KinematicMirror::new(),
                MapPosition::new(0.0, RESPAWN_Y),
            ))
            .id();

        // The player enters the world mid-air: assert the spawn pose.
        world
            .resource_mut::<Messages<PresentationCmd>>()
            .write(PresentationCmd::Trigger(PoseTrigger::Jump));

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                update_contact_queue,
                tick_timers,
                resolve_contacts,
                interpret_input,
                derive_motion_state,
                fire_shots,
                drive_presentation,
                update_outbound_queues,
                forward_commands,
            )
                .chain(),
        );

        info!("simulation wired");
        (
            Simulation {
                world,
                schedule,
                player,
            },
            hooks,
        )
    }

    /// Deliver a contact notification from the physics collaborator. It
    /// becomes visible to the resolver on the next tick.
    pub fn push_contact(&mut self, event: ContactEvent) {
        self.world
            .resource_mut::<Messages<ContactEvent>>()
            .write(event);
    }

    /// Mirror the velocity the physics collaborator resolved for this tick.
    pub fn set_reported_velocity(&mut self, vx: f32, vy: f32) {
        let mut body = self
            .world
            .get_mut::<KinematicMirror>(self.player)
            .expect("player entity lost its KinematicMirror");
        body.velocity = Vec2::new(vx, vy);
    }

    /// Mirror the position the physics collaborator resolved for this tick.
    pub fn set_reported_position(&mut self, x: f32, y: f32) {
        let mut position = self
            .world
            .get_mut::<MapPosition>(self.player)
            .expect("player entity lost its MapPosition");
        position.pos = Vec2::new(x, y);
    }

    /// Update the camera center used by death-recovery reset.
    pub fn set_camera_x(&mut self, x: f32) {
        self.world.resource_mut::<CameraView>().x = x;
    }

    /// Run one fixed-rate simulation step.
    pub fn tick(&mut self, dt: f32, input: InputSample) {
        self.world.insert_resource(input);
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
    }

    /// Death recovery: restore spawn defaults, re-clamp the position
    /// against the camera, return every timer to unarmed, and assert the
    /// spawn pose again.
    pub fn reset_player(&mut self) {
        let camera = *self.world.resource::<CameraView>();
        {
            let mut entity = self.world.entity_mut(self.player);
            if let Some(mut position) = entity.get_mut::<MapPosition>() {
                position.pos.x = camera.clamp_respawn_x(position.pos.x);
                position.pos.y = RESPAWN_Y;
            }
            if let Some(mut body) = entity.get_mut::<KinematicMirror>() {
                body.velocity = Vec2::ZERO;
            }
            if let Some(mut player) = entity.get_mut::<PlayerState>() {
                player.reset();
            }
        }
        self.world.resource_mut::<TimerBank>().clear();
        self.world.resource_mut::<PresentationDriver>().reset();
        self.world.resource_mut::<PassThroughSlot>().0 = None;
        self.world
            .resource_mut::<Messages<PresentationCmd>>()
            .write(PresentationCmd::Trigger(PoseTrigger::Jump));
        info!("player reset to spawn defaults");
    }

    /// Read-only view of the canonical player state.
    pub fn player(&self) -> &PlayerState {
        self.world
            .get::<PlayerState>(self.player)
            .expect("player entity lost its PlayerState")
    }

    /// Current world position of the player.
    pub fn player_position(&self) -> Vec2 {
        self.world
            .get::<MapPosition>(self.player)
            .expect("player entity lost its MapPosition")
            .pos
    }

    /// Scaled simulation seconds elapsed and ticks run so far.
    pub fn clock(&self) -> (f32, u64) {
        let time = self.world.resource::<WorldTime>();
        (time.elapsed, time.tick_count)
    }

    /// Remaining seconds on a logical timer, if it is running.
    pub fn timer_remaining(&self, key: TimerKey) -> Option<f32> {
        self.world.resource::<TimerBank>().remaining(key)
    }

    /// Mutable access to the player state for host-driven adjustments
    /// (weapon pickups, shot-speed modifiers).
    pub fn player_mut(&mut self) -> Mut<'_, PlayerState> {
        self.world
            .get_mut::<PlayerState>(self.player)
            .expect("player entity lost its PlayerState")
    }
}
