//! Collaborator bridge.
//!
//! The core's outbound command streams (physics, presentation, audio,
//! projectile) are written as ECS messages during the tick and forwarded to
//! the host over lock-free channels at the end of it. Sends are
//! fire-and-forget; a disconnected receiver during shutdown is ignored.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::audio::AudioCue;
use crate::events::contact::ContactEvent;
use crate::events::physics::PhysicsCmd;
use crate::events::presentation::PresentationCmd;
use crate::events::projectile::SpawnShot;

/// Sending ends of the collaborator channels, owned by the world.
#[derive(Resource)]
pub struct CollaboratorBridge {
    pub tx_physics: Sender<PhysicsCmd>,
    pub tx_presentation: Sender<PresentationCmd>,
    pub tx_audio: Sender<AudioCue>,
    pub tx_shots: Sender<SpawnShot>,
}

/// Receiving ends, handed to the host at wiring time. Each receiver is one
/// collaborator's inbox.
pub struct CollaboratorHooks {
    pub physics: Receiver<PhysicsCmd>,
    pub presentation: Receiver<PresentationCmd>,
    pub audio: Receiver<AudioCue>,
    pub shots: Receiver<SpawnShot>,
}

impl CollaboratorBridge {
    pub fn unbounded() -> (Self, CollaboratorHooks) {
        let (tx_physics, rx_physics) = unbounded();
        let (tx_presentation, rx_presentation) = unbounded();
        let (tx_audio, rx_audio) = unbounded();
        let (tx_shots, rx_shots) = unbounded();
        (
            CollaboratorBridge {
                tx_physics,
                tx_presentation,
                tx_audio,
                tx_shots,
            },
            CollaboratorHooks {
                physics: rx_physics,
                presentation: rx_presentation,
                audio: rx_audio,
                shots: rx_shots,
            },
        )
    }
}

/// Make the contact events the host pushed since last tick readable.
pub fn update_contact_queue(mut contacts: ResMut<Messages<ContactEvent>>) {
    contacts.update();
}

/// Make this tick's outbound messages readable for forwarding.
pub fn update_outbound_queues(
    mut physics: ResMut<Messages<PhysicsCmd>>,
    mut presentation: ResMut<Messages<PresentationCmd>>,
    mut audio: ResMut<Messages<AudioCue>>,
    mut shots: ResMut<Messages<SpawnShot>>,
) {
    physics.update();
    presentation.update();
    audio.update();
    shots.update();
}

/// Forward all outbound messages to the collaborator channels.
pub fn forward_commands(
    bridge: Res<CollaboratorBridge>,
    mut physics: MessageReader<PhysicsCmd>,
    mut presentation: MessageReader<PresentationCmd>,
    mut audio: MessageReader<AudioCue>,
    mut shots: MessageReader<SpawnShot>,
) {
    for cmd in physics.read() {
        let _ = bridge.tx_physics.send(*cmd);
    }
    for cmd in presentation.read() {
        let _ = bridge.tx_presentation.send(*cmd);
    }
    for cue in audio.read() {
        let _ = bridge.tx_audio.send(*cue);
    }
    for shot in shots.read() {
        let _ = bridge.tx_shots.send(*shot);
    }
}
