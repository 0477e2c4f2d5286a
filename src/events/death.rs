//! Player death event and observer.
//!
//! The contact resolver marks the player dead synchronously (death is part
//! of the canonical state and must hold within the tick); the side effects
//! that nothing else depends on - the audio cue and the log line - run in
//! this observer instead, keeping the resolver focused on state.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::events::audio::AudioCue;

/// Fired once on the tick the player dies. Repeated hazard contacts while
/// already dead do not re-trigger it.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerDiedEvent {}

/// Observer reacting to [`PlayerDiedEvent`]: emits the death cue and logs.
pub fn observe_player_death(
    _trigger: On<PlayerDiedEvent>,
    mut audio: MessageWriter<AudioCue>,
) {
    info!("Player died");
    audio.write(AudioCue::Death);
}
