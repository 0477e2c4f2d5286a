//! Fire-and-forget audio cues.
//!
//! The core never waits on audio; cues are one-way messages forwarded to
//! whatever playback backend the host wires up.

use bevy_ecs::message::Message;

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Played on the first tick of ground contact and on first water entry.
    Landing,
    /// Played once when the player dies.
    Death,
}
