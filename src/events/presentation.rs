//! Pose signals sent to the presentation collaborator.
//!
//! The animation player consumes three kinds of signal, mirroring the usual
//! animator split: one-shot triggers, level-held booleans, and a mutually
//! exclusive active-sprite selection over the fixed seven-sprite rig. All
//! of them travel as one closed, tagged [`PresentationCmd`].

use bevy_ecs::message::Message;

/// One-shot animation triggers. Consumed by the animation player on receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseTrigger {
    Jump,
    DiveWater,
    GettingOutOfWater,
    Dead,
}

/// Level-held animator booleans, re-asserted every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseFlag {
    OnGround,
    OnWater,
    Shooting,
    Walking,
    AimingUp,
    AimingDown,
}

/// Index into the player's sprite rig.
///
/// 0 idle/run straight, 1 recoil, 2 shoot straight, 3 run aim-up,
/// 4 shoot aim-up, 5 run aim-down, 6 shoot aim-down.
pub type SpriteIndex = usize;

pub const SPRITE_IDLE: SpriteIndex = 0;
pub const SPRITE_RECOIL: SpriteIndex = 1;
pub const SPRITE_SHOOT_STRAIGHT: SpriteIndex = 2;
pub const SPRITE_RUN_AIM_UP: SpriteIndex = 3;
pub const SPRITE_SHOOT_AIM_UP: SpriteIndex = 4;
pub const SPRITE_RUN_AIM_DOWN: SpriteIndex = 5;
pub const SPRITE_SHOOT_AIM_DOWN: SpriteIndex = 6;

/// One presentation command. The collaborator applies them in order.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationCmd {
    Trigger(PoseTrigger),
    SetFlag(PoseFlag, bool),
    /// Enable exactly this sprite, disabling the rest of the rig.
    ActiveSprite(SpriteIndex),
}
