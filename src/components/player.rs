//! Canonical per-tick player state.
//!
//! [`PlayerState`] is the single source of truth that the contact resolver,
//! input interpreter, projectile spawner, and presentation driver all read
//! and write during a tick. There is exactly one entity carrying it, owned
//! by the [`Simulation`](crate::sim::Simulation); collaborators never mutate
//! it directly, they only deliver notifications (contact events, velocity
//! reports) that the resolver folds into it.

use bevy_ecs::prelude::Component;

/// Mutually exclusive classification of the surface/medium the player
/// currently occupies. Derived from contact events and vertical velocity,
/// never set directly by input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactState {
    Grounded,
    Submerged,
    #[default]
    Airborne,
}

/// The six weapon kinds the player can carry.
///
/// The core only stores the current kind and stamps it on spawn requests;
/// weapon-specific ballistics live in the projectile collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weapon {
    #[default]
    Regular,
    Rapid,
    MachineGun,
    Spread,
    Fire,
    Laser,
}

/// Quantized aim direction. Components are always -1, 0, or 1.
///
/// `x` is the facing direction and sticks: releasing the horizontal input
/// never resets it to 0, so it is only ever -1 or 1 after spawn. `y` is the
/// instantaneous vertical aim and drops back to 0 on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AimDir {
    pub x: i8,
    pub y: i8,
}

impl Default for AimDir {
    fn default() -> Self {
        // Spawn facing +x.
        AimDir { x: 1, y: 0 }
    }
}

impl AimDir {
    /// Update the facing direction from a raw horizontal axis sample.
    /// Zero samples are ignored so the last nonzero direction sticks.
    pub fn set_facing(&mut self, axis: f32) {
        if axis > 0.0 {
            self.x = 1;
        } else if axis < 0.0 {
            self.x = -1;
        }
    }

    /// Update the vertical aim from a raw vertical axis sample.
    /// Unlike `x`, releasing the input resets `y` to neutral.
    pub fn set_vertical(&mut self, axis: f32) {
        self.y = if axis > 0.0 {
            1
        } else if axis < 0.0 {
            -1
        } else {
            0
        };
    }
}

/// Canonical player state, resolved once per simulation tick.
#[derive(Component, Debug, Clone, Default)]
pub struct PlayerState {
    /// What the player is standing in/on right now.
    pub contact: ContactState,
    /// True only during the timed Submerged -> Grounded transition.
    pub emerging_from_water: bool,
    /// Facing and vertical aim.
    pub aim: AimDir,
    /// Derived from nonzero horizontal physical velocity, not from input.
    pub is_walking: bool,
    /// One-tick latch set by a fire action; consumed by the presentation
    /// driver within the same tick cycle.
    pub is_shooting: bool,
    /// Absorbing once true; only [`PlayerState::reset`] clears it.
    pub is_dead: bool,
    /// Currently carried weapon kind.
    pub weapon: Weapon,
    /// Multiplier applied to the configured shot speed.
    pub shot_speed_modifier: f32,
    /// Liftoff edge flag; set by a jump action, consumed by the
    /// presentation driver to fire the Jump pose exactly once.
    pub jumped: bool,
    /// Armed drop-through-platform intent. Consumed by the contact
    /// resolver on the next Ground stay event.
    pub jumping_down: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        PlayerState {
            shot_speed_modifier: 1.0,
            ..Default::default()
        }
    }

    /// Restore spawn defaults. Timers are cleared separately by the
    /// simulation; this only touches the state itself.
    pub fn reset(&mut self) {
        *self = PlayerState::new();
    }
}
