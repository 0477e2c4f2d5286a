//! Restartable countdown timers, polled once per tick.
//!
//! The delayed effects of the player core (platform pass-through restore,
//! water-exit snap, shot pose-hold, straight-lane cooldown) are entries in
//! a [`TimerBank`]: one logical slot per [`TimerKey`], each holding a
//! remaining time.
//!
//! Semantics:
//! - Arming a key that is already running **restarts** it; completions are
//!   never queued or stacked, the newer arm always wins.
//! - Expiry is observable only on the tick it happens, via
//!   [`TimerBank::expired`], after [`TimerBank::tick`] has run.
//! - Restarting is the only cancellation primitive systems use;
//!   [`TimerBank::clear`] exists for whole-state reset.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Logical timers of the player core. One slot each; arming twice restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    /// Reverts a shot pose back to the lane's running sprite.
    ShotPoseHold,
    /// Holds the straight-lane recoil pose after rapid fire.
    StraightCooldown,
    /// Restores a dropped-through platform's collider.
    PlatformPassThrough,
    /// Delay between grabbing the shore and snapping out of the water.
    WaterExit,
}

/// Registry of restartable countdown timers.
#[derive(Resource, Debug, Default)]
pub struct TimerBank {
    running: FxHashMap<TimerKey, f32>,
    expired_this_tick: Vec<TimerKey>,
}

impl TimerBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a timer. The previous remaining time, if any, is
    /// discarded.
    pub fn arm(&mut self, key: TimerKey, secs: f32) {
        self.running.insert(key, secs);
    }

    /// Stop a timer without it ever expiring.
    pub fn cancel(&mut self, key: TimerKey) {
        self.running.remove(&key);
    }

    pub fn is_running(&self, key: TimerKey) -> bool {
        self.running.contains_key(&key)
    }

    /// Remaining seconds, if the timer is running.
    pub fn remaining(&self, key: TimerKey) -> Option<f32> {
        self.running.get(&key).copied()
    }

    /// True only during the tick on which the timer ran out.
    pub fn expired(&self, key: TimerKey) -> bool {
        self.expired_this_tick.contains(&key)
    }

    /// Advance all running timers by `dt`, collecting the ones that ran out.
    /// Clears the previous tick's expiry set first.
    pub fn tick(&mut self, dt: f32) {
        self.expired_this_tick.clear();
        let mut done: Vec<TimerKey> = Vec::new();
        for (key, remaining) in self.running.iter_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                done.push(*key);
            }
        }
        for key in done {
            self.running.remove(&key);
            self.expired_this_tick.push(key);
        }
    }

    /// Return every timer to the unarmed state.
    pub fn clear(&mut self) {
        self.running.clear();
        self.expired_this_tick.clear();
    }
}
