//! Time and timer advancement.
//!
//! [`update_world_time`] advances the shared
//! [`WorldTime`](crate::resources::worldtime::WorldTime) once per tick,
//! applying `time_scale` to the provided delta. [`tick_timers`] then polls
//! the [`TimerBank`](crate::resources::timers::TimerBank) so expiries become
//! observable to the systems that own them, on this tick boundary.

use bevy_ecs::prelude::*;

use crate::resources::timers::TimerBank;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled tick delta in seconds. The function
/// applies the current `time_scale` and writes both `elapsed` and `delta`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.tick_count += 1;
}

/// Advance all running timers by this tick's delta.
pub fn tick_timers(mut bank: ResMut<TimerBank>, time: Res<WorldTime>) {
    bank.tick(time.delta);
}
