//! Pose-machine tests: sprite lanes, recovery windows, and trigger edges
//! as seen on the presentation channel.

use runngun::events::contact::{ColliderHandle, ContactEvent, SurfaceTag};
use runngun::events::presentation::{
    PoseTrigger, PresentationCmd, SPRITE_IDLE, SPRITE_RECOIL, SPRITE_RUN_AIM_DOWN,
    SPRITE_RUN_AIM_UP, SPRITE_SHOOT_AIM_UP, SPRITE_SHOOT_STRAIGHT, SpriteIndex,
};
use runngun::resources::config::SimConfig;
use runngun::resources::input::InputSample;
use runngun::sim::Simulation;
use runngun::systems::bridge::CollaboratorHooks;

const DT: f32 = 0.125;

fn new_sim() -> (Simulation, CollaboratorHooks) {
    Simulation::new(SimConfig::new())
}

fn ground_stay() -> ContactEvent {
    ContactEvent::Stay {
        tag: SurfaceTag::Ground,
        vertical_velocity_zero: true,
        collider: ColliderHandle(7),
    }
}

fn water_stay() -> ContactEvent {
    ContactEvent::Stay {
        tag: SurfaceTag::Water,
        vertical_velocity_zero: false,
        collider: ColliderHandle(9),
    }
}

fn drain(hooks: &CollaboratorHooks) -> Vec<PresentationCmd> {
    hooks.presentation.try_iter().collect()
}

fn last_sprite(cmds: &[PresentationCmd]) -> Option<SpriteIndex> {
    cmds.iter().rev().find_map(|c| match c {
        PresentationCmd::ActiveSprite(s) => Some(*s),
        _ => None,
    })
}

fn count_trigger(cmds: &[PresentationCmd], trigger: PoseTrigger) -> usize {
    cmds.iter()
        .filter(|c| **c == PresentationCmd::Trigger(trigger))
        .count()
}

fn walk_fire() -> InputSample {
    InputSample {
        horizontal: 1.0,
        fire_pressed: true,
        ..InputSample::default()
    }
}

/// One walking tick: ground stay plus a held right input.
fn walk_tick(sim: &mut Simulation) {
    sim.push_contact(ground_stay());
    sim.tick(DT, InputSample::walk(1.0));
}

#[test]
fn spawn_asserts_the_jump_pose_once() {
    let (mut sim, hooks) = new_sim();
    sim.tick(DT, InputSample::idle());
    let cmds = drain(&hooks);
    assert_eq!(count_trigger(&cmds, PoseTrigger::Jump), 1);

    sim.tick(DT, InputSample::idle());
    let cmds = drain(&hooks);
    assert_eq!(count_trigger(&cmds, PoseTrigger::Jump), 0);
}

#[test]
fn dive_pose_fires_once_per_submersion() {
    let (mut sim, hooks) = new_sim();
    sim.push_contact(water_stay());
    sim.tick(DT, InputSample::idle());
    sim.push_contact(water_stay());
    sim.tick(DT, InputSample::idle());
    let cmds = drain(&hooks);
    assert_eq!(count_trigger(&cmds, PoseTrigger::DiveWater), 1);

    // Leaving the water rearms the edge.
    sim.push_contact(ground_stay());
    sim.tick(DT, InputSample::idle());
    drain(&hooks);
    sim.push_contact(water_stay());
    sim.tick(DT, InputSample::idle());
    let cmds = drain(&hooks);
    assert_eq!(count_trigger(&cmds, PoseTrigger::DiveWater), 1);
}

#[test]
fn submerged_flags_follow_walking_and_aim() {
    use runngun::events::presentation::PoseFlag;

    let (mut sim, hooks) = new_sim();
    sim.push_contact(water_stay());
    sim.tick(DT, InputSample::idle());
    drain(&hooks);

    // Wading forward while aiming up.
    sim.push_contact(water_stay());
    sim.tick(
        DT,
        InputSample {
            horizontal: 1.0,
            vertical: 1.0,
            ..InputSample::default()
        },
    );
    let cmds = drain(&hooks);
    assert!(cmds.contains(&PresentationCmd::SetFlag(PoseFlag::OnWater, true)));
    assert!(cmds.contains(&PresentationCmd::SetFlag(PoseFlag::OnGround, false)));
    assert!(cmds.contains(&PresentationCmd::SetFlag(PoseFlag::Walking, true)));
    assert!(cmds.contains(&PresentationCmd::SetFlag(PoseFlag::AimingUp, true)));
    assert!(cmds.contains(&PresentationCmd::SetFlag(PoseFlag::AimingDown, false)));
    assert_eq!(last_sprite(&cmds), Some(SPRITE_IDLE));
}

#[test]
fn no_recoil_machinery_in_water() {
    use runngun::resources::timers::TimerKey;

    let (mut sim, hooks) = new_sim();
    sim.push_contact(water_stay());
    sim.tick(DT, InputSample::idle());
    drain(&hooks);

    // Firing while submerged spawns the shot but arms no grounded-lane
    // recovery window and never swaps the sprite.
    sim.push_contact(water_stay());
    sim.tick(
        DT,
        InputSample {
            horizontal: 1.0,
            fire_pressed: true,
            ..InputSample::default()
        },
    );
    let cmds = drain(&hooks);
    assert!(hooks.shots.try_iter().count() == 1);
    assert_eq!(last_sprite(&cmds), Some(SPRITE_IDLE));
    assert!(sim.timer_remaining(TimerKey::ShotPoseHold).is_none());
    assert!(sim.timer_remaining(TimerKey::StraightCooldown).is_none());
}

#[test]
fn walking_lanes_pick_the_aim_sprite() {
    let (mut sim, hooks) = new_sim();
    sim.push_contact(ground_stay());
    sim.tick(DT, InputSample::idle());
    drain(&hooks);

    sim.push_contact(ground_stay());
    sim.tick(
        DT,
        InputSample {
            horizontal: 1.0,
            vertical: 1.0,
            ..InputSample::default()
        },
    );
    assert_eq!(last_sprite(&drain(&hooks)), Some(SPRITE_RUN_AIM_UP));

    sim.push_contact(ground_stay());
    sim.tick(
        DT,
        InputSample {
            horizontal: 1.0,
            vertical: -1.0,
            ..InputSample::default()
        },
    );
    assert_eq!(last_sprite(&drain(&hooks)), Some(SPRITE_RUN_AIM_DOWN));

    walk_tick(&mut sim);
    assert_eq!(last_sprite(&drain(&hooks)), Some(SPRITE_IDLE));
}

#[test]
fn straight_shot_holds_then_recoils_then_reverts() {
    let (mut sim, hooks) = new_sim();
    sim.push_contact(ground_stay());
    sim.tick(DT, InputSample::idle());
    drain(&hooks);

    // Tick 0: the shot itself.
    sim.push_contact(ground_stay());
    sim.tick(DT, walk_fire());
    assert_eq!(last_sprite(&drain(&hooks)), Some(SPRITE_SHOOT_STRAIGHT));

    // Ticks 1..=4: within the 0.6s pose hold.
    for _ in 0..4 {
        walk_tick(&mut sim);
        assert_eq!(last_sprite(&drain(&hooks)), Some(SPRITE_SHOOT_STRAIGHT));
    }

    // Ticks 5..=11: hold over, recoil until the 1.5s cooldown ends.
    for _ in 0..7 {
        walk_tick(&mut sim);
        assert_eq!(last_sprite(&drain(&hooks)), Some(SPRITE_RECOIL));
    }

    // Tick 12: 1.5s after the shot, plain running.
    walk_tick(&mut sim);
    assert_eq!(last_sprite(&drain(&hooks)), Some(SPRITE_IDLE));
}

#[test]
fn refiring_during_recoil_restarts_both_windows() {
    let (mut sim, hooks) = new_sim();
    sim.push_contact(ground_stay());
    sim.tick(DT, InputSample::idle());
    drain(&hooks);

    sim.push_contact(ground_stay());
    sim.tick(DT, walk_fire());
    drain(&hooks);
    for _ in 0..6 {
        walk_tick(&mut sim);
    }
    assert_eq!(last_sprite(&drain(&hooks)), Some(SPRITE_RECOIL));

    // Second shot: full shoot pose again, and the cooldown runs the full
    // 1.5s from here.
    sim.push_contact(ground_stay());
    sim.tick(DT, walk_fire());
    assert_eq!(last_sprite(&drain(&hooks)), Some(SPRITE_SHOOT_STRAIGHT));
    for _ in 0..11 {
        walk_tick(&mut sim);
    }
    let sprite = last_sprite(&drain(&hooks));
    assert_eq!(sprite, Some(SPRITE_RECOIL));
    walk_tick(&mut sim);
    assert_eq!(last_sprite(&drain(&hooks)), Some(SPRITE_IDLE));
}

#[test]
fn changing_aim_lane_abandons_a_held_shot_pose() {
    let (mut sim, hooks) = new_sim();
    sim.push_contact(ground_stay());
    sim.tick(DT, InputSample::idle());
    drain(&hooks);

    // Shoot upward while running.
    sim.push_contact(ground_stay());
    sim.tick(
        DT,
        InputSample {
            horizontal: 1.0,
            vertical: 1.0,
            fire_pressed: true,
            ..InputSample::default()
        },
    );
    assert_eq!(last_sprite(&drain(&hooks)), Some(SPRITE_SHOOT_AIM_UP));

    // Dropping the aim mid-hold goes straight to plain running.
    walk_tick(&mut sim);
    assert_eq!(last_sprite(&drain(&hooks)), Some(SPRITE_IDLE));
}

#[test]
fn stationary_aim_flags_track_the_vertical_axis() {
    use runngun::events::presentation::PoseFlag;

    let (mut sim, hooks) = new_sim();
    sim.push_contact(ground_stay());
    sim.tick(DT, InputSample::idle());
    drain(&hooks);

    sim.push_contact(ground_stay());
    sim.tick(
        DT,
        InputSample {
            vertical: 1.0,
            ..InputSample::default()
        },
    );
    let cmds = drain(&hooks);
    assert!(cmds.contains(&PresentationCmd::SetFlag(PoseFlag::AimingUp, true)));
    assert!(cmds.contains(&PresentationCmd::SetFlag(PoseFlag::AimingDown, false)));
    assert_eq!(last_sprite(&cmds), Some(SPRITE_IDLE));

    sim.push_contact(ground_stay());
    sim.tick(
        DT,
        InputSample {
            vertical: -1.0,
            ..InputSample::default()
        },
    );
    let cmds = drain(&hooks);
    assert!(cmds.contains(&PresentationCmd::SetFlag(PoseFlag::AimingUp, false)));
    assert!(cmds.contains(&PresentationCmd::SetFlag(PoseFlag::AimingDown, true)));
}

#[test]
fn nothing_is_emitted_while_dead() {
    let (mut sim, hooks) = new_sim();
    sim.push_contact(ContactEvent::Enter {
        tag: SurfaceTag::Hazard,
    });
    sim.tick(DT, InputSample::idle());
    let cmds = drain(&hooks);
    assert_eq!(count_trigger(&cmds, PoseTrigger::Dead), 1);

    for _ in 0..3 {
        sim.push_contact(ground_stay());
        sim.tick(DT, InputSample::walk(1.0));
        assert!(drain(&hooks).is_empty());
    }
}
