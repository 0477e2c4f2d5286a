//! Headless demo driver.
//!
//! Runs the player simulation core against a trivial stand-in for the
//! physics collaborator (gravity plus a flat ground plane) and logs every
//! command the core emits. Input comes from a JSON tape of per-tick
//! [`InputSample`] values, or from a built-in script when no tape is given.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --ticks 300 --rate 60
//! RUST_LOG=debug cargo run -- --tape tape.json
//! ```

use clap::Parser;
use glam::Vec2;
use log::{info, warn};
use std::path::PathBuf;

use runngun::events::contact::{ColliderHandle, ContactEvent, SurfaceTag};
use runngun::events::physics::PhysicsCmd;
use runngun::resources::config::SimConfig;
use runngun::resources::input::InputSample;
use runngun::sim::Simulation;

/// Run-and-gun player simulation core, headless demo.
#[derive(Parser)]
#[command(version, about = "Headless driver for the runngun player core")]
struct Cli {
    /// Number of simulation ticks to run.
    #[arg(long, default_value_t = 300)]
    ticks: u64,

    /// Tick rate in Hz.
    #[arg(long, default_value_t = 60.0)]
    rate: f32,

    /// Optional INI file overriding the built-in tunables.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Optional JSON tape: an array of per-tick input samples.
    #[arg(long, value_name = "PATH")]
    tape: Option<PathBuf>,
}

/// Minimal physics stand-in: gravity, a ground plane at y = 0, and direct
/// application of the core's velocity commands.
struct DemoPhysics {
    position: Vec2,
    velocity: Vec2,
    on_ground: bool,
}

const GRAVITY: f32 = -9.81;
const GROUND_Y: f32 = 0.0;
const GROUND_COLLIDER: ColliderHandle = ColliderHandle(1);

impl DemoPhysics {
    fn new(position: Vec2) -> Self {
        DemoPhysics {
            position,
            velocity: Vec2::ZERO,
            on_ground: false,
        }
    }

    fn apply(&mut self, cmd: PhysicsCmd) {
        match cmd {
            PhysicsCmd::SetVelocity { vx, vy } => self.velocity = Vec2::new(vx, vy),
            PhysicsCmd::ApplyImpulse { vx, vy } => self.velocity += Vec2::new(vx, vy),
            PhysicsCmd::SetColliderPassThrough { collider, enabled } => {
                info!("platform {:?} pass-through={}", collider, enabled);
            }
        }
    }

    /// Integrate one step and feed the resulting contacts into the core.
    fn step(&mut self, dt: f32, sim: &mut Simulation) {
        if !self.on_ground {
            self.velocity.y += GRAVITY * dt;
        }
        self.position += self.velocity * dt;

        let was_on_ground = self.on_ground;
        if self.position.y <= GROUND_Y && self.velocity.y <= 0.0 {
            self.position.y = GROUND_Y;
            self.velocity.y = 0.0;
            self.on_ground = true;
        } else if self.velocity.y != 0.0 {
            self.on_ground = false;
        }

        if self.on_ground && !was_on_ground {
            sim.push_contact(ContactEvent::Enter {
                tag: SurfaceTag::Ground,
            });
        }
        if self.on_ground {
            sim.push_contact(ContactEvent::Stay {
                tag: SurfaceTag::Ground,
                vertical_velocity_zero: true,
                collider: GROUND_COLLIDER,
            });
        }

        sim.set_reported_velocity(self.velocity.x, self.velocity.y);
        sim.set_reported_position(self.position.x, self.position.y);

        // Horizontal velocity decays when the core stops commanding it.
        self.velocity.x *= 0.8;
    }
}

/// Built-in script: walk right, jump, then rapid-fire while running.
fn builtin_tape() -> Vec<InputSample> {
    let mut tape = Vec::new();
    for _ in 0..60 {
        tape.push(InputSample::walk(1.0));
    }
    tape.push(InputSample {
        horizontal: 1.0,
        jump_pressed: true,
        ..InputSample::default()
    });
    for _ in 0..60 {
        tape.push(InputSample::walk(1.0));
    }
    for i in 0..120 {
        tape.push(InputSample {
            horizontal: 1.0,
            fire_pressed: i % 20 == 0,
            ..InputSample::default()
        });
    }
    tape
}

fn load_tape(path: &PathBuf) -> Result<Vec<InputSample>, String> {
    let text =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read tape: {}", e))?;
    serde_json::from_str(&text).map_err(|e| format!("failed to parse tape: {}", e))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimConfig::with_path(path.clone()),
        None => SimConfig::new(),
    };
    if cli.config.is_some() {
        if let Err(e) = config.load_from_file() {
            warn!("config not loaded, using defaults: {}", e);
        }
    }

    let tape = match &cli.tape {
        Some(path) => match load_tape(path) {
            Ok(tape) => tape,
            Err(e) => {
                warn!("{}; falling back to the built-in script", e);
                builtin_tape()
            }
        },
        None => builtin_tape(),
    };

    let (mut sim, hooks) = Simulation::new(config);
    let mut physics = DemoPhysics::new(sim.player_position());
    let dt = 1.0 / cli.rate;

    for tick in 0..cli.ticks {
        let input = tape
            .get(tick as usize)
            .copied()
            .unwrap_or_else(InputSample::idle);

        physics.step(dt, &mut sim);
        sim.tick(dt, input);

        for cmd in hooks.physics.try_iter() {
            physics.apply(cmd);
        }
        for cmd in hooks.presentation.try_iter() {
            log::debug!("[pose] {:?}", cmd);
        }
        for cue in hooks.audio.try_iter() {
            info!("[audio] {:?}", cue);
        }
        for shot in hooks.shots.try_iter() {
            info!("[shot] {:?}", shot);
        }
    }

    let (elapsed, ticks) = sim.clock();
    let player = sim.player();
    info!(
        "done after {} ticks ({:.2}s): contact={:?} aim=({}, {}) pos={:?}",
        ticks,
        elapsed,
        player.contact,
        player.aim.x,
        player.aim.y,
        sim.player_position()
    );
}
