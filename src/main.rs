//! Dino Runner headless driver
//!
//! Stands in for a host frame scheduler: runs the simulation for a fixed
//! number of frames with a simple autopilot and reports the results.

#![cfg_attr(target_arch = "wasm32", allow(dead_code, unused_imports))]

use std::path::PathBuf;

use clap::Parser;
use dino_runner::sim::{GameEvent, Lifecycle, RenderSnapshot, Session, TickInput};
use dino_runner::{QualityPreset, Settings};

/// Default frame budget (one minute at 60 fps)
const DEFAULT_FRAMES: u64 = 60 * 60;
/// How many ticks of travel ahead the autopilot starts its jump
const JUMP_LEAD_TICKS: f32 = 12.0;

#[derive(Parser, Debug)]
#[command(name = "dino-runner")]
#[command(about = "Run the obstacle runner headless with an autopilot")]
struct Cli {
    /// RNG seed for obstacle and particle draws
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of frames to simulate
    #[arg(long, default_value_t = DEFAULT_FRAMES)]
    frames: u64,

    /// Settings JSON file (theme, quality, particles)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Particle quality: low, med or high. Overrides the settings file.
    #[arg(long, value_parser = parse_quality)]
    quality: Option<QualityPreset>,
}

fn parse_quality(s: &str) -> Result<QualityPreset, String> {
    QualityPreset::from_str(s).ok_or_else(|| format!("unknown quality preset '{s}'"))
}

impl Cli {
    fn settings(&self) -> Settings {
        match (&self.settings, self.quality) {
            (Some(path), quality) => {
                let mut settings = Settings::load_from(path);
                if let Some(quality) = quality {
                    settings.quality = quality;
                }
                settings
            }
            (None, Some(quality)) => Settings::from_preset(quality),
            (None, None) => Settings::default(),
        }
    }
}

/// Jump when the next obstacle is about to reach the avatar
fn autopilot(snapshot: &RenderSnapshot) -> TickInput {
    let avatar = &snapshot.avatar.bounds;
    let lead = snapshot.speed * JUMP_LEAD_TICKS;
    let threat = snapshot
        .obstacles
        .iter()
        .filter(|o| o.x + o.width > avatar.x)
        .map(|o| o.x - avatar.right())
        .fold(f32::INFINITY, f32::min);

    TickInput {
        jump_requested: threat > 0.0 && threat <= lead,
        crouch_held: false,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let settings = cli.settings();
    let (seed, frames) = (cli.seed, cli.frames);

    log::info!(
        "Dino Runner (headless) starting: seed {seed}, {frames} frames, {} quality",
        settings.quality.as_str()
    );

    let mut session = Session::new(seed);
    session.apply_settings(&settings);

    let mut snapshot = session.start();
    let mut runs = 1;
    let mut passed = 0;
    let mut jumps = 0;

    for _ in 0..frames {
        if snapshot.lifecycle == Lifecycle::GameOver {
            snapshot = session.reset();
            runs += 1;
            continue;
        }
        snapshot = session.tick(&autopilot(&snapshot));
        for event in session.events() {
            match event {
                GameEvent::ObstaclePassed { .. } => passed += 1,
                GameEvent::Jumped => jumps += 1,
                _ => {}
            }
        }
    }

    println!("runs:        {runs}");
    println!("jumps:       {jumps}");
    println!("obstacles:   {passed}");
    println!("last score:  {}", snapshot.score);
    println!("high score:  {}", snapshot.display_high_score());
    println!("final speed: {:.2}", snapshot.speed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `Session::tick` from their own frame callback
}
