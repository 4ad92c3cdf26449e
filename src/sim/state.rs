//! Session state and lifecycle
//!
//! A `Session` owns one playthrough's worth of mutable state plus the high
//! score that survives resets. It is `Send` but not internally locked: hosts
//! that tick from several threads must serialize access themselves.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::cloud::{self, Cloud};
use super::difficulty::Difficulty;
use super::obstacle::ObstacleField;
use super::particle::ParticleSystem;
use super::snapshot::RenderSnapshot;
use super::theme::ThemeMode;
use super::tick::{TickInput, tick};
use crate::error::Result;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Created, waiting for the first input
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended by a collision; only `reset` leaves this state
    GameOver,
}

/// Things that happened during the most recent `tick`/`reset` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Jumped,
    ObstacleSpawned { id: u32 },
    ObstaclePassed { id: u32, bonus: u64 },
    Collision { id: u32 },
    SpeedIncreased { speed: f32 },
    ThemeAdvanced { stage: usize },
    GameOver { score: u64, high_score: u64, new_high_score: bool },
}

/// Top-level owner of all simulation state
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) tuning: Tuning,
    /// `None` when the generator was supplied by the caller
    pub(crate) seed: Option<u64>,
    pub(crate) rng: Pcg32,
    pub(crate) lifecycle: Lifecycle,
    pub(crate) score: u64,
    pub(crate) high_score: u64,
    /// Running ticks since the last reset
    pub(crate) frame: u64,
    pub(crate) avatar: Avatar,
    pub(crate) obstacles: ObstacleField,
    pub(crate) particles: ParticleSystem,
    pub(crate) clouds: Vec<Cloud>,
    pub(crate) difficulty: Difficulty,
    pub(crate) theme_mode: ThemeMode,
    pub(crate) events: Vec<GameEvent>,
}

impl Session {
    /// Default balance, RNG seeded from `seed`
    pub fn new(seed: u64) -> Self {
        Self::build(Tuning::default(), Some(seed), Pcg32::seed_from_u64(seed))
    }

    /// Custom balance; fails if the tuning breaks an invariant
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Result<Self> {
        tuning.validate()?;
        Ok(Self::build(tuning, Some(seed), Pcg32::seed_from_u64(seed)))
    }

    /// Custom balance and a caller-supplied generator
    pub fn with_rng(tuning: Tuning, rng: Pcg32) -> Result<Self> {
        tuning.validate()?;
        Ok(Self::build(tuning, None, rng))
    }

    fn build(tuning: Tuning, seed: Option<u64>, mut rng: Pcg32) -> Self {
        let clouds = cloud::scatter(tuning.cloud_count, tuning.canvas_width, &mut rng);
        Self {
            avatar: Avatar::new(&tuning),
            obstacles: ObstacleField::new(),
            particles: ParticleSystem::new(tuning.max_particles),
            clouds,
            difficulty: Difficulty::new(&tuning),
            theme_mode: ThemeMode::default(),
            lifecycle: Lifecycle::NotStarted,
            score: 0,
            high_score: 0,
            frame: 0,
            events: Vec::new(),
            tuning,
            seed,
            rng,
        }
    }

    /// Restore a persisted high score
    pub fn with_high_score(mut self, high_score: u64) -> Self {
        self.high_score = high_score;
        self
    }

    /// Adopt player preferences. The quality preset's particle budget
    /// replaces the tuning default.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.theme_mode = settings.theme;
        self.particles.set_cap(settings.max_particles());
    }

    /// Begin the first run. Equivalent to `reset` from `NotStarted`; ignored
    /// once a run has begun.
    pub fn start(&mut self) -> RenderSnapshot {
        if self.lifecycle == Lifecycle::NotStarted {
            self.reset()
        } else {
            self.snapshot()
        }
    }

    /// Discard the current run and begin a fresh one. Always succeeds.
    pub fn reset(&mut self) -> RenderSnapshot {
        self.events.clear();
        self.high_score = self.high_score.max(self.score);
        self.score = 0;
        self.frame = 0;
        self.avatar.reset(&self.tuning);
        self.obstacles.clear();
        self.particles.clear();
        self.difficulty.reset(&self.tuning);
        self.lifecycle = Lifecycle::Running;
        self.events.push(GameEvent::Started);
        log::info!("Run started (high score {})", self.high_score);
        self.snapshot()
    }

    /// Advance exactly one frame
    pub fn tick(&mut self, input: &TickInput) -> RenderSnapshot {
        tick(self, input);
        self.snapshot()
    }

    /// End the run after a collision with obstacle `id`
    pub(crate) fn end(&mut self, id: u32) {
        let new_high_score = self.score > self.high_score;
        self.high_score = self.high_score.max(self.score);
        self.lifecycle = Lifecycle::GameOver;
        self.events.push(GameEvent::Collision { id });
        self.events.push(GameEvent::GameOver {
            score: self.score,
            high_score: self.high_score,
            new_high_score,
        });
        log::info!(
            "Game over at tick {}: score {}, high score {}{}",
            self.frame,
            self.score,
            self.high_score,
            if new_high_score { " (new!)" } else { "" }
        );
    }

    /// Flip between the light and dark palette families
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        log::info!("Theme switched to {}", self.theme_mode.as_str());
    }

    /// Jump straight to a theme stage (wraps past the last stage)
    pub fn set_theme_stage_override(&mut self, stage: usize) {
        self.difficulty.set_theme_stage(stage);
        log::debug!("Theme stage overridden to {}", self.difficulty.theme_stage);
    }

    /// Current render state
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn speed(&self) -> f32 {
        self.difficulty.speed
    }

    pub fn theme_stage(&self) -> usize {
        self.difficulty.theme_stage
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn obstacles(&self) -> &ObstacleField {
        &self.obstacles
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Seed the generator was built from, if this session seeded it
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Events recorded by the most recent `tick`/`reset` call
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::avatar::Stance;
    use crate::settings::QualityPreset;
    use crate::sim::obstacle::ObstacleKind;

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new(1);
        assert_eq!(session.lifecycle(), Lifecycle::NotStarted);
        assert_eq!(session.score(), 0);
        assert_eq!(session.clouds().len(), 3);
        assert!(session.obstacles().is_empty());
    }

    #[test]
    fn test_start_only_once() {
        let mut session = Session::new(1);
        session.start();
        assert_eq!(session.lifecycle(), Lifecycle::Running);
        assert_eq!(session.events(), &[GameEvent::Started]);

        session.score = 42;
        session.start();
        assert_eq!(session.score(), 42);
    }

    #[test]
    fn test_end_snapshots_high_score() {
        let mut session = Session::new(1).with_high_score(10);
        session.start();
        session.score = 25;
        session.end(3);
        assert_eq!(session.lifecycle(), Lifecycle::GameOver);
        assert_eq!(session.high_score(), 25);
        assert_eq!(
            session.events().last(),
            Some(&GameEvent::GameOver {
                score: 25,
                high_score: 25,
                new_high_score: true
            })
        );
    }

    #[test]
    fn test_end_below_high_score_keeps_it() {
        let mut session = Session::new(1).with_high_score(100);
        session.start();
        session.score = 25;
        session.end(3);
        assert_eq!(session.high_score(), 100);
    }

    #[test]
    fn test_reset_clears_run_but_keeps_high_score() {
        let mut session = Session::new(9);
        session.start();
        let tuning = session.tuning().clone();
        session.obstacles.push(300.0, 20.0, 40.0, ObstacleKind::Rock, &tuning);
        session.avatar.jump(&tuning);
        session.score = 77;
        session.frame = 1234;
        session.difficulty.speed = 9.0;
        session.difficulty.theme_stage = 3;
        session.end(1);

        let snap = session.reset();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.high_score, 77);
        assert_eq!(session.frame(), 0);
        assert_eq!(session.speed(), tuning.base_speed);
        assert_eq!(session.theme_stage(), 0);
        assert!(session.obstacles().is_empty());
        assert!(session.particles().is_empty());
        assert_eq!(session.avatar().stance, Stance::Grounded);
        assert_eq!(session.avatar().pos.y, tuning.baseline_y());
        assert_eq!(session.lifecycle(), Lifecycle::Running);
    }

    #[test]
    fn test_reset_while_running_banks_score() {
        let mut session = Session::new(2);
        session.start();
        session.score = 30;
        let snap = session.reset();
        assert_eq!(snap.high_score, 30);
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn test_theme_controls() {
        let mut session = Session::new(2);
        session.toggle_theme();
        assert_eq!(session.theme_mode(), ThemeMode::Dark);
        session.set_theme_stage_override(6);
        assert_eq!(session.theme_stage(), 1);
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let tuning = Tuning {
            score_interval: 0,
            ..Default::default()
        };
        assert!(Session::with_tuning(tuning, 1).is_err());
    }

    #[test]
    fn test_apply_settings() {
        let mut session = Session::new(2);
        let settings = Settings {
            theme: ThemeMode::Dark,
            particles: false,
            ..Default::default()
        };
        session.apply_settings(&settings);
        assert_eq!(session.theme_mode(), ThemeMode::Dark);
        assert_eq!(session.particles().cap(), 0);
    }

    #[test]
    fn test_quality_preset_sets_particle_cap() {
        let mut session = Session::new(2);
        session.apply_settings(&Settings::from_preset(QualityPreset::High));
        assert_eq!(session.particles().cap(), 1024);
        session.apply_settings(&Settings::from_preset(QualityPreset::Low));
        assert_eq!(session.particles().cap(), 64);
        session.apply_settings(&Settings::default());
        assert_eq!(session.particles().cap(), 256);
    }

    #[test]
    fn test_high_preset_keeps_big_bursts() {
        let mut session = Session::new(2);
        session.apply_settings(&Settings::from_preset(QualityPreset::High));
        let tuning = session.tuning().clone();
        for _ in 0..12 {
            session
                .particles
                .emit_collision(glam::Vec2::ZERO, &tuning.collision_burst, &mut session.rng);
        }
        assert_eq!(session.particles().len(), 360);
    }

    #[test]
    fn test_seed_reported_only_when_owned() {
        assert_eq!(Session::new(31).seed(), Some(31));
        let injected = Session::with_rng(Tuning::default(), Pcg32::seed_from_u64(31)).unwrap();
        assert_eq!(injected.seed(), None);
    }
}
