//! Time-driven difficulty and theme-stage scaling
//!
//! Both counters depend only on elapsed running ticks, never on score.

use serde::{Deserialize, Serialize};

use super::theme::PALETTE_STAGES;
use crate::tuning::Tuning;

/// Which counters moved on a given tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DifficultyStep {
    pub speed_increased: bool,
    pub theme_advanced: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Scroll speed in pixels per tick; never decreases within a session
    pub speed: f32,
    /// Index into the active palette family
    pub theme_stage: usize,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            speed: tuning.base_speed,
            theme_stage: 0,
        }
    }

    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    /// Apply the cadences for the 1-based running tick `tick`
    pub fn advance(&mut self, tick: u64, tuning: &Tuning) -> DifficultyStep {
        let mut step = DifficultyStep::default();
        if tick % tuning.speed_interval == 0 {
            self.speed += tuning.speed_increment;
            step.speed_increased = true;
        }
        if tick % tuning.theme_interval == 0 {
            self.theme_stage = (self.theme_stage + 1) % PALETTE_STAGES;
            step.theme_advanced = true;
        }
        step
    }

    /// Manual stage selection; wraps like the timed cycle does
    pub fn set_theme_stage(&mut self, stage: usize) {
        self.theme_stage = stage % PALETTE_STAGES;
    }
}
