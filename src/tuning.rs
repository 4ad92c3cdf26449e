//! Data-driven game balance
//!
//! Every number the simulation uses lives here so hosts can rebalance the game
//! from JSON without recompiling. Partial documents are fine: missing fields
//! keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::collision::Inset;

/// Half-open `[min, max)` range used for randomized draws
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Symmetric range around zero
    pub const fn centered(half_width: f32) -> Self {
        Self {
            min: -half_width,
            max: half_width,
        }
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// Shape of one particle burst
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurstTuning {
    pub count: usize,
    pub size: Span,
    pub speed_x: Span,
    pub speed_y: Span,
    /// Lifetime in ticks, `[min, max)`
    pub life_min: u32,
    pub life_max: u32,
}

impl BurstTuning {
    pub fn jump() -> Self {
        Self {
            count: JUMP_PARTICLES,
            size: Span::new(1.0, 4.0),
            speed_x: Span::centered(1.5),
            speed_y: Span::new(1.0, 3.0),
            life_min: 10,
            life_max: 30,
        }
    }

    pub fn collision() -> Self {
        Self {
            count: COLLISION_PARTICLES,
            size: Span::new(2.0, 6.0),
            speed_x: Span::centered(3.0),
            speed_y: Span::centered(3.0),
            life_min: 20,
            life_max: 50,
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if !(self.size.is_valid() && self.speed_x.is_valid() && self.speed_y.is_valid()) {
            return Err(Error::InvalidTuning(format!("{name}: empty or inverted range")));
        }
        if self.size.min <= 0.0 {
            return Err(Error::InvalidTuning(format!("{name}: particle size must be positive")));
        }
        if self.life_min == 0 || self.life_min >= self.life_max {
            return Err(Error::InvalidTuning(format!(
                "{name}: lifetime range {}..{} is empty",
                self.life_min, self.life_max
            )));
        }
        Ok(())
    }
}

/// Complete balance sheet for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub canvas_width: f32,
    pub ground_y: f32,

    pub avatar_x: f32,
    pub avatar_width: f32,
    pub standing_height: f32,
    pub crouch_height: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub max_fall_speed: f32,
    pub animation_speed: u32,
    pub avatar_inset: Inset,

    pub obstacle_interval: u64,
    pub obstacle_heights: [f32; 2],
    pub obstacle_widths: [f32; 2],
    pub obstacle_inset: Inset,

    pub base_speed: f32,
    pub speed_increment: f32,
    pub speed_interval: u64,

    pub score_interval: u64,
    pub score_per_interval: u64,
    pub pass_bonus: u64,

    pub theme_interval: u64,

    pub jump_burst: BurstTuning,
    pub collision_burst: BurstTuning,
    /// Particle cap until a quality preset replaces it
    pub max_particles: usize,

    pub cloud_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            ground_y: GROUND_Y,

            avatar_x: AVATAR_X,
            avatar_width: AVATAR_WIDTH,
            standing_height: AVATAR_STANDING_HEIGHT,
            crouch_height: AVATAR_CROUCH_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            max_fall_speed: MAX_FALL_SPEED,
            animation_speed: ANIMATION_SPEED,
            // Shave the sides and head; feet stay exact
            avatar_inset: Inset::new(5.0, 5.0, 5.0, 0.0),

            obstacle_interval: OBSTACLE_INTERVAL,
            obstacle_heights: OBSTACLE_HEIGHTS,
            obstacle_widths: OBSTACLE_WIDTHS,
            obstacle_inset: Inset::uniform(2.0),

            base_speed: BASE_SPEED,
            speed_increment: SPEED_INCREMENT,
            speed_interval: SPEED_INTERVAL,

            score_interval: SCORE_INTERVAL,
            score_per_interval: SCORE_PER_INTERVAL,
            pass_bonus: PASS_BONUS,

            theme_interval: THEME_INTERVAL,

            jump_burst: BurstTuning::jump(),
            collision_burst: BurstTuning::collision(),
            max_particles: MAX_PARTICLES,

            cloud_count: CLOUD_COUNT,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Standing avatar's top edge when its feet rest on the ground line
    #[inline]
    pub fn baseline_y(&self) -> f32 {
        self.ground_y - self.standing_height
    }

    /// Reject values that would break simulation invariants
    pub fn validate(&self) -> Result<()> {
        let cadences = [
            ("obstacle_interval", self.obstacle_interval),
            ("speed_interval", self.speed_interval),
            ("score_interval", self.score_interval),
            ("theme_interval", self.theme_interval),
            ("animation_speed", self.animation_speed as u64),
        ];
        for (name, value) in cadences {
            if value == 0 {
                return Err(Error::InvalidTuning(format!("{name} must be at least one tick")));
            }
        }

        let positives = [
            ("canvas_width", self.canvas_width),
            ("avatar_width", self.avatar_width),
            ("standing_height", self.standing_height),
            ("crouch_height", self.crouch_height),
            ("gravity", self.gravity),
            ("max_fall_speed", self.max_fall_speed),
            ("base_speed", self.base_speed),
        ];
        for (name, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidTuning(format!("{name} must be positive, got {value}")));
            }
        }
        for (i, (&w, &h)) in self
            .obstacle_widths
            .iter()
            .zip(self.obstacle_heights.iter())
            .enumerate()
        {
            if !(w > 0.0 && h > 0.0) {
                return Err(Error::InvalidTuning(format!("obstacle class {i} has no area")));
            }
            if !self.obstacle_inset.fits(w, h) {
                return Err(Error::InvalidTuning(format!(
                    "obstacle_inset swallows obstacle class {i}"
                )));
            }
        }

        if self.crouch_height > self.standing_height {
            return Err(Error::InvalidTuning(
                "crouch_height exceeds standing_height".to_string(),
            ));
        }
        if !self
            .avatar_inset
            .fits(self.avatar_width, self.crouch_height)
        {
            return Err(Error::InvalidTuning(
                "avatar_inset swallows the crouching avatar".to_string(),
            ));
        }
        if !(self.jump_impulse.is_finite() && self.jump_impulse < 0.0) {
            return Err(Error::InvalidTuning(
                "jump_impulse must point upward (negative)".to_string(),
            ));
        }
        if self.jump_impulse + self.gravity <= self.jump_impulse {
            return Err(Error::InvalidTuning(format!(
                "gravity {} is too small to slow a jump of {}",
                self.gravity, self.jump_impulse
            )));
        }
        if !(self.speed_increment.is_finite() && self.speed_increment >= 0.0) {
            return Err(Error::InvalidTuning(
                "speed_increment must not slow the game down".to_string(),
            ));
        }

        self.jump_burst.validate("jump_burst")?;
        self.collision_burst.validate("collision_burst")?;
        if self.max_particles == 0 {
            return Err(Error::InvalidTuning("max_particles must be non-zero".to_string()));
        }

        Ok(())
    }
}
