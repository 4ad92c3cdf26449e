//! Player avatar: vertical physics and stance state machine

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Inset};
use crate::tuning::Tuning;

/// Mutually exclusive avatar stances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Stance {
    /// Standing on the ground line
    #[default]
    Grounded,
    /// Airborne until the feet touch the ground line again
    Jumping,
    /// Ducked on the ground, shorter hitbox
    Crouching,
}

/// The player-controlled runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    pub width: f32,
    /// Always the preset that matches `stance`
    pub height: f32,
    /// Vertical velocity (negative = up)
    pub vel_y: f32,
    pub stance: Stance,
    /// Ticks since reset, drives the leg animation
    pub frame_count: u32,
}

impl Avatar {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.avatar_x, tuning.baseline_y()),
            width: tuning.avatar_width,
            height: tuning.standing_height,
            vel_y: 0.0,
            stance: Stance::Grounded,
            frame_count: 0,
        }
    }

    /// Back to standing at rest on the ground
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    /// Start a jump. Only legal while grounded.
    pub fn jump(&mut self, tuning: &Tuning) -> bool {
        if self.stance != Stance::Grounded {
            return false;
        }
        self.vel_y = tuning.jump_impulse;
        self.stance = Stance::Jumping;
        self.height = tuning.standing_height;
        true
    }

    /// Duck down keeping the feet on the ground line. Only legal while grounded.
    pub fn crouch(&mut self, tuning: &Tuning) -> bool {
        if self.stance != Stance::Grounded {
            return false;
        }
        self.stance = Stance::Crouching;
        self.height = tuning.crouch_height;
        self.pos.y = tuning.ground_y - tuning.crouch_height;
        true
    }

    /// Leave the crouch. No-op in any other stance.
    pub fn stand_up(&mut self, tuning: &Tuning) -> bool {
        if self.stance != Stance::Crouching {
            return false;
        }
        self.stance = Stance::Grounded;
        self.height = tuning.standing_height;
        self.pos.y = tuning.baseline_y();
        true
    }

    /// Feed one tick of held/pressed controls through the state machine.
    ///
    /// Order: crouch release, jump, crouch press. Returns true when a jump
    /// started this tick.
    pub fn apply_controls(&mut self, jump_requested: bool, crouch_held: bool, tuning: &Tuning) -> bool {
        if !crouch_held {
            self.stand_up(tuning);
        }
        let jumped = jump_requested && self.jump(tuning);
        if crouch_held {
            self.crouch(tuning);
        }
        jumped
    }

    /// Integrate one tick of vertical motion
    pub fn update(&mut self, tuning: &Tuning) {
        if self.stance == Stance::Jumping {
            self.vel_y = (self.vel_y + tuning.gravity).min(tuning.max_fall_speed);
            self.pos.y += self.vel_y;

            let baseline = tuning.baseline_y();
            if self.pos.y >= baseline {
                self.pos.y = baseline;
                self.vel_y = 0.0;
                self.stance = Stance::Grounded;
            }
        }
        self.frame_count = self.frame_count.wrapping_add(1);
    }

    /// Nominal rectangle
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Forgiving rectangle used for collision tests
    pub fn hitbox(&self, inset: &Inset) -> Aabb {
        self.bounds().inset(inset)
    }

    /// Which of the two leg frames to draw
    pub fn leg_phase(&self, animation_speed: u32) -> u32 {
        (self.frame_count / animation_speed.max(1)) % 2
    }
}

/// Ascent steps `max_jump_height` simulates before giving up
const MAX_ASCENT_TICKS: u32 = 100_000;

/// Highest rise above the baseline a single jump can reach under `tuning`.
///
/// Stops after `MAX_ASCENT_TICKS` for tunings whose gravity never turns the
/// jump around (rejected by `Tuning::validate`).
pub fn max_jump_height(tuning: &Tuning) -> f32 {
    let mut vel = tuning.jump_impulse;
    let mut rise = 0.0_f32;
    let mut best = 0.0_f32;
    for _ in 0..MAX_ASCENT_TICKS {
        vel = (vel + tuning.gravity).min(tuning.max_fall_speed);
        rise -= vel;
        best = best.max(rise);
        if vel >= 0.0 {
            break;
        }
    }
    best
}
