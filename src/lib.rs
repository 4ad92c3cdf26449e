//! Dino Runner - An endless side-scrolling obstacle runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (avatar physics, obstacles, collisions, particles, session)
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (theme, particle quality)
//!
//! The crate emits an abstract render state every tick; drawing, input devices
//! and frame scheduling belong to the host.

pub mod error;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::Error;
pub use settings::{QualityPreset, Settings};
pub use sim::{RenderSnapshot, Session, TickInput};
pub use tuning::Tuning;

/// Game configuration constants
///
/// Screen space: x grows to the right, y grows downward.
pub mod consts {
    /// Playfield width; obstacles spawn at this x
    pub const CANVAS_WIDTH: f32 = 800.0;
    /// Ground line (bottom edge of standing avatar and of every obstacle)
    pub const GROUND_Y: f32 = 190.0;

    /// Avatar defaults
    pub const AVATAR_X: f32 = 80.0;
    pub const AVATAR_WIDTH: f32 = 40.0;
    pub const AVATAR_STANDING_HEIGHT: f32 = 40.0;
    pub const AVATAR_CROUCH_HEIGHT: f32 = 25.0;
    /// Downward acceleration per tick while airborne
    pub const GRAVITY: f32 = 0.4;
    /// Initial vertical velocity of a jump (negative = up)
    pub const JUMP_IMPULSE: f32 = -10.0;
    pub const MAX_FALL_SPEED: f32 = 8.0;
    /// Ticks per leg animation frame
    pub const ANIMATION_SPEED: u32 = 5;

    /// Ticks between obstacle spawns
    pub const OBSTACLE_INTERVAL: u64 = 90;
    pub const OBSTACLE_HEIGHTS: [f32; 2] = [40.0, 30.0];
    pub const OBSTACLE_WIDTHS: [f32; 2] = [20.0, 25.0];

    /// Scroll speed (pixels per tick)
    pub const BASE_SPEED: f32 = 5.0;
    pub const SPEED_INCREMENT: f32 = 0.25;
    pub const SPEED_INTERVAL: u64 = 500;

    /// Time-based score accrual
    pub const SCORE_INTERVAL: u64 = 10;
    pub const SCORE_PER_INTERVAL: u64 = 1;
    /// Bonus for each obstacle that scrolls off screen
    pub const PASS_BONUS: u64 = 5;

    /// Ticks per theme stage
    pub const THEME_INTERVAL: u64 = 1000;

    pub const JUMP_PARTICLES: usize = 10;
    pub const COLLISION_PARTICLES: usize = 30;
    /// Default live-particle cap (oldest evicted first)
    pub const MAX_PARTICLES: usize = 256;

    pub const CLOUD_COUNT: usize = 3;
}
