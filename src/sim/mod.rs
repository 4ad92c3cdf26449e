//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per `tick` call, no internal timing
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod avatar;
pub mod cloud;
pub mod collision;
pub mod difficulty;
pub mod obstacle;
pub mod particle;
pub mod snapshot;
pub mod state;
pub mod theme;
pub mod tick;

pub use avatar::{Avatar, Stance, max_jump_height};
pub use cloud::Cloud;
pub use collision::{Aabb, Inset};
pub use difficulty::Difficulty;
pub use obstacle::{AdvanceOutcome, Obstacle, ObstacleField, ObstacleKind};
pub use particle::{Particle, ParticleColor, ParticleSystem};
pub use snapshot::{AvatarPose, RenderSnapshot, ThemeState};
pub use state::{GameEvent, Lifecycle, Session};
pub use theme::{Palette, Rgba, ThemeMode};
pub use tick::{TickInput, tick};
