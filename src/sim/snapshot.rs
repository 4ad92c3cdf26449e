//! Read-only render state handed to the host every frame

use serde::Serialize;

use super::avatar::Stance;
use super::cloud::Cloud;
use super::collision::Aabb;
use super::obstacle::Obstacle;
use super::particle::Particle;
use super::state::{Lifecycle, Session};
use super::theme::{Palette, ThemeMode};
use crate::error::Result;

/// What the renderer needs to draw the avatar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvatarPose {
    pub bounds: Aabb,
    pub stance: Stance,
    /// 0 or 1, alternating leg frame
    pub leg_phase: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub stage: usize,
    pub palette: Palette,
}

/// Everything visible in one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub lifecycle: Lifecycle,
    pub frame: u64,
    pub score: u64,
    pub high_score: u64,
    pub speed: f32,
    pub avatar: AvatarPose,
    pub obstacles: Vec<Obstacle>,
    pub particles: Vec<Particle>,
    pub clouds: Vec<Cloud>,
    pub theme: ThemeState,
}

impl RenderSnapshot {
    pub fn capture(session: &Session) -> Self {
        let avatar = session.avatar();
        let stage = session.theme_stage();
        let mode = session.theme_mode();
        Self {
            lifecycle: session.lifecycle(),
            frame: session.frame(),
            score: session.score(),
            high_score: session.high_score(),
            speed: session.speed(),
            avatar: AvatarPose {
                bounds: avatar.bounds(),
                stance: avatar.stance,
                leg_phase: avatar.leg_phase(session.tuning().animation_speed),
            },
            obstacles: session.obstacles().obstacles().to_vec(),
            particles: session.particles().particles().to_vec(),
            clouds: session.clouds().to_vec(),
            theme: ThemeState {
                mode,
                stage,
                palette: mode.palette(stage),
            },
        }
    }

    /// Score to show in the HUD's "best" slot while a run is still going
    pub fn display_high_score(&self) -> u64 {
        self.high_score.max(self.score)
    }

    /// Serialize for hosts that render outside Rust
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
