//! Short-lived visual effect particles
//!
//! Particles never affect gameplay. Two sources emit them: a jump (dust
//! puff under the feet) and a collision (burst from the avatar's center).

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::BurstTuning;

/// Color tag resolved by the renderer against the active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    Jump,
    Collision,
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: ParticleColor,
    /// Remaining ticks
    pub life: u32,
}

impl Particle {
    /// Advance one tick. Returns false once expired.
    pub fn step(&mut self) -> bool {
        self.pos += self.vel;
        self.life = self.life.saturating_sub(1);
        self.life > 0
    }
}

/// Owns every live particle, bounded by a cap with oldest-first eviction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    cap: usize,
}

impl ParticleSystem {
    pub fn new(cap: usize) -> Self {
        Self {
            particles: Vec::with_capacity(cap.min(1024)),
            cap,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Change the cap, evicting the oldest particles if now over it
    pub fn set_cap(&mut self, cap: usize) {
        self.cap = cap;
        self.evict_overflow();
    }

    /// Dust puff at the avatar's feet
    pub fn emit_jump<R: Rng + ?Sized>(&mut self, feet: Vec2, burst: &BurstTuning, rng: &mut R) {
        self.emit(feet, burst, ParticleColor::Jump, rng);
    }

    /// Impact burst at the avatar's center
    pub fn emit_collision<R: Rng + ?Sized>(&mut self, center: Vec2, burst: &BurstTuning, rng: &mut R) {
        self.emit(center, burst, ParticleColor::Collision, rng);
    }

    fn emit<R: Rng + ?Sized>(
        &mut self,
        origin: Vec2,
        burst: &BurstTuning,
        color: ParticleColor,
        rng: &mut R,
    ) {
        if self.cap == 0 {
            return;
        }
        for _ in 0..burst.count {
            let size = rng.random_range(burst.size.min..burst.size.max);
            let vel = Vec2::new(
                rng.random_range(burst.speed_x.min..burst.speed_x.max),
                rng.random_range(burst.speed_y.min..burst.speed_y.max),
            );
            let life = rng.random_range(burst.life_min..burst.life_max);
            self.particles.push(Particle {
                pos: origin,
                vel,
                size,
                color,
                life,
            });
        }
        self.evict_overflow();
    }

    fn evict_overflow(&mut self) {
        if self.particles.len() > self.cap {
            let excess = self.particles.len() - self.cap;
            self.particles.drain(..excess);
        }
    }

    /// Move every particle and drop the ones whose life ran out this tick
    pub fn update(&mut self) {
        self.particles.retain_mut(Particle::step);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
