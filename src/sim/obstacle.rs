//! Obstacle spawning, scrolling, collision and retirement

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, Inset};
use crate::tuning::Tuning;

/// Obstacle look. Purely visual: every kind collides the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Spike,
    Rock,
    Bush,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Spike, ObstacleKind::Rock, ObstacleKind::Bush];
}

/// An obstacle scrolling toward the avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub x: f32,
    /// Top edge; the bottom always sits on the ground line
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: ObstacleKind,
    /// Set on the obstacle that ended the session
    pub hit: bool,
}

impl Obstacle {
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    pub fn hitbox(&self, inset: &Inset) -> Aabb {
        self.bounds().inset(inset)
    }

    /// Right edge has crossed the left screen boundary
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// What happened to the obstacle field during one advance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvanceOutcome {
    /// Obstacles retired off the left edge, in iteration order
    pub passed: Vec<u32>,
    /// First obstacle that overlapped the avatar, if any
    pub collided: Option<u32>,
}

/// The set of in-flight obstacles, ordered by spawn (oldest first)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Spawn one obstacle on the spawn cadence. `tick` is the 1-based count of
    /// running ticks.
    pub fn maybe_spawn<R: Rng + ?Sized>(&mut self, tick: u64, tuning: &Tuning, rng: &mut R) -> Option<u32> {
        if tick % tuning.obstacle_interval != 0 {
            return None;
        }
        Some(self.spawn(tuning, rng))
    }

    /// Spawn one obstacle at the right boundary with randomized size and look
    pub fn spawn<R: Rng + ?Sized>(&mut self, tuning: &Tuning, rng: &mut R) -> u32 {
        let height = tuning.obstacle_heights[rng.random_range(0..2usize)];
        let width = tuning.obstacle_widths[rng.random_range(0..2usize)];
        let kind = ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())];
        self.push(tuning.canvas_width, width, height, kind, tuning)
    }

    /// Place a specific obstacle (bottom on the ground line)
    pub fn push(&mut self, x: f32, width: f32, height: f32, kind: ObstacleKind, tuning: &Tuning) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.obstacles.push(Obstacle {
            id,
            x,
            y: tuning.ground_y - height,
            width,
            height,
            kind,
            hit: false,
        });
        id
    }

    /// Scroll every obstacle left by `speed`, test it against the avatar
    /// hitbox, and retire the ones that left the screen.
    ///
    /// The first colliding obstacle wins: it is flagged `hit`, stays in the
    /// field, and nothing after it is moved or evaluated this tick.
    /// Retirement is marked during the pass and compacted once at the end,
    /// so removals never cause a neighbour to be skipped.
    pub fn advance_and_collide(&mut self, speed: f32, avatar_hitbox: &Aabb, tuning: &Tuning) -> AdvanceOutcome {
        let mut outcome = AdvanceOutcome::default();

        for obstacle in self.obstacles.iter_mut() {
            obstacle.x -= speed;

            if avatar_hitbox.intersects(&obstacle.hitbox(&tuning.obstacle_inset)) {
                obstacle.hit = true;
                outcome.collided = Some(obstacle.id);
                break;
            }

            if obstacle.is_off_screen() {
                outcome.passed.push(obstacle.id);
            }
        }

        if !outcome.passed.is_empty() {
            self.obstacles.retain(|o| !o.is_off_screen());
        }
        outcome
    }
}
