//! Per-frame simulation step
//!
//! One call advances the session by exactly one frame. Order within a
//! running tick:
//! avatar controls + physics, obstacle spawn, obstacle advance/collide,
//! then (if still alive) particles, clouds, difficulty and score.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, Lifecycle, Session};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Jump pressed this frame (edge-triggered by the input adapter)
    pub jump_requested: bool,
    /// Crouch key/touch currently held
    pub crouch_held: bool,
}

impl TickInput {
    pub fn jump() -> Self {
        Self {
            jump_requested: true,
            crouch_held: false,
        }
    }

    pub fn crouch() -> Self {
        Self {
            jump_requested: false,
            crouch_held: true,
        }
    }
}

/// Advance the session by one frame
pub fn tick(session: &mut Session, input: &TickInput) {
    session.events.clear();

    let input = match session.lifecycle {
        Lifecycle::GameOver => return,
        Lifecycle::NotStarted => {
            // The first input only starts the run
            session.reset();
            TickInput::default()
        }
        Lifecycle::Running => *input,
    };

    session.frame += 1;
    let frame = session.frame;
    let tuning = &session.tuning;

    // Avatar
    if session
        .avatar
        .apply_controls(input.jump_requested, input.crouch_held, tuning)
    {
        let feet = session.avatar.bounds().bottom_center();
        session
            .particles
            .emit_jump(feet, &tuning.jump_burst, &mut session.rng);
        session.events.push(GameEvent::Jumped);
    }
    session.avatar.update(tuning);

    // Obstacles
    if let Some(id) = session
        .obstacles
        .maybe_spawn(frame, tuning, &mut session.rng)
    {
        session.events.push(GameEvent::ObstacleSpawned { id });
    }
    let hitbox = session.avatar.hitbox(&tuning.avatar_inset);
    let outcome = session
        .obstacles
        .advance_and_collide(session.difficulty.speed, &hitbox, tuning);

    for id in outcome.passed {
        session.score += tuning.pass_bonus;
        session.events.push(GameEvent::ObstaclePassed {
            id,
            bonus: tuning.pass_bonus,
        });
    }

    if let Some(id) = outcome.collided {
        let center = session.avatar.bounds().center();
        session
            .particles
            .emit_collision(center, &tuning.collision_burst, &mut session.rng);
        session.end(id);
        return;
    }

    // Effects
    session.particles.update();
    for cloud in session.clouds.iter_mut() {
        cloud.drift(tuning.canvas_width, &mut session.rng);
    }

    // Difficulty
    let step = session.difficulty.advance(frame, tuning);
    if step.speed_increased {
        log::debug!("Speed up to {} at tick {}", session.difficulty.speed, frame);
        session.events.push(GameEvent::SpeedIncreased {
            speed: session.difficulty.speed,
        });
    }
    if step.theme_advanced {
        log::debug!("Theme stage {} at tick {}", session.difficulty.theme_stage, frame);
        session.events.push(GameEvent::ThemeAdvanced {
            stage: session.difficulty.theme_stage,
        });
    }

    // Score
    if frame % tuning.score_interval == 0 {
        session.score += tuning.score_per_interval;
    }
}
