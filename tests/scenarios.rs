use dino_runner::sim::{GameEvent, Lifecycle, Session, Stance, TickInput};
use dino_runner::tuning::Tuning;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Obstacles too flat to ever touch the avatar's hitbox
fn harmless_obstacles(obstacle_interval: u64) -> Tuning {
    let mut tuning = Tuning {
        obstacle_interval,
        obstacle_heights: [5.0, 5.0],
        obstacle_widths: [20.0, 20.0],
        ..Default::default()
    };
    tuning.avatar_inset.bottom = 5.0;
    tuning
}

fn run(session: &mut Session, ticks: usize, input: TickInput) {
    for _ in 0..ticks {
        session.tick(&input);
    }
}

#[test]
fn speed_after_1000_ticks_without_collisions() {
    let tuning = Tuning {
        obstacle_interval: 1_000_000,
        ..Default::default()
    };
    let mut session = Session::with_tuning(tuning, 7).unwrap();
    session.start();
    run(&mut session, 1000, TickInput::default());
    assert_eq!(session.lifecycle(), Lifecycle::Running);
    assert_eq!(session.speed(), 5.5);
    assert_eq!(session.theme_stage(), 1);
}

#[test]
fn single_obstacle_passes_164_ticks_after_spawn() {
    let tuning = Tuning {
        speed_increment: 0.0,
        ..harmless_obstacles(1000)
    };
    let mut session = Session::with_tuning(tuning, 11).unwrap();
    session.start();

    run(&mut session, 999, TickInput::default());
    session.tick(&TickInput::default());
    let spawned = session
        .events()
        .iter()
        .find_map(|e| match e {
            GameEvent::ObstacleSpawned { id } => Some(*id),
            _ => None,
        })
        .expect("obstacle spawned on tick 1000");

    let mut pass_ticks = Vec::new();
    for after_spawn in 1..=400 {
        session.tick(&TickInput::default());
        for event in session.events() {
            if let GameEvent::ObstaclePassed { id, bonus } = event {
                assert_eq!(*id, spawned);
                assert_eq!(*bonus, 5);
                pass_ticks.push(after_spawn);
            }
        }
    }
    assert_eq!(pass_ticks, vec![164]);
}

#[test]
fn repeated_jump_mid_air_changes_nothing() {
    let mut once = Session::new(2024);
    let mut twice = Session::new(2024);
    once.start();
    twice.start();

    once.tick(&TickInput::jump());
    twice.tick(&TickInput::jump());
    assert_eq!(once.avatar().stance, Stance::Jumping);

    // Well inside the ~50 tick flight
    for t in 0..40 {
        let repeat = if t % 3 == 0 { TickInput::jump() } else { TickInput::default() };
        let a = once.tick(&TickInput::default());
        let b = twice.tick(&repeat);
        assert_eq!(a, b, "diverged at tick {t}");
    }
    assert_eq!(twice.avatar().stance, Stance::Jumping);
}

#[test]
fn crouch_mid_air_rejected() {
    let mut session = Session::new(5);
    session.start();
    session.tick(&TickInput::jump());
    let before = session.avatar().clone();
    session.tick(&TickInput::crouch());
    let after = session.avatar();
    assert_eq!(after.stance, Stance::Jumping);
    assert_eq!(after.height, before.height);
}

#[test]
fn jump_stays_jumping_until_landing() {
    let mut session = Session::new(5);
    session.start();
    session.tick(&TickInput::jump());
    let mut stances = Vec::new();
    while session.avatar().stance == Stance::Jumping {
        // Holding crouch the whole flight must not interrupt the jump
        session.tick(&TickInput::crouch());
        stances.push(session.avatar().stance);
    }
    let landed = stances.pop();
    assert!(stances.iter().all(|s| *s == Stance::Jumping));
    assert_eq!(landed, Some(Stance::Grounded));
    assert_eq!(session.avatar().pos.y, session.tuning().baseline_y());
}

#[test]
fn reset_after_game_over_banks_high_score() {
    let mut session = Session::new(3).with_high_score(2);
    session.start();
    while session.lifecycle() == Lifecycle::Running {
        session.tick(&TickInput::default());
    }
    let final_score = session.score();
    assert!(final_score > 2);
    assert_eq!(session.high_score(), final_score);

    let snap = session.reset();
    assert_eq!(snap.score, 0);
    assert_eq!(snap.high_score, final_score);
    assert_eq!(snap.lifecycle, Lifecycle::Running);
    assert!(snap.obstacles.is_empty());
    assert!(snap.particles.is_empty());
    assert_eq!(session.events(), &[GameEvent::Started]);

    // A worse second run leaves the high score alone
    let snap = session.reset();
    assert_eq!(snap.high_score, final_score);
}

#[test]
fn theme_toggle_and_override_do_not_disturb_cycle() {
    let tuning = Tuning {
        obstacle_interval: 1_000_000,
        ..Default::default()
    };
    let mut session = Session::with_tuning(tuning, 1).unwrap();
    session.start();
    session.toggle_theme();
    session.set_theme_stage_override(3);
    run(&mut session, 1000, TickInput::default());
    let snap = session.snapshot();
    assert_eq!(snap.theme.stage, 4);
    assert_eq!(snap.theme.palette, dino_runner::sim::theme::DARK_PALETTES[4]);
}

#[test]
fn injected_generator_matches_seeded_constructor() {
    let tuning = Tuning::default();
    let mut a = Session::with_rng(tuning.clone(), Pcg32::seed_from_u64(77)).unwrap();
    let mut b = Session::with_tuning(tuning, 77).unwrap();
    for i in 0..400 {
        let input = if i % 45 == 0 { TickInput::jump() } else { TickInput::default() };
        assert_eq!(a.tick(&input), b.tick(&input));
    }
}

#[test]
fn session_can_move_between_threads() {
    fn assert_send<T: Send>() {}
    assert_send::<Session>();

    let mut session = Session::new(1);
    session.start();
    let handle = std::thread::spawn(move || {
        session.tick(&TickInput::default());
        session
    });
    let session = handle.join().unwrap();
    assert_eq!(session.frame(), 1);
}
