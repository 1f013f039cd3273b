use glam::{UVec2, Vec2};
use hecs::World;
use pong_core::*;
use rand::Rng;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn new_mode(seed: u64) -> KillerPongMode<RecordingRenderer> {
    init_logging();
    KillerPongMode::new(RecordingRenderer::default(), seed)
}

fn paddle_entity(world: &World, side: Side) -> hecs::Entity {
    world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(e, _)| e)
        .unwrap()
}

/// Put a ball into the world as the newest one, so the spawn timer follows it
fn place_ball(mode: &mut KillerPongMode<RecordingRenderer>, pos: Vec2, vel: Vec2) -> hecs::Entity {
    let e = create_ball(&mut mode.world, pos, vel, &mode.config);
    mode.spawner.last = Some(e);
    e
}

#[test]
fn test_center_strike_costs_right_paddle_one_hp() {
    let mut mode = new_mode(1);
    let right = paddle_entity(&mode.world, Side::Right);
    mode.world.get::<&mut Health>(right).unwrap().invincible_elapsed = 5.0;
    let ball = place_ball(&mut mode, Vec2::new(6.0, 0.0), Vec2::new(1.0, 0.0));

    // AI was idle: this tick it only chooses a direction, the paddle stays put
    mode.update(0.1);

    let snapshot = mode.snapshot();
    assert_eq!(snapshot.hp(Side::Right), 14);
    assert_eq!(snapshot.hp(Side::Left), 15);
    assert_eq!(mode.events.right_hp_lost, 1);
    let b = *mode.world.get::<&Ball>(ball).unwrap();
    assert!(b.vel.x < 0.0, "X velocity reversed");
    assert_eq!(b.vel.y, 0.0, "Center strike leaves Y velocity unchanged");
    assert!((b.pos.x - 6.1).abs() < 1e-5);
}

#[test]
fn test_top_wall_flips_and_clamps_in_same_tick() {
    let mut mode = new_mode(2);
    let ball = place_ball(&mut mode, Vec2::new(0.0, 4.79), Vec2::new(0.0, 1.0));

    mode.update(0.05);

    let b = *mode.world.get::<&Ball>(ball).unwrap();
    assert!(b.vel.y < 0.0);
    let limit = mode.config.court_radius.y - mode.config.ball_radius.y;
    assert_eq!(b.pos.y, limit);
}

#[test]
fn test_update_is_noop_once_complete() {
    let mut mode = new_mode(3);
    for _ in 0..30 {
        mode.update(0.1);
    }
    let left = paddle_entity(&mode.world, Side::Left);
    mode.world.get::<&mut Health>(left).unwrap().hp = 0;
    assert!(mode.is_complete());
    let before = mode.snapshot();
    let time = mode.time;
    let events = mode.events.clone();
    let spawner = mode.spawner;
    let mut rng = mode.rng.0.clone();

    for dt in [0.0, 0.016, 0.5, 3.0] {
        mode.update(dt);
    }

    assert_eq!(mode.snapshot(), before);
    assert_eq!(mode.time, time, "clock untouched, including dt");
    assert_eq!(mode.events, events);
    assert_eq!(mode.spawner, spawner);
    assert_eq!(mode.rng.0.gen::<u64>(), rng.gen::<u64>(), "no random draws");
    assert_eq!(mode.winner(), Some(Side::Right));
}

#[test]
fn test_paddles_stay_on_court() {
    let mut mode = new_mode(4);
    let limit = mode.config.court_radius.y - mode.config.paddle_radius.y;
    let size = UVec2::new(800, 600);
    mode.draw(size).unwrap();

    for i in 0..2000 {
        if mode.is_complete() {
            break;
        }
        // Sweep the pointer well past both edges of the window
        let py = ((i * 37) % 1400) as f32 - 400.0;
        mode.handle_event(
            &InputEvent::PointerMotion {
                pos: Vec2::new(10.0, py),
            },
            size,
        );
        mode.update(0.02);
        for p in &mode.snapshot().paddles {
            assert!(
                p.paddle.pos.y >= -limit && p.paddle.pos.y <= limit,
                "{:?} paddle at {}",
                p.paddle.side,
                p.paddle.pos.y
            );
        }
    }
}

#[test]
fn test_balls_stay_inside_walls() {
    let mut mode = new_mode(5);
    let bound = mode.config.court_radius - mode.config.ball_radius;

    for _ in 0..1500 {
        if mode.is_complete() {
            break;
        }
        mode.update(0.02);
        for b in &mode.snapshot().balls {
            assert!(b.ball.pos.x.abs() <= bound.x + 1e-5, "{:?}", b.ball);
            assert!(b.ball.pos.y.abs() <= bound.y + 1e-5, "{:?}", b.ball);
        }
    }
}

#[test]
fn test_spawn_count_after_full_intervals() {
    let mut mode = new_mode(6);
    // 0.25 is exact in binary, so ages land exactly on the interval
    let dt = 0.25;
    let per_interval = (mode.config.ball_create_interval / dt) as usize;

    for n in 1..=6 {
        for _ in 0..per_interval {
            mode.update(dt);
        }
        if mode.is_complete() {
            break;
        }
        assert!(
            mode.snapshot().balls.len() >= n,
            "after {n} intervals only {} balls",
            mode.snapshot().balls.len()
        );
    }
}

#[test]
fn test_balls_are_never_removed() {
    let mut mode = new_mode(7);
    let mut last = 0;
    for _ in 0..600 {
        if mode.is_complete() {
            break;
        }
        mode.update(0.05);
        let count = mode.snapshot().balls.len();
        assert!(count >= last);
        last = count;
    }
}

#[test]
fn test_hit_points_never_increase() {
    let mut mode = new_mode(8);
    let mut prev = (15, 15);
    for _ in 0..5000 {
        if mode.is_complete() {
            break;
        }
        mode.update(0.03);
        let s = mode.snapshot();
        let now = (s.hp(Side::Left), s.hp(Side::Right));
        assert!(now.0 <= prev.0 && now.1 <= prev.1);
        assert!(prev.0 - now.0 <= 1 && prev.1 - now.1 <= 1, "at most one hp per tick");
        prev = now;
    }
}

#[test]
fn test_invincibility_window_blocks_repeat_hits() {
    let mut mode = new_mode(9);
    let left = paddle_entity(&mode.world, Side::Left);
    mode.world.get::<&mut Health>(left).unwrap().invincible_elapsed = 5.0;

    // Fire a ball into the left paddle each tick for half a second
    let mut ball = place_ball(&mut mode, Vec2::new(-6.1, 0.0), Vec2::new(-1.0, 0.0));
    for _ in 0..10 {
        mode.update(0.05);
        let b = *mode.world.get::<&Ball>(ball).unwrap();
        assert!(b.vel.x > 0.0);
        let _ = mode.world.despawn(ball);
        ball = place_ball(&mut mode, Vec2::new(-6.1, 0.0), Vec2::new(-1.0, 0.0));
    }

    assert_eq!(mode.snapshot().hp(Side::Left), mode.config.start_hp - 1);
}

#[test]
fn test_first_second_is_protected() {
    let mut mode = new_mode(10);
    place_ball(&mut mode, Vec2::new(-6.1, 0.0), Vec2::new(-1.0, 0.0));

    mode.update(0.05);

    assert_eq!(mode.snapshot().hp(Side::Left), mode.config.start_hp);
    assert_eq!(mode.events.paddle_bounces, 1);
}

#[test]
fn test_grazing_ball_toward_ai_is_survivable() {
    let mut mode = new_mode(11);
    place_ball(&mut mode, Vec2::new(0.0, 0.0), Vec2::new(1e-30, 1.0));
    place_ball(&mut mode, Vec2::new(1.0, 2.0), Vec2::new(f32::MIN_POSITIVE, -1.0));

    for _ in 0..200 {
        mode.update(0.02);
    }

    let s = mode.snapshot();
    assert!(s.paddles.iter().all(|p| p.paddle.pos.y.is_finite()));
}

#[test]
fn test_same_seed_same_match() {
    let mut a = new_mode(12);
    let mut b = new_mode(12);
    for _ in 0..400 {
        a.update(0.025);
        b.update(0.025);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_full_match_reaches_an_end() {
    let mut mode = new_mode(13);
    let size = UVec2::new(640, 480);
    let mut ticks = 0;
    while !mode.is_complete() && ticks < 200_000 {
        mode.update(1.0 / 60.0);
        if ticks % 600 == 0 {
            mode.draw(size).unwrap();
        }
        ticks += 1;
    }
    assert!(mode.is_complete(), "no winner after {ticks} ticks");
    assert!(mode.winner().is_some());
}
